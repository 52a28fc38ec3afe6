use rgb::ComponentBytes as _;

use super::{PixelBuffer, pixel_count, warn_double_release, zeroed};
use crate::color::{RGB8, set24};
use crate::error::PixmapError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Packed-24 buffer: one allocation of `width * height` 3-byte RGB cells.
#[derive(Clone, Debug)]
pub struct InterleavedBuffer {
    width: usize,
    height: usize,
    pixels: Vec<RGB8>,
    released: bool,
}

impl InterleavedBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, PixmapError> {
        Self::with_limits(width, height, &Limits::default())
    }

    pub fn with_limits(width: usize, height: usize, limits: &Limits) -> Result<Self, PixmapError> {
        let len = pixel_count(PixelLayout::Interleaved24, width, height, limits)?;
        Ok(Self {
            width,
            height,
            pixels: zeroed(len)?,
            released: false,
        })
    }

    /// The stored packed-24 cell at `index`.
    #[inline]
    pub fn get_encoded(&self, index: usize) -> RGB8 {
        self.pixels[index]
    }

    pub fn as_pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// Raw `R, G, B, R, G, B, ...` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Zero-copy 2D view of the pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(&self.pixels, self.width, self.height)
    }
}

impl PixelBuffer for InterleavedBuffer {
    fn layout(&self) -> PixelLayout {
        PixelLayout::Interleaved24
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set(&mut self, index: usize, r: u8, g: u8, b: u8) {
        set24(&mut self.pixels[index], r, g, b);
    }

    #[inline]
    fn get(&self, index: usize) -> RGB8 {
        self.get_encoded(index)
    }

    fn fill_row(&mut self, row: usize, r: u8, g: u8, b: u8) {
        let start = row * self.width;
        self.pixels[start..start + self.width].fill(RGB8::new(r, g, b));
    }

    fn clear(&mut self, r: u8, g: u8, b: u8) {
        self.pixels.fill(RGB8::new(r, g, b));
    }

    fn release(&mut self) -> bool {
        if self.released {
            warn_double_release(self.layout());
            return false;
        }
        self.pixels = Vec::new();
        self.released = true;
        true
    }

    fn is_released(&self) -> bool {
        self.released
    }
}
