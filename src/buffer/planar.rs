use super::{PixelBuffer, pixel_count, warn_double_release, zeroed};
use crate::color::{RGB8, set_planar};
use crate::error::PixmapError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Planar buffer: separate R, G and B planes of `width * height` bytes each.
#[derive(Clone, Debug)]
pub struct PlanarBuffer {
    width: usize,
    height: usize,
    planes: [Vec<u8>; 3],
    released: bool,
}

impl PlanarBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, PixmapError> {
        Self::with_limits(width, height, &Limits::default())
    }

    pub fn with_limits(width: usize, height: usize, limits: &Limits) -> Result<Self, PixmapError> {
        let len = pixel_count(PixelLayout::Planar24, width, height, limits)?;
        Ok(Self {
            width,
            height,
            planes: [zeroed(len)?, zeroed(len)?, zeroed(len)?],
            released: false,
        })
    }

    /// The R, G and B plane values at `index`.
    #[inline]
    pub fn get_encoded(&self, index: usize) -> [u8; 3] {
        [
            self.planes[0][index],
            self.planes[1][index],
            self.planes[2][index],
        ]
    }

    /// The R, G and B planes.
    pub fn planes(&self) -> [&[u8]; 3] {
        [&self.planes[0], &self.planes[1], &self.planes[2]]
    }
}

impl PixelBuffer for PlanarBuffer {
    fn layout(&self) -> PixelLayout {
        PixelLayout::Planar24
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set(&mut self, index: usize, r: u8, g: u8, b: u8) {
        set_planar(&mut self.planes, index, r, g, b);
    }

    #[inline]
    fn get(&self, index: usize) -> RGB8 {
        let [r, g, b] = self.get_encoded(index);
        RGB8::new(r, g, b)
    }

    fn fill_row(&mut self, row: usize, r: u8, g: u8, b: u8) {
        let range = row * self.width..(row + 1) * self.width;
        for (plane, value) in self.planes.iter_mut().zip([r, g, b]) {
            plane[range.clone()].fill(value);
        }
    }

    fn clear(&mut self, r: u8, g: u8, b: u8) {
        for (plane, value) in self.planes.iter_mut().zip([r, g, b]) {
            plane.fill(value);
        }
    }

    fn release(&mut self) -> bool {
        if self.released {
            warn_double_release(self.layout());
            return false;
        }
        self.planes = [Vec::new(), Vec::new(), Vec::new()];
        self.released = true;
        true
    }

    fn is_released(&self) -> bool {
        self.released
    }
}
