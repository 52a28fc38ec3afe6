use super::{PixelBuffer, pixel_count, warn_double_release, zeroed};
use crate::color::{RGB8, pack32, unpack32};
use crate::error::PixmapError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Packed-32 buffer: one allocation of `width * height` words, `0x00RRGGBB`.
#[derive(Clone, Debug)]
pub struct PackedBuffer {
    width: usize,
    height: usize,
    words: Vec<u32>,
    released: bool,
}

impl PackedBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, PixmapError> {
        Self::with_limits(width, height, &Limits::default())
    }

    pub fn with_limits(width: usize, height: usize, limits: &Limits) -> Result<Self, PixmapError> {
        let len = pixel_count(PixelLayout::Packed32, width, height, limits)?;
        Ok(Self {
            width,
            height,
            words: zeroed(len)?,
            released: false,
        })
    }

    /// The stored word at `index`.
    #[inline]
    pub fn get_encoded(&self, index: usize) -> u32 {
        self.words[index]
    }

    pub fn as_words(&self) -> &[u32] {
        &self.words
    }
}

impl PixelBuffer for PackedBuffer {
    fn layout(&self) -> PixelLayout {
        PixelLayout::Packed32
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.words[index] = pack32(r, g, b);
    }

    #[inline]
    fn get(&self, index: usize) -> RGB8 {
        let (r, g, b) = unpack32(self.words[index]);
        RGB8::new(r, g, b)
    }

    fn fill_row(&mut self, row: usize, r: u8, g: u8, b: u8) {
        let start = row * self.width;
        self.words[start..start + self.width].fill(pack32(r, g, b));
    }

    fn clear(&mut self, r: u8, g: u8, b: u8) {
        self.words.fill(pack32(r, g, b));
    }

    fn release(&mut self) -> bool {
        if self.released {
            warn_double_release(self.layout());
            return false;
        }
        self.words = Vec::new();
        self.released = true;
        true
    }

    fn is_released(&self) -> bool {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_stores_whole_words() {
        let mut buf = PackedBuffer::new(3, 1).unwrap();
        buf.clear(0x12, 0x34, 0x56);
        assert!(buf.as_words().iter().all(|&w| w == 0x0012_3456));
    }

    #[test]
    fn top_byte_stays_zero() {
        let mut buf = PackedBuffer::new(1, 1).unwrap();
        buf.set(0, 255, 255, 255);
        assert_eq!(buf.get_encoded(0), 0x00FF_FFFF);
    }
}
