//! Pixel buffers: one contract, three memory layouts.
//!
//! Every buffer owns `width * height` zero-initialized cells addressed by a
//! row-major linear index (`row * width + column`, top row first). Indexing
//! outside `0..len()` is a caller bug and panics.
//!
//! Storage is freed when the buffer is dropped. [`PixelBuffer::release`]
//! frees it early; a second release only logs a warning, and the fill and
//! encode functions reject a released buffer with [`PixmapError::Released`].

mod interleaved;
mod packed;
mod planar;

pub use interleaved::InterleavedBuffer;
pub use packed::PackedBuffer;
pub use planar::PlanarBuffer;

use crate::color::RGB8;
use crate::error::PixmapError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Common interface of the three buffer layouts.
pub trait PixelBuffer {
    fn layout(&self) -> PixelLayout;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Number of pixels (`width * height`), or 0 once released.
    fn len(&self) -> usize {
        if self.is_released() {
            return 0;
        }
        self.width() * self.height()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store `(r, g, b)` at linear `index`.
    fn set(&mut self, index: usize, r: u8, g: u8, b: u8);

    /// Decode the pixel at linear `index`.
    fn get(&self, index: usize) -> RGB8;

    /// Set every pixel of `row` to one color.
    fn fill_row(&mut self, row: usize, r: u8, g: u8, b: u8) {
        let start = row * self.width();
        for index in start..start + self.width() {
            self.set(index, r, g, b);
        }
    }

    /// Set every pixel to one color.
    fn clear(&mut self, r: u8, g: u8, b: u8) {
        for index in 0..self.len() {
            self.set(index, r, g, b);
        }
    }

    /// Free the backing storage.
    ///
    /// Returns `false`, after logging a warning, if the storage was already
    /// released. Any pixel access after release panics.
    fn release(&mut self) -> bool;

    fn is_released(&self) -> bool;
}

/// Allocate a zeroed buffer of the requested layout.
pub fn create_buffer(
    layout: PixelLayout,
    width: usize,
    height: usize,
    limits: &Limits,
) -> Result<Box<dyn PixelBuffer>, PixmapError> {
    Ok(match layout {
        PixelLayout::Interleaved24 => Box::new(InterleavedBuffer::with_limits(width, height, limits)?),
        PixelLayout::Packed32 => Box::new(PackedBuffer::with_limits(width, height, limits)?),
        PixelLayout::Planar24 => Box::new(PlanarBuffer::with_limits(width, height, limits)?),
    })
}

/// Validate dimensions for `layout` and return the pixel count.
pub(crate) fn pixel_count(
    layout: PixelLayout,
    width: usize,
    height: usize,
    limits: &Limits,
) -> Result<usize, PixmapError> {
    if width == 0 || height == 0 {
        return Err(PixmapError::ZeroDimension { width, height });
    }
    limits.check(width, height)?;
    let pixels = width
        .checked_mul(height)
        .ok_or(PixmapError::DimensionsTooLarge { width, height })?;
    let bytes = pixels
        .checked_mul(layout.bytes_per_pixel())
        .ok_or(PixmapError::DimensionsTooLarge { width, height })?;
    limits.check_memory(bytes)?;
    tracing::debug!(%layout, width, height, bytes, "allocating pixel buffer");
    Ok(pixels)
}

/// Allocate `len` default-valued cells without aborting on exhaustion.
pub(crate) fn zeroed<T: Copy + Default>(len: usize) -> Result<Vec<T>, PixmapError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| PixmapError::AllocationFailed {
            bytes: len.saturating_mul(size_of::<T>()),
        })?;
    cells.resize(len, T::default());
    Ok(cells)
}

pub(crate) fn warn_double_release(layout: PixelLayout) {
    tracing::warn!(%layout, "pixel buffer already released");
}

/// Fail with [`PixmapError::Released`] if `buffer` no longer has storage.
pub(crate) fn ensure_live(
    buffer: &dyn PixelBuffer,
    operation: &'static str,
) -> Result<(), PixmapError> {
    if buffer.is_released() {
        let layout = buffer.layout();
        tracing::warn!(%layout, operation, "pixel buffer used after release");
        return Err(PixmapError::Released { layout });
    }
    Ok(())
}
