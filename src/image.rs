//! One-shot image lifecycle: create, fill, write, release.

use core::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use enough::Stop;

use crate::buffer::{PixelBuffer, create_buffer};
use crate::error::PixmapError;
use crate::gradient;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::ppm::{HeaderOrder, PpmEncoder};

/// Lifecycle stage of an [`Image`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageState {
    /// Buffer allocated and zeroed, sink open.
    Created,
    /// One fill applied.
    Filled,
    /// PPM written to the sink.
    Written,
    /// Buffer freed and sink closed.
    Released,
}

impl fmt::Display for ImageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Filled => "filled",
            Self::Written => "written",
            Self::Released => "released",
        };
        f.write_str(name)
    }
}

/// A pixel buffer paired with the sink it will be written to.
///
/// Each operation runs once, in order: [`fill_sky`](Self::fill_sky) or
/// [`clear`](Self::clear), then [`write`](Self::write), then
/// [`release`](Self::release) or [`finish`](Self::finish). Out-of-order
/// calls fail with [`PixmapError::InvalidState`] and change nothing.
pub struct Image<W: Write> {
    buffer: Box<dyn PixelBuffer>,
    sink: Option<W>,
    encoder: PpmEncoder,
    state: ImageState,
}

impl Image<BufWriter<File>> {
    /// Allocate a buffer and create the output file at `path`.
    ///
    /// The buffer is allocated before the file is created, so a failed
    /// allocation leaves nothing on disk.
    pub fn create(
        layout: PixelLayout,
        width: usize,
        height: usize,
        path: impl AsRef<Path>,
    ) -> Result<Self, PixmapError> {
        Self::create_with_limits(layout, width, height, path, &Limits::default())
    }

    pub fn create_with_limits(
        layout: PixelLayout,
        width: usize,
        height: usize,
        path: impl AsRef<Path>,
        limits: &Limits,
    ) -> Result<Self, PixmapError> {
        let path = path.as_ref();
        let buffer = create_buffer(layout, width, height, limits)?;
        let file = File::create(path).map_err(|source| PixmapError::SinkOpen {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened image file");
        Ok(Self::from_parts(buffer, BufWriter::new(file)))
    }
}

impl<W: Write> Image<W> {
    /// Allocate a zeroed buffer that will be written to `sink`.
    pub fn new(
        layout: PixelLayout,
        width: usize,
        height: usize,
        sink: W,
    ) -> Result<Self, PixmapError> {
        Self::with_limits(layout, width, height, sink, &Limits::default())
    }

    pub fn with_limits(
        layout: PixelLayout,
        width: usize,
        height: usize,
        sink: W,
        limits: &Limits,
    ) -> Result<Self, PixmapError> {
        let buffer = create_buffer(layout, width, height, limits)?;
        Ok(Self::from_parts(buffer, sink))
    }

    fn from_parts(buffer: Box<dyn PixelBuffer>, sink: W) -> Self {
        tracing::debug!(
            layout = %buffer.layout(),
            width = buffer.width(),
            height = buffer.height(),
            "image created"
        );
        Self {
            buffer,
            sink: Some(sink),
            encoder: PpmEncoder::new(),
            state: ImageState::Created,
        }
    }

    pub fn with_header_order(mut self, order: HeaderOrder) -> Self {
        self.encoder = self.encoder.with_header_order(order);
        self
    }

    pub fn layout(&self) -> PixelLayout {
        self.buffer.layout()
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    pub fn buffer(&self) -> &dyn PixelBuffer {
        self.buffer.as_ref()
    }

    /// Fill with the vertical sky gradient.
    pub fn fill_sky(&mut self, stop: impl Stop) -> Result<(), PixmapError> {
        self.expect_state(ImageState::Created, "fill")?;
        gradient::fill_sky(self.buffer.as_mut(), &stop)?;
        self.advance(ImageState::Filled);
        Ok(())
    }

    /// Fill with one uniform color.
    pub fn clear(&mut self, r: u8, g: u8, b: u8, stop: impl Stop) -> Result<(), PixmapError> {
        self.expect_state(ImageState::Created, "fill")?;
        gradient::clear_frame(self.buffer.as_mut(), r, g, b, &stop)?;
        self.advance(ImageState::Filled);
        Ok(())
    }

    /// Encode the filled buffer to the sink as PPM.
    pub fn write(&mut self, stop: impl Stop) -> Result<(), PixmapError> {
        self.expect_state(ImageState::Filled, "write")?;
        let Some(sink) = self.sink.as_mut() else {
            return Err(PixmapError::InvalidState {
                operation: "write",
                state: self.state,
            });
        };
        self.encoder.encode(self.buffer.as_ref(), sink, &stop)?;
        self.advance(ImageState::Written);
        Ok(())
    }

    /// Flush and close the sink and free the buffer.
    ///
    /// Allowed from any state. Returns `Ok(false)`, after logging a warning,
    /// if the image was already released.
    pub fn release(&mut self) -> Result<bool, PixmapError> {
        if self.state == ImageState::Released {
            tracing::warn!("image already released");
            return Ok(false);
        }
        self.buffer.release();
        self.advance(ImageState::Released);
        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
        }
        Ok(true)
    }

    /// Flush the sink, free the buffer and hand the sink back.
    pub fn finish(mut self) -> Result<W, PixmapError> {
        self.expect_state_not(ImageState::Released, "finish")?;
        let Some(mut sink) = self.sink.take() else {
            return Err(PixmapError::InvalidState {
                operation: "finish",
                state: self.state,
            });
        };
        self.buffer.release();
        self.advance(ImageState::Released);
        sink.flush()?;
        Ok(sink)
    }

    fn expect_state(&self, expected: ImageState, operation: &'static str) -> Result<(), PixmapError> {
        if self.state != expected {
            return Err(self.reject(operation));
        }
        Ok(())
    }

    fn expect_state_not(
        &self,
        forbidden: ImageState,
        operation: &'static str,
    ) -> Result<(), PixmapError> {
        if self.state == forbidden {
            return Err(self.reject(operation));
        }
        Ok(())
    }

    fn reject(&self, operation: &'static str) -> PixmapError {
        tracing::warn!(operation, state = %self.state, "rejected out-of-order image operation");
        PixmapError::InvalidState {
            operation,
            state: self.state,
        }
    }

    fn advance(&mut self, next: ImageState) {
        tracing::debug!(from = %self.state, to = %next, "image state change");
        self.state = next;
    }
}

impl<W: Write> fmt::Debug for Image<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("layout", &self.layout())
            .field("width", &self.width())
            .field("height", &self.height())
            .field("header_order", &self.encoder.header_order())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
