//! ASCII PPM (P3) encoder.
//!
//! Output layout:
//!
//! ```text
//! P3
//! <height> <width>
//! 255
//! R G B
//! ...
//! ```
//!
//! One pixel per line, in linear index order, each channel followed by a
//! single space. The dimension line lists height first by default; use
//! [`HeaderOrder::WidthFirst`] for the conventional order.

use std::io::Write;

use enough::Stop;

use crate::buffer::{PixelBuffer, ensure_live};
use crate::error::PixmapError;

/// Maximum channel value written to the header.
pub const MAX_VALUE: u8 = 255;

/// Order of the two numbers on the dimension line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderOrder {
    /// `<height> <width>`, kept for byte-compatible output.
    #[default]
    HeightFirst,
    /// `<width> <height>`, the order PPM readers expect.
    WidthFirst,
}

/// Streaming P3 encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct PpmEncoder {
    order: HeaderOrder,
}

impl PpmEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_order(mut self, order: HeaderOrder) -> Self {
        self.order = order;
        self
    }

    pub fn header_order(&self) -> HeaderOrder {
        self.order
    }

    /// The three header lines, newline-terminated.
    pub fn header(&self, width: usize, height: usize) -> String {
        let (first, second) = match self.order {
            HeaderOrder::HeightFirst => (height, width),
            HeaderOrder::WidthFirst => (width, height),
        };
        format!("P3\n{first} {second}\n{MAX_VALUE}\n")
    }

    /// Write `buffer` to `sink`. Pixels are emitted one row at a time.
    ///
    /// A released buffer fails with [`PixmapError::Released`] before any
    /// byte reaches the sink.
    pub fn encode<W: Write + ?Sized>(
        &self,
        buffer: &dyn PixelBuffer,
        sink: &mut W,
        stop: &dyn Stop,
    ) -> Result<(), PixmapError> {
        ensure_live(buffer, "encode")?;
        let width = buffer.width();
        let height = buffer.height();
        sink.write_all(self.header(width, height).as_bytes())?;

        // "255 255 255 \n" is the longest pixel line
        let mut line = Vec::with_capacity(width.saturating_mul(13));
        for row in 0..height {
            if row % 16 == 0 {
                stop.check()?;
            }
            line.clear();
            let start = row * width;
            for index in start..start + width {
                let px = buffer.get(index);
                writeln!(line, "{} {} {} ", px.r, px.g, px.b)?;
            }
            sink.write_all(&line)?;
        }
        Ok(())
    }

    /// Encode `buffer` into an owned byte vector.
    pub fn encode_to_vec(
        &self,
        buffer: &dyn PixelBuffer,
        stop: &dyn Stop,
    ) -> Result<Vec<u8>, PixmapError> {
        ensure_live(buffer, "encode")?;
        let header_len = self.header(buffer.width(), buffer.height()).len();
        let mut out = Vec::new();
        out.try_reserve(header_len.saturating_add(buffer.len().saturating_mul(13)))
            .map_err(|_| PixmapError::AllocationFailed {
                bytes: buffer.len().saturating_mul(13),
            })?;
        self.encode(buffer, &mut out, stop)?;
        Ok(out)
    }
}

/// Encode `buffer` to P3 bytes with the given header order.
pub fn encode_ppm_to_vec(
    buffer: &dyn PixelBuffer,
    order: HeaderOrder,
    stop: impl Stop,
) -> Result<Vec<u8>, PixmapError> {
    PpmEncoder::new()
        .with_header_order(order)
        .encode_to_vec(buffer, &stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{InterleavedBuffer, PackedBuffer, create_buffer};
    use crate::limits::Limits;
    use crate::pixel::PixelLayout;
    use enough::Unstoppable;

    #[test]
    fn header_orders() {
        assert_eq!(PpmEncoder::new().header(640, 480), "P3\n480 640\n255\n");
        assert_eq!(
            PpmEncoder::new()
                .with_header_order(HeaderOrder::WidthFirst)
                .header(640, 480),
            "P3\n640 480\n255\n"
        );
    }

    #[test]
    fn pixels_follow_index_order() {
        let mut buf = PackedBuffer::new(3, 1).unwrap();
        buf.set(0, 1, 2, 3);
        buf.set(2, 255, 0, 128);
        let out = encode_ppm_to_vec(&buf, HeaderOrder::HeightFirst, Unstoppable).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n1 3\n255\n1 2 3 \n0 0 0 \n255 0 128 \n"
        );
    }

    #[test]
    fn non_square_header_is_height_first() {
        let buf = InterleavedBuffer::new(2, 3).unwrap();
        let out = encode_ppm_to_vec(&buf, HeaderOrder::default(), Unstoppable).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("P3\n3 2\n255\n"));
        assert_eq!(text.lines().count(), 3 + 6);
    }

    #[test]
    fn sink_errors_propagate() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buf = InterleavedBuffer::new(1, 1).unwrap();
        let err = PpmEncoder::new()
            .encode(&buf, &mut Broken, &Unstoppable)
            .unwrap_err();
        assert!(matches!(err, PixmapError::Io(_)));
    }

    #[test]
    fn released_buffers_write_nothing() {
        for layout in PixelLayout::ALL {
            let mut buf = create_buffer(layout, 2, 2, &Limits::default()).unwrap();
            buf.release();
            let mut sink = Vec::new();
            let err = PpmEncoder::new()
                .encode(buf.as_ref(), &mut sink, &Unstoppable)
                .unwrap_err();
            assert!(matches!(err, PixmapError::Released { layout: l } if l == layout));
            assert!(sink.is_empty());
            assert!(matches!(
                encode_ppm_to_vec(buf.as_ref(), HeaderOrder::HeightFirst, Unstoppable),
                Err(PixmapError::Released { .. })
            ));
        }
    }
}
