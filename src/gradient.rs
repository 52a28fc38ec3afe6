//! Buffer fills: the vertical sky gradient and a uniform clear.

use enough::Stop;

use crate::buffer::{PixelBuffer, ensure_live};
use crate::error::PixmapError;

/// Blue channel of every sky pixel.
pub const SKY_BLUE: u8 = 255;

/// Red/green shade of `row` in a sky of `height` rows.
///
/// `k = floor(row * 255 / height)` truncated to a byte, then taken modulo
/// 255. Integer arithmetic only, so output is bit-exact across platforms.
/// A sky with no rows has shade 0.
pub fn sky_shade(row: usize, height: usize) -> u8 {
    let Some(k) = (row as u128 * 255).checked_div(height as u128) else {
        return 0;
    };
    (k as u8) % 255
}

/// Fill `buffer` with the sky gradient: row `i` becomes `(k, k, 255)` with
/// `k = sky_shade(i, height)`.
///
/// Fails with [`PixmapError::Released`] if the buffer was released.
pub fn fill_sky(buffer: &mut dyn PixelBuffer, stop: &dyn Stop) -> Result<(), PixmapError> {
    ensure_live(buffer, "fill")?;
    let height = buffer.height();
    for row in 0..height {
        if row % 16 == 0 {
            stop.check()?;
        }
        let k = sky_shade(row, height);
        buffer.fill_row(row, k, k, SKY_BLUE);
    }
    Ok(())
}

/// Set every pixel of `buffer` to `(r, g, b)`.
///
/// Fails with [`PixmapError::Released`] if the buffer was released.
pub fn clear_frame(
    buffer: &mut dyn PixelBuffer,
    r: u8,
    g: u8,
    b: u8,
    stop: &dyn Stop,
) -> Result<(), PixmapError> {
    ensure_live(buffer, "clear")?;
    stop.check()?;
    buffer.clear(r, g, b);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::create_buffer;
    use crate::color::RGB8;
    use crate::limits::Limits;
    use crate::pixel::PixelLayout;
    use enough::{StopReason, Unstoppable};

    #[test]
    fn shade_reference_rows() {
        assert_eq!(sky_shade(0, 800), 0);
        assert_eq!(sky_shade(400, 800), 127);
        assert_eq!(sky_shade(799, 800), 254);
    }

    #[test]
    fn shade_never_reaches_255() {
        for height in [1, 2, 3, 255, 256, 1000] {
            for row in 0..height {
                assert!(sky_shade(row, height) < 255);
            }
        }
    }

    #[test]
    fn shade_of_empty_sky_is_zero() {
        assert_eq!(sky_shade(0, 0), 0);
        assert_eq!(sky_shade(5, 0), 0);
    }

    #[test]
    fn released_buffers_are_not_filled() {
        for layout in PixelLayout::ALL {
            let mut buf = create_buffer(layout, 2, 2, &Limits::default()).unwrap();
            buf.release();
            assert!(matches!(
                fill_sky(buf.as_mut(), &Unstoppable),
                Err(PixmapError::Released { layout: l }) if l == layout
            ));
            assert!(matches!(
                clear_frame(buf.as_mut(), 1, 2, 3, &Unstoppable),
                Err(PixmapError::Released { .. })
            ));
        }
    }

    #[test]
    fn shade_survives_large_rows() {
        let height = usize::MAX / 2;
        assert_eq!(sky_shade(height - 1, height), 254);
    }

    #[test]
    fn sky_rows_are_uniform() {
        for layout in PixelLayout::ALL {
            let mut buf = create_buffer(layout, 5, 800, &Limits::default()).unwrap();
            fill_sky(buf.as_mut(), &Unstoppable).unwrap();
            for (row, k) in [(0, 0), (400, 127), (799, 254)] {
                for col in 0..5 {
                    assert_eq!(buf.get(row * 5 + col), RGB8::new(k, k, 255), "{layout:?}");
                }
            }
        }
    }

    #[test]
    fn clear_sets_every_pixel() {
        let mut buf = create_buffer(PixelLayout::Planar24, 3, 3, &Limits::default()).unwrap();
        clear_frame(buf.as_mut(), 4, 5, 6, &Unstoppable).unwrap();
        assert!((0..9).all(|i| buf.get(i) == RGB8::new(4, 5, 6)));
    }

    struct AlwaysStop;

    impl Stop for AlwaysStop {
        fn check(&self) -> Result<(), StopReason> {
            Err(StopReason::Cancelled)
        }
    }

    #[test]
    fn fill_honors_stop() {
        let mut buf = create_buffer(PixelLayout::Packed32, 2, 2, &Limits::default()).unwrap();
        let err = fill_sky(buf.as_mut(), &AlwaysStop).unwrap_err();
        assert!(matches!(err, PixmapError::Cancelled(StopReason::Cancelled)));
    }
}
