//! # skyppm
//!
//! Procedural sky-gradient images in three pixel-buffer layouts, written as
//! ASCII PPM (P3).
//!
//! ## Buffer layouts
//!
//! - **Interleaved24**: one allocation of 3-byte R, G, B cells
//! - **Packed32**: one allocation of `u32` cells, `0x00RRGGBB`
//! - **Planar24**: three 1-byte planes indexed in lockstep
//!
//! All three implement [`PixelBuffer`] and produce byte-identical output, so
//! they can be swapped to compare memory-layout strategies.
//!
//! ## Non-Goals
//!
//! - Decoding any format
//! - Binary PPM (P6) or other formats
//! - Color management, resizing, filtering
//!
//! ## Usage
//!
//! ```no_run
//! use skyppm::{Image, PixelLayout, Unstoppable};
//!
//! let mut image = Image::create(PixelLayout::Packed32, 800, 600, "sky.ppm")?;
//! image.fill_sky(Unstoppable)?;
//! image.write(Unstoppable)?;
//! image.release()?;
//! # Ok::<(), skyppm::PixmapError>(())
//! ```
//!
//! In-memory, with the conventional `width height` header:
//!
//! ```
//! use skyppm::{HeaderOrder, Image, PixelLayout, Unstoppable};
//!
//! let mut image = Image::new(PixelLayout::Planar24, 2, 1, Vec::new())?
//!     .with_header_order(HeaderOrder::WidthFirst);
//! image.clear(10, 20, 30, Unstoppable)?;
//! image.write(Unstoppable)?;
//! let bytes = image.finish()?;
//! assert_eq!(bytes, b"P3\n2 1\n255\n10 20 30 \n10 20 30 \n");
//! # Ok::<(), skyppm::PixmapError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod image;
mod limits;
mod pixel;

pub mod buffer;
pub mod color;
pub mod gradient;
pub mod ppm;

// Re-exports
pub use buffer::{InterleavedBuffer, PackedBuffer, PixelBuffer, PlanarBuffer, create_buffer};
pub use color::{RGB8, pack32, set_planar, set24, unpack32};
pub use enough::{Stop, Unstoppable};
pub use error::PixmapError;
pub use gradient::{clear_frame, fill_sky, sky_shade};
pub use image::{Image, ImageState};
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use ppm::{HeaderOrder, PpmEncoder, encode_ppm_to_vec};
