use core::fmt;
use core::str::FromStr;

use crate::error::PixmapError;

/// Pixel buffer memory layout.
///
/// All layouts hold the same 8-bit RGB triple per pixel and produce
/// identical PPM output; they differ only in how storage is arranged.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// One allocation of 3-byte R, G, B cells.
    Interleaved24,
    /// One allocation of `u32` cells, `0x00RRGGBB`.
    Packed32,
    /// Three 1-byte planes (R, G, B) indexed in lockstep.
    Planar24,
}

impl PixelLayout {
    pub const ALL: [PixelLayout; 3] = [Self::Interleaved24, Self::Packed32, Self::Planar24];

    /// Bytes of storage per pixel, summed over all planes.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Interleaved24 | Self::Planar24 => 3,
            Self::Packed32 => 4,
        }
    }

    /// Number of separate allocations backing a buffer.
    pub fn planes(&self) -> usize {
        match self {
            Self::Interleaved24 | Self::Packed32 => 1,
            Self::Planar24 => 3,
        }
    }

    /// Command-line token selecting this layout.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Interleaved24 => "24",
            Self::Packed32 => "32",
            Self::Planar24 => "24ptr",
        }
    }

    /// Default output file name for this layout.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Interleaved24 => "image_24bit.ppm",
            Self::Packed32 => "image_32bit.ppm",
            Self::Planar24 => "image_24bit_ptr.ppm",
        }
    }
}

impl FromStr for PixelLayout {
    type Err = PixmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.token() == s)
            .ok_or_else(|| PixmapError::InvalidLayout(s.into()))
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interleaved24 => "24-bit",
            Self::Packed32 => "32-bit",
            Self::Planar24 => "24-bit planar",
        };
        f.write_str(name)
    }
}
