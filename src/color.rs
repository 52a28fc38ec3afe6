//! Color codec: conversions between an `(r, g, b)` byte triple and the three
//! storage encodings.
//!
//! - packed-24: an [`RGB8`] struct, bytes in R, G, B order
//! - packed-32: a `u32` laid out as `0x00RRGGBB`; the top byte is ignored
//! - planar: three same-length byte planes sharing one index

pub use rgb::RGB8;

const RED_MASK: u32 = 0x00FF_0000;
const GREEN_MASK: u32 = 0x0000_FF00;
const BLUE_MASK: u32 = 0x0000_00FF;

/// Pack a triple into a `0x00RRGGBB` word.
#[inline]
pub const fn pack32(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Unpack a `0x??RRGGBB` word. The top byte is ignored.
#[inline]
pub const fn unpack32(color: u32) -> (u8, u8, u8) {
    (
        ((color & RED_MASK) >> 16) as u8,
        ((color & GREEN_MASK) >> 8) as u8,
        (color & BLUE_MASK) as u8,
    )
}

/// Store a triple into a packed-24 cell.
#[inline]
pub fn set24(cell: &mut RGB8, r: u8, g: u8, b: u8) {
    cell.r = r;
    cell.g = g;
    cell.b = b;
}

/// Store a triple at `index` across the R, G and B planes.
///
/// Panics if `index` is out of range for any plane.
#[inline]
pub fn set_planar(planes: &mut [Vec<u8>; 3], index: usize, r: u8, g: u8, b: u8) {
    planes[0][index] = r;
    planes[1][index] = g;
    planes[2][index] = b;
}
