//! Palette index resolution for pixel values.

use crate::Pixel;

/// Number of entries in the xterm 256-color palette.
pub const PALETTE_SIZE: u16 = 256;

/// Resolve a possibly-absent pixel to a palette index.
///
/// - A number `v` with `0 <= v < 256` maps to `floor(v)`
/// - Negative numbers, numbers `>= 256`, non-numeric leaves and absent
///   pixels (the row is too short) map to `default`
///
/// ## Example
///
/// ```rust
/// use halfblock_anim::{resolve_palette_index, Pixel};
///
/// assert_eq!(resolve_palette_index(Some(Pixel::Number(17.9)), 4), 17);
/// assert_eq!(resolve_palette_index(Some(Pixel::Number(256.0)), 4), 4);
/// assert_eq!(resolve_palette_index(Some(Pixel::Invalid), 4), 4);
/// assert_eq!(resolve_palette_index(None, 4), 4);
/// ```
#[inline]
pub fn resolve_palette_index(pixel: Option<Pixel>, default: u8) -> u8 {
    pixel.map_or(default, |p| p.palette_index(default))
}

impl Pixel {
    /// Palette index for this pixel, or `default` when it is not a valid index.
    #[inline]
    pub fn palette_index(self, default: u8) -> u8 {
        match self {
            // Truncation is floor here since v is non-negative.
            Pixel::Number(v) if (0.0..f64::from(PALETTE_SIZE)).contains(&v) => v as u8,
            Pixel::Number(_) | Pixel::Invalid => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_numbers() {
        assert_eq!(Pixel::Number(0.0).palette_index(9), 0);
        assert_eq!(Pixel::Number(1.0).palette_index(9), 1);
        assert_eq!(Pixel::Number(255.0).palette_index(9), 255);
    }

    #[test]
    fn fractional_numbers_floor() {
        assert_eq!(Pixel::Number(0.99).palette_index(9), 0);
        assert_eq!(Pixel::Number(42.5).palette_index(9), 42);
        assert_eq!(Pixel::Number(255.999).palette_index(9), 255);
    }

    #[test]
    fn out_of_range_numbers() {
        assert_eq!(Pixel::Number(256.0).palette_index(9), 9);
        assert_eq!(Pixel::Number(300.0).palette_index(9), 9);
        assert_eq!(Pixel::Number(-1.0).palette_index(9), 9);
        assert_eq!(Pixel::Number(-0.5).palette_index(9), 9);
        assert_eq!(Pixel::Number(f64::NAN).palette_index(9), 9);
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(Pixel::Number(-0.0).palette_index(9), 0);
    }

    #[test]
    fn invalid_and_missing() {
        assert_eq!(Pixel::Invalid.palette_index(7), 7);
        assert_eq!(resolve_palette_index(None, 7), 7);
        assert_eq!(resolve_palette_index(Some(Pixel::Number(3.0)), 7), 3);
    }

    #[test]
    fn palette_size_is_exclusive_bound() {
        let size = f64::from(PALETTE_SIZE);
        assert_eq!(Pixel::Number(size - 1.0).palette_index(9), 255);
        assert_eq!(Pixel::Number(size).palette_index(9), 9);
    }

    #[test]
    fn every_integer_index_round_trips() {
        for i in 0..=255u8 {
            assert_eq!(Pixel::Number(f64::from(i)).palette_index(0), i);
        }
    }
}
