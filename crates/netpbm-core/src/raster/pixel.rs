//! Pixel kinds
//!
//! A raster is generic over its pixel kind. Three kinds exist, one per
//! Netpbm image class:
//!
//! | kind | Rust type | formats |
//! |------|-----------|---------|
//! | bit  | `bool`    | P1, P4  |
//! | grey | `u8`      | P2, P5  |
//! | RGB  | [`Rgb`]   | P3, P6  |
//!
//! Samples are single bytes; see [`MAX_SAMPLE_VALUE`](super::MAX_SAMPLE_VALUE).

use std::fmt;

/// Discriminant for the three pixel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// Boolean pixel, `true` = set
    Bit,
    /// Single unsigned sample
    Grey,
    /// Three unsigned samples
    Rgb,
}

impl PixelKind {
    /// Number of samples carried by one pixel of this kind.
    pub fn samples_per_pixel(self) -> usize {
        match self {
            PixelKind::Bit | PixelKind::Grey => 1,
            PixelKind::Rgb => 3,
        }
    }
}

/// A value that can be stored in a [`Raster`](super::Raster).
pub trait Pixel: Copy + PartialEq + Eq + Default + fmt::Debug + 'static {
    /// Kind tag used to validate format tags.
    const KIND: PixelKind;

    /// Return the inverse of this pixel for the given max value.
    ///
    /// Bits are negated; samples become `max_value - sample`, saturating
    /// at zero for samples that exceed `max_value`.
    fn inverted(self, max_value: u8) -> Self;
}

impl Pixel for bool {
    const KIND: PixelKind = PixelKind::Bit;

    #[inline]
    fn inverted(self, _max_value: u8) -> Self {
        !self
    }
}

impl Pixel for u8 {
    const KIND: PixelKind = PixelKind::Grey;

    #[inline]
    fn inverted(self, max_value: u8) -> Self {
        max_value.saturating_sub(self)
    }
}

/// RGB color pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    /// Truncating average of the three channels.
    #[inline]
    pub fn average(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// Channels as an array in R, G, B order.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl Pixel for Rgb {
    const KIND: PixelKind = PixelKind::Rgb;

    #[inline]
    fn inverted(self, max_value: u8) -> Self {
        Rgb {
            r: max_value.saturating_sub(self.r),
            g: max_value.saturating_sub(self.g),
            b: max_value.saturating_sub(self.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_average_truncates() {
        assert_eq!(Rgb::new(1, 1, 2).average(), 1);
        assert_eq!(Rgb::WHITE.average(), 255);
        assert_eq!(Rgb::new(255, 0, 1).average(), 85);
    }

    #[test]
    fn test_inverted() {
        assert!(false.inverted(1));
        assert_eq!(200u8.inverted(255), 55);
        assert_eq!(10u8.inverted(15), 5);
        // out-of-range sample saturates instead of wrapping
        assert_eq!(20u8.inverted(15), 0);
        assert_eq!(Rgb::new(0, 100, 255).inverted(255), Rgb::new(255, 155, 0));
    }

    #[test]
    fn test_samples_per_pixel() {
        assert_eq!(PixelKind::Bit.samples_per_pixel(), 1);
        assert_eq!(PixelKind::Grey.samples_per_pixel(), 1);
        assert_eq!(PixelKind::Rgb.samples_per_pixel(), 3);
    }
}
