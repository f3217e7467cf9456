use std::fmt;

/// Packed `0xRRGGBB` sprite tint.
///
/// Invariant: the top byte is always zero. Alpha is carried separately by the
/// sprite (see `RoomObjectSprite::alpha`).
///
/// `Display` renders the packed value as a decimal integer, which is the
/// stringified form stored in compiled sprite records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color(u32);

impl Color {
    /// Untinted.
    pub const WHITE: Self = Self(0x00FF_FFFF);
    pub const BLACK: Self = Self(0);

    /// Creates a tint from a packed value; bits above 24 are dropped.
    #[inline]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn rgb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::default().to_string(), "16777215");
    }

    #[test]
    fn from_rgb_masks_high_byte() {
        assert_eq!(Color::from_rgb(0xAB12_3456).rgb(), 0x12_3456);
    }

    #[test]
    fn channels_round_trip() {
        let c = Color::from_rgb_u8(0x12, 0x34, 0x56);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
        assert_eq!(c, Color::from_rgb(0x12_3456));
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Color::from_rgb(0xFF0000).to_string(), "16711680");
        assert_eq!(Color::BLACK.to_string(), "0");
    }
}
