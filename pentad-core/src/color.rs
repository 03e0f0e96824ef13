//! GRB color packing for the WS2812 matrix

/// Color the matrix draws digits in. Dim blue, easy on the eyes.
pub const DIGIT_COLOR: Grb = Grb::new(0, 0, 20);

/// One WS2812 pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Grb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the 24-bit wire word, green in the top byte.
    ///
    /// The channel order is what the WS2812 shifts out first, not a
    /// convention we get to pick.
    pub const fn word(self) -> u32 {
        ((self.g as u32) << 16) | ((self.r as u32) << 8) | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_packs_grb_order() {
        assert_eq!(Grb::new(0x12, 0x34, 0x56).word(), 0x34_12_56);
    }

    #[test]
    fn test_digit_color_is_dim_blue() {
        assert_eq!(DIGIT_COLOR.word(), 0x00_00_14);
    }
}
