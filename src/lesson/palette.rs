//! Colors shared by the deck and the worksheet.

use crate::common::RGBColor;

pub const NAVY: RGBColor = RGBColor::new(0x1A, 0x23, 0x5C);
pub const TEAL: RGBColor = RGBColor::new(0x00, 0x97, 0x9C);
pub const GOLD: RGBColor = RGBColor::new(0xFF, 0xC0, 0x2E);
pub const WHITE: RGBColor = RGBColor::WHITE;
pub const LGRAY: RGBColor = RGBColor::new(0xF2, 0xF2, 0xF2);
pub const GREEN: RGBColor = RGBColor::new(0x2E, 0x86, 0x48);
pub const ORANGE: RGBColor = RGBColor::new(0xE8, 0x57, 0x1A);
pub const PURPLE: RGBColor = RGBColor::new(0x6A, 0x3D, 0x9A);
pub const RED: RGBColor = RGBColor::new(0xC0, 0x20, 0x20);

/// Light gray of writing lines and rules.
pub const RULE: RGBColor = RGBColor::new(0xCC, 0xCC, 0xCC);

/// Subtract `amount` from every channel, stopping at zero.
pub const fn darken(color: RGBColor, amount: u8) -> RGBColor {
    RGBColor::new(
        color.r.saturating_sub(amount),
        color.g.saturating_sub(amount),
        color.b.saturating_sub(amount),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_saturates() {
        assert_eq!(darken(TEAL, 30), RGBColor::new(0x00, 0x79, 0x7E));
        assert_eq!(darken(NAVY, 30), RGBColor::new(0x00, 0x05, 0x3E));
        assert_eq!(darken(WHITE, 0), WHITE);
    }
}
