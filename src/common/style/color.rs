use std::fmt;
use std::str::FromStr;

use crate::common::error::{Error, Result};

/// RGB color representation.
///
/// Channels are stored and written exactly as given; no color-space
/// conversion happens anywhere in the rendering path.
///
/// # Examples
///
/// ```rust
/// use lessonkit::common::RGBColor;
///
/// let navy = RGBColor::new(0x1A, 0x23, 0x5C);
/// assert_eq!(navy.to_hex(), "1A235C");
///
/// let teal = RGBColor::from_hex("#00979C").unwrap();
/// assert_eq!(teal, RGBColor::new(0x00, 0x97, 0x9C));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const BLACK: RGBColor = RGBColor::new(0x00, 0x00, 0x00);
    pub const WHITE: RGBColor = RGBColor::new(0xFF, 0xFF, 0xFF);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from a 6-digit hex string, with or without a leading `#`.
    ///
    /// Anything else (wrong length, non-hex digits) is rejected with
    /// [`Error::InvalidColor`] instead of being clamped or defaulted.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(format!(
                "expected 6 hex digits, got '{}'",
                hex
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| Error::InvalidColor(format!("'{}': {}", hex, e)))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to hex string (without # prefix), upper-case.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Subtract `amount` from every channel, stopping at zero.
    #[inline]
    pub const fn darken(&self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
