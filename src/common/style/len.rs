use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::common::error::{Error, Result};
use crate::common::unit::{EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_PT, MAX_COORDINATE, emu_to_twip_i64};

/// Length measurement.
///
/// Stored as EMUs (English Metric Units), the native unit of DrawingML.
/// Lengths are signed: positions may be negative, and validation rejects
/// negative sizes where the layout model requires them.
///
/// # Examples
///
/// ```rust
/// use lessonkit::common::Length;
///
/// let length = Length::from_inches(1.0);
/// assert_eq!(length.emus(), 914_400);
/// assert_eq!(length.twips(), 1440);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    /// Value in EMUs
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    pub const ZERO: Length = Length::from_emus(0);

    /// Marker produced by the float constructors for unrepresentable input.
    pub const OUT_OF_RANGE: Length = Length::from_emus(i64::MIN);

    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches, rounded to the nearest EMU.
    ///
    /// Input that is not finite or lies outside the DrawingML coordinate
    /// range yields [`Length::OUT_OF_RANGE`], which layout validation
    /// rejects. Use [`Length::try_from_inches`] to fail at the call site.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self::from_scaled(inches, EMUS_PER_INCH)
    }

    /// Create a length from centimeters, rounded to the nearest EMU.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self::from_scaled(cm, EMUS_PER_CM)
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self::from_scaled(pt, EMUS_PER_PT)
    }

    pub fn try_from_inches(inches: f64) -> Result<Self> {
        Self::try_from_scaled(inches, EMUS_PER_INCH, "in")
    }

    pub fn try_from_cm(cm: f64) -> Result<Self> {
        Self::try_from_scaled(cm, EMUS_PER_CM, "cm")
    }

    pub fn try_from_pt(pt: f64) -> Result<Self> {
        Self::try_from_scaled(pt, EMUS_PER_PT, "pt")
    }

    fn from_scaled(value: f64, emus_per_unit: i64) -> Self {
        let emus = (value * emus_per_unit as f64).round();
        // NaN fails both comparisons
        if emus.abs() <= MAX_COORDINATE as f64 {
            Self { emus: emus as i64 }
        } else {
            Self::OUT_OF_RANGE
        }
    }

    fn try_from_scaled(value: f64, emus_per_unit: i64, unit: &'static str) -> Result<Self> {
        let length = Self::from_scaled(value, emus_per_unit);
        if length.is_in_range() {
            Ok(length)
        } else {
            Err(Error::InvalidLength { value, unit })
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to twips (1/20 point), the WordprocessingML unit.
    #[inline]
    pub fn twips(&self) -> i64 {
        emu_to_twip_i64(self.emus)
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to points.
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.emus < 0
    }

    /// Whether the value fits a DrawingML coordinate.
    #[inline]
    pub const fn is_in_range(&self) -> bool {
        -MAX_COORDINATE <= self.emus && self.emus <= MAX_COORDINATE
    }
}

impl Add for Length {
    type Output = Length;

    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length::from_emus(self.emus.saturating_add(rhs.emus))
    }
}

impl Sub for Length {
    type Output = Length;

    #[inline]
    fn sub(self, rhs: Length) -> Length {
        Length::from_emus(self.emus.saturating_sub(rhs.emus))
    }
}

impl Mul<i64> for Length {
    type Output = Length;

    #[inline]
    fn mul(self, rhs: i64) -> Length {
        Length::from_emus(self.emus.saturating_mul(rhs))
    }
}

impl Neg for Length {
    type Output = Length;

    #[inline]
    fn neg(self) -> Length {
        Length::from_emus(self.emus.saturating_neg())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_round() {
        assert_eq!(Length::from_inches(13.33).emus(), 12_188_952);
        assert_eq!(Length::from_inches(2.55).emus(), 2_331_720);
        assert_eq!(Length::from_cm(1.5).emus(), 540_000);
        assert_eq!(Length::from_pt(1.0).emus(), 12_700);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e12] {
            assert_eq!(Length::from_inches(value), Length::OUT_OF_RANGE);
            assert!(!Length::from_cm(value).is_in_range());
            assert!(matches!(
                Length::try_from_inches(value),
                Err(Error::InvalidLength { unit: "in", .. })
            ));
            assert!(Length::try_from_pt(value).is_err());
        }
        assert!(Length::OUT_OF_RANGE.is_negative());

        let err = Length::try_from_cm(f64::NAN).unwrap_err();
        assert!(err.to_string().contains("NaN cm"));
    }

    #[test]
    fn test_coordinate_range_boundary() {
        let max = MAX_COORDINATE as f64 / EMUS_PER_PT as f64;
        assert_eq!(Length::try_from_pt(max).unwrap().emus(), MAX_COORDINATE);
        assert_eq!(Length::try_from_pt(-max).unwrap().emus(), -MAX_COORDINATE);
        assert!(Length::try_from_pt(max * 1.01).is_err());
        assert!(Length::from_emus(MAX_COORDINATE).is_in_range());
        assert!(!Length::from_emus(MAX_COORDINATE + 1).is_in_range());
        assert_eq!(Length::try_from_inches(1.0).unwrap().emus(), 914_400);
    }

    #[test]
    fn test_arithmetic() {
        let a = Length::from_inches(1.0);
        let b = Length::from_inches(0.5);
        assert_eq!((a - b).emus(), 457_200);
        assert_eq!((a + b).emus(), 1_371_600);
        assert_eq!((b * 2), a);
        assert!((-a).is_negative());
    }

    #[test]
    fn test_unit_views() {
        let len = Length::from_cm(2.0);
        assert_eq!(len.twips(), 1134);
        assert!((Length::from_pt(36.0).inches() - 0.5).abs() < 1e-9);
        assert_eq!(Length::from_inches(1.0).to_string(), "1.00\"");
    }
}
