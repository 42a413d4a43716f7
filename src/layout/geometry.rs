//! Rectangles, page margins and canvases.

use crate::common::{Error, Length, Result};

/// Axis-aligned rectangle positioned relative to the top-left of its canvas.
///
/// Positions may be negative or lie outside the canvas; content outside is
/// clipped or overflows when displayed. Sizes must not be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl Rect {
    #[inline]
    pub const fn new(x: Length, y: Length, width: Length, height: Length) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from inch values.
    ///
    /// Values that are not finite or fall outside the coordinate range are
    /// kept as [`Length::OUT_OF_RANGE`] and fail [`Rect::validate`].
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Length::from_inches(x),
            Length::from_inches(y),
            Length::from_inches(width),
            Length::from_inches(height),
        )
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: Length, dy: Length) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            self.width - dx * 2,
            self.height - dy * 2,
        )
    }

    /// Like [`Rect::from_inches`] but fails on the first bad value.
    pub fn try_from_inches(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Ok(Self::new(
            Length::try_from_inches(x)?,
            Length::try_from_inches(y)?,
            Length::try_from_inches(width)?,
            Length::try_from_inches(height)?,
        ))
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_in_range() {
                return Err(Error::out_of_range(format!("{what} {field}"), value.emus()));
            }
        }
        if self.width.is_negative() {
            return Err(Error::negative(format!("{what} width"), self.width.emus()));
        }
        if self.height.is_negative() {
            return Err(Error::negative(format!("{what} height"), self.height.emus()));
        }
        Ok(())
    }
}

/// Page margins, used by flowing content on word-processing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Margins {
    pub const fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same margin on all four sides.
    pub const fn uniform(margin: Length) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

/// Fixed-size rendering surface for one page.
///
/// The size is validated on construction; a canvas can never hold a zero or
/// negative dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Canvas {
    width: Length,
    height: Length,
    margins: Margins,
}

impl Canvas {
    /// Create a canvas without margins.
    pub fn new(width: Length, height: Length) -> Result<Self> {
        if !width.is_in_range() {
            return Err(Error::out_of_range("canvas width", width.emus()));
        }
        if !height.is_in_range() {
            return Err(Error::out_of_range("canvas height", height.emus()));
        }
        if width.emus() <= 0 {
            return Err(Error::non_positive("canvas width", width.emus()));
        }
        if height.emus() <= 0 {
            return Err(Error::non_positive("canvas height", height.emus()));
        }
        Ok(Self {
            width,
            height,
            margins: Margins::default(),
        })
    }

    pub fn from_inches(width: f64, height: f64) -> Result<Self> {
        Self::new(Length::try_from_inches(width)?, Length::try_from_inches(height)?)
    }

    /// US Letter portrait page, 8.5 × 11 inches with one-inch margins.
    pub fn letter() -> Self {
        Self {
            width: Length::from_emus(7_772_400),
            height: Length::from_emus(10_058_400),
            margins: Margins::uniform(Length::from_emus(914_400)),
        }
    }

    /// Widescreen slide, 13.33 × 7.5 inches.
    pub fn widescreen() -> Self {
        Self {
            width: Length::from_emus(12_188_952),
            height: Length::from_emus(6_858_000),
            margins: Margins::default(),
        }
    }

    /// Replace the margins.
    ///
    /// Margins must be non-negative and leave a positive content area.
    pub fn with_margins(mut self, margins: Margins) -> Result<Self> {
        for (side, value) in [
            ("top", margins.top),
            ("right", margins.right),
            ("bottom", margins.bottom),
            ("left", margins.left),
        ] {
            if value.is_negative() {
                return Err(Error::negative(format!("{side} margin"), value.emus()));
            }
        }

        let content_width = self.width - margins.left - margins.right;
        if content_width.emus() <= 0 {
            return Err(Error::non_positive(
                "content width inside margins",
                content_width.emus(),
            ));
        }
        let content_height = self.height - margins.top - margins.bottom;
        if content_height.emus() <= 0 {
            return Err(Error::non_positive(
                "content height inside margins",
                content_height.emus(),
            ));
        }

        self.margins = margins;
        Ok(self)
    }

    #[inline]
    pub fn width(&self) -> Length {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Length {
        self.height
    }

    #[inline]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Width available to flowing content between the left and right margins.
    #[inline]
    pub fn content_width(&self) -> Length {
        self.width - self.margins.left - self.margins.right
    }

    /// The whole canvas as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(Length::ZERO, Length::ZERO, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_rejects_zero_and_negative() {
        let zero = Canvas::new(Length::ZERO, Length::from_emus(10)).unwrap_err();
        assert!(zero.to_string().contains("canvas width"));

        let negative = Canvas::new(Length::from_emus(10), Length::from_emus(-5)).unwrap_err();
        assert!(matches!(
            negative,
            Error::InvalidDimension { expected: "positive", value: -5, .. }
        ));
    }

    #[test]
    fn test_canvas_rejects_non_finite_size() {
        for (width, height) in [(f64::INFINITY, 1.0), (1.0, f64::NAN), (1e12, 1.0)] {
            let err = Canvas::from_inches(width, height).unwrap_err();
            assert!(matches!(err, Error::InvalidLength { unit: "in", .. }));
        }

        let err = Canvas::new(Length::OUT_OF_RANGE, Length::from_emus(1)).unwrap_err();
        assert!(err.to_string().contains("canvas width"));
        let err = Canvas::new(Length::from_emus(1), Length::from_emus(i64::MAX)).unwrap_err();
        assert!(err.to_string().contains("coordinate range"));
    }

    #[test]
    fn test_rect_rejects_non_finite_values() {
        let bad = Rect::from_inches(0.0, 0.0, f64::NAN, f64::INFINITY);
        assert_eq!(bad.width, Length::OUT_OF_RANGE);
        let err = bad.validate("shape").unwrap_err();
        assert!(err.to_string().contains("shape width"));
        assert!(err.to_string().contains("coordinate range"));

        let far = Rect::from_inches(f64::NEG_INFINITY, 0.0, 1.0, 1.0);
        assert!(far.validate("box").unwrap_err().to_string().contains("box x"));

        let huge = Rect::new(Length::ZERO, Length::from_emus(i64::MAX), Length::ZERO, Length::ZERO);
        assert!(huge.validate("box").unwrap_err().to_string().contains("box y"));

        assert!(Rect::try_from_inches(0.0, 0.0, 1.0, f64::NAN).is_err());
        assert_eq!(
            Rect::try_from_inches(1.0, 0.0, 2.0, 0.5).unwrap(),
            Rect::from_inches(1.0, 0.0, 2.0, 0.5)
        );
    }

    #[test]
    fn test_minimum_canvas() {
        let canvas = Canvas::new(Length::from_emus(1), Length::from_emus(1)).unwrap();
        assert_eq!(canvas.bounds().width.emus(), 1);
    }

    #[test]
    fn test_margins_validation() {
        let canvas = Canvas::letter();
        assert_eq!(canvas.content_width(), Length::from_inches(6.5));

        let err = canvas
            .with_margins(Margins::uniform(Length::from_inches(5.0)))
            .unwrap_err();
        assert!(err.to_string().contains("content width"));

        let err = canvas
            .with_margins(Margins::new(
                Length::ZERO,
                Length::ZERO,
                Length::from_emus(-1),
                Length::ZERO,
            ))
            .unwrap_err();
        assert!(err.to_string().contains("bottom margin"));
    }

    #[test]
    fn test_rect_validation_and_inset() {
        let rect = Rect::from_inches(1.0, 1.0, 2.0, 1.0);
        let inner = rect.inset(Length::from_inches(0.05), Length::from_inches(0.03));
        assert_eq!(inner.x, Length::from_inches(1.05));
        assert_eq!(inner.width, Length::from_inches(1.9));
        assert!(inner.validate("box").is_ok());

        let bad = Rect::from_inches(-1.0, 0.0, -0.5, 1.0);
        let err = bad.validate("box").unwrap_err();
        assert!(err.to_string().contains("box width"));
    }
}
