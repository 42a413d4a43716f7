//! Unified error type for lessonkit.
use thiserror::Error;

/// Main error type for layout and rendering operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A length that must be positive (or non-negative) was not
    #[error("Invalid dimension: {what} must be {expected}, got {value} EMU")]
    InvalidDimension {
        what: String,
        expected: &'static str,
        value: i64,
    },

    /// Floating-point length that is not finite or exceeds the coordinate range
    #[error("Invalid length: {value} {unit} is not a finite length within the DrawingML coordinate range")]
    InvalidLength { value: f64, unit: &'static str },

    /// Font size that is not a finite, positive number of points
    #[error("Invalid font size: {what} must be a positive number of points, got {value}")]
    InvalidFontSize { what: String, value: f64 },

    /// Spacing that is negative or not finite
    #[error("Invalid spacing: {what} must be a non-negative number of points, got {value}")]
    InvalidSpacing { what: String, value: f64 },

    /// Color string that is not a 6-digit hex triple
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Table whose rows do not match its declared column count
    #[error("Malformed table: {0}")]
    MalformedTable(String),

    /// A document without pages
    #[error("Document has no pages")]
    EmptyDocument,

    /// Content the selected output format cannot express
    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    /// Part name that is not an absolute package URI
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),
}

impl Error {
    pub(crate) fn negative(what: impl Into<String>, value: i64) -> Self {
        Error::InvalidDimension {
            what: what.into(),
            expected: "non-negative",
            value,
        }
    }

    pub(crate) fn non_positive(what: impl Into<String>, value: i64) -> Self {
        Error::InvalidDimension {
            what: what.into(),
            expected: "positive",
            value,
        }
    }

    pub(crate) fn out_of_range(what: impl Into<String>, value: i64) -> Self {
        Error::InvalidDimension {
            what: what.into(),
            expected: "a finite length within the DrawingML coordinate range",
            value,
        }
    }
}

/// Result type for lessonkit operations.
pub type Result<T> = std::result::Result<T, Error>;
