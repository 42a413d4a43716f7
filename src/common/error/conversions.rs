//! Error conversion implementations.
//!
//! XML is assembled with `std::fmt::Write` into `String` buffers; formatting
//! failures surface as [`Error::XmlError`].

use super::types::Error;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}
