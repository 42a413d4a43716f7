//! The Ex 1K lesson on applications of simultaneous linear equations.
//!
//! [`deck`] builds the 14-slide presentation and [`worksheet`] the matching
//! student worksheet. Both only describe layout; rendering is left to
//! [`Document::save`](crate::layout::Document::save).

pub mod deck;
pub mod palette;
pub mod worksheet;
