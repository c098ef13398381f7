//! Error types for civil time parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a civil date/time or its UTC offset.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date did not parse as `YYYY-MM-DD`.
    InvalidDate(String),
    /// Clock time did not parse as `HH:MM` or `HH:MM:SS`.
    InvalidTime(String),
    /// UTC offset is not finite or lies outside [-14, +14] hours.
    InvalidOffset(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM"),
            Self::InvalidOffset(h) => write!(f, "invalid UTC offset {h} h"),
        }
    }
}

impl Error for TimeError {}
