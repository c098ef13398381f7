//! Error types for chart orchestration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_core::EngineError;
use kundali_time::TimeError;

/// Errors from building a chart or one of its derived reports.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed date, time, offset or coordinates.
    InvalidInput(String),
    /// The ephemeris failed or returned an unusable sample.
    EphemerisFailure(EngineError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::EphemerisFailure(e) => write!(f, "ephemeris failure: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EphemerisFailure(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<EngineError> for ChartError {
    fn from(e: EngineError) -> Self {
        Self::EphemerisFailure(e)
    }
}
