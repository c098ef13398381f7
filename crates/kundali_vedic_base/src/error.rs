//! Error types for Vedic table lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Vedic base lookups.
///
/// The planet/sign vocabulary is closed, so the only failure is a name
/// that does not belong to it. Name-keyed helpers recover from this with
/// neutral defaults; only the `FromStr` impls surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// A planet, sign or nakshatra name outside the fixed vocabulary.
    UnknownEntity(String),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEntity(name) => write!(f, "unknown entity: {name}"),
        }
    }
}

impl Error for VedicError {}
