//! Ephemeris seam for the kundali chart engine.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait: sidereal positions, ayanamsa and house cusps
//! - [`EngineConfig`], loaded from TOML
//! - Ayanamsha systems anchored at J2000 plus general precession
//! - [`AnalyticEphemeris`], a low-precision built-in implementation
//!
//! Every implementation returns **sidereal** longitudes in degrees.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod analytic;
pub mod ayanamsha;
pub mod config;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, general_precession_longitude_deg};
pub use config::{ConfigError, EngineConfig, NodeMode};

/// Bodies the ephemeris can position.
///
/// The lunar nodes are computed points rather than physical bodies; both
/// node flavours are listed so callers can pick per configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    MeanNode,
    TrueNode,
}

/// All bodies in enum order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::MeanNode,
    Body::TrueNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
            Self::TrueNode => "True Node",
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::MeanNode | Self::TrueNode)
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One body's sidereal ecliptic state at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisSample {
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
    /// Longitude rate, degrees/day. Negative when retrograde.
    pub speed: f64,
}

impl EphemerisSample {
    /// All four fields are finite.
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && self.distance_au.is_finite()
            && self.speed.is_finite()
    }
}

/// Sidereal house cusps and ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    pub cusps: [f64; 12],
    pub ascendant: f64,
}

/// Ephemeris errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidQuery(&'static str),
    EpochOutOfRange { jd: f64 },
    Unavailable(String),
    InvalidConfig(&'static str),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for EngineError {}

/// Source of sidereal positions.
///
/// Implementations must be [`Send`] + [`Sync`] so one instance can serve
/// chart builds on many threads.
///
/// ```rust,ignore
/// let eph = AnalyticEphemeris::new(&EngineConfig::default());
/// std::thread::scope(|s| {
///     s.spawn(|| eph.position(jd, Body::Moon));
///     s.spawn(|| eph.position(jd, Body::Sun));
/// });
/// ```
pub trait Ephemeris: Send + Sync {
    /// Sidereal state of `body` at a UT Julian Day.
    fn position(&self, jd_ut: f64, body: Body) -> Result<EphemerisSample, EngineError>;

    /// Ayanamsa in degrees at a UT Julian Day.
    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EngineError>;

    /// Sidereal cusps for a geographic location (latitude north, longitude east).
    fn cusps(&self, jd_ut: f64, lat: f64, lon: f64) -> Result<HouseCusps, EngineError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position(&self, jd_ut: f64, body: Body) -> Result<EphemerisSample, EngineError> {
        (**self).position(jd_ut, body)
    }

    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EngineError> {
        (**self).ayanamsa(jd_ut)
    }

    fn cusps(&self, jd_ut: f64, lat: f64, lon: f64) -> Result<HouseCusps, EngineError> {
        (**self).cusps(jd_ut, lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_names() {
        assert_eq!(Body::TrueNode.to_string(), "True Node");
        assert!(Body::MeanNode.is_node());
        assert!(!Body::Moon.is_node());
        assert_eq!(ALL_BODIES.len(), 9);
    }

    #[test]
    fn error_display() {
        let e = EngineError::EpochOutOfRange { jd: 1.5 };
        assert_eq!(e.to_string(), "epoch out of range: JD 1.5");
        assert_eq!(
            EngineError::InvalidQuery("non-finite jd").to_string(),
            "invalid query: non-finite jd"
        );
    }

    #[test]
    fn sample_finiteness() {
        let mut s = EphemerisSample {
            longitude: 1.0,
            latitude: 0.0,
            distance_au: 1.0,
            speed: 1.0,
        };
        assert!(s.is_finite());
        s.speed = f64::NAN;
        assert!(!s.is_finite());
    }
}
