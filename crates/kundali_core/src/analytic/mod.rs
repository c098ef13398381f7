//! Built-in low-precision analytic ephemeris.
//!
//! Positions are good to a fraction of a degree for 1800-2200, which is
//! enough to place bodies in signs and nakshatras away from boundaries. UT
//! is used in place of TT; the difference (about a minute in this range)
//! is below the model's accuracy.

pub mod kepler;
pub mod lagna;
pub mod moon;
pub mod nodes;

use kundali_time::jd_to_centuries;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg, general_precession_longitude_deg};
use crate::config::EngineConfig;
use crate::{Body, EngineError, Ephemeris, EphemerisSample, HouseCusps};

use kepler::{JUPITER, MARS, MERCURY, OrbitalElements, SATURN, VENUS, geocentric_ecliptic};
use lagna::tropical_ascendant_deg;
use moon::moon_ecliptic;
use nodes::{mean_node_deg, true_node_deg};

/// First supported epoch, 1800-01-01.
pub const MIN_JD: f64 = 2_378_496.5;
/// Last supported epoch, 2200-01-01.
pub const MAX_JD: f64 = 2_524_593.5;

/// Half-width of the central difference used for speeds, days.
const SPEED_HALF_STEP: f64 = 0.5;

/// Analytic implementation of [`Ephemeris`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    ayanamsha: AyanamshaSystem,
}

impl AnalyticEphemeris {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            ayanamsha: config.ayanamsha,
        }
    }

    pub const fn with_system(ayanamsha: AyanamshaSystem) -> Self {
        Self { ayanamsha }
    }

    pub const fn system(&self) -> AyanamshaSystem {
        self.ayanamsha
    }

    fn check_epoch(jd_ut: f64) -> Result<(), EngineError> {
        if !jd_ut.is_finite() {
            return Err(EngineError::InvalidQuery("julian day must be finite"));
        }
        if !(MIN_JD..=MAX_JD).contains(&jd_ut) {
            return Err(EngineError::EpochOutOfRange { jd: jd_ut });
        }
        Ok(())
    }

    /// Tropical `(longitude, latitude, distance)` of date.
    fn tropical(body: Body, t: f64) -> (f64, f64, f64) {
        let planet = |el: &OrbitalElements| {
            let (lon, lat, dist) = geocentric_ecliptic(Some(el), t);
            (lon + general_precession_longitude_deg(t), lat, dist)
        };
        match body {
            Body::Sun => {
                let (lon, lat, dist) = geocentric_ecliptic(None, t);
                (lon + general_precession_longitude_deg(t), lat, dist)
            }
            Body::Mercury => planet(&MERCURY),
            Body::Venus => planet(&VENUS),
            Body::Mars => planet(&MARS),
            Body::Jupiter => planet(&JUPITER),
            Body::Saturn => planet(&SATURN),
            Body::Moon => moon_ecliptic(t),
            Body::MeanNode => (mean_node_deg(t), 0.0, 0.0),
            Body::TrueNode => (true_node_deg(t), 0.0, 0.0),
        }
    }

    fn sidereal_longitude(&self, body: Body, jd_ut: f64) -> f64 {
        let t = jd_to_centuries(jd_ut);
        (Self::tropical(body, t).0 - ayanamsha_deg(self.ayanamsha, t)).rem_euclid(360.0)
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// Signed shortest arc from `a` to `b`, degrees (-180, 180].
fn arc_delta(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

impl Ephemeris for AnalyticEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<EphemerisSample, EngineError> {
        Self::check_epoch(jd_ut)?;
        let t = jd_to_centuries(jd_ut);
        let (_, latitude, distance_au) = Self::tropical(body, t);
        let longitude = self.sidereal_longitude(body, jd_ut);
        let before = self.sidereal_longitude(body, jd_ut - SPEED_HALF_STEP);
        let after = self.sidereal_longitude(body, jd_ut + SPEED_HALF_STEP);
        let speed = arc_delta(before, after) / (2.0 * SPEED_HALF_STEP);
        tracing::trace!(%body, jd_ut, longitude, speed, "analytic position");
        Ok(EphemerisSample {
            longitude,
            latitude,
            distance_au,
            speed,
        })
    }

    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EngineError> {
        Self::check_epoch(jd_ut)?;
        Ok(ayanamsha_deg(self.ayanamsha, jd_to_centuries(jd_ut)))
    }

    fn cusps(&self, jd_ut: f64, lat: f64, lon: f64) -> Result<HouseCusps, EngineError> {
        Self::check_epoch(jd_ut)?;
        if !(lat.is_finite() && lon.is_finite()) || lat.abs() >= 90.0 {
            return Err(EngineError::InvalidQuery("latitude must be finite and inside (-90, 90)"));
        }
        let ayan = ayanamsha_deg(self.ayanamsha, jd_to_centuries(jd_ut));
        let ascendant = (tropical_ascendant_deg(jd_ut, lat, lon) - ayan).rem_euclid(360.0);
        let cusps = std::array::from_fn(|i| (ascendant + 30.0 * i as f64).rem_euclid(360.0));
        Ok(HouseCusps { cusps, ascendant })
    }
}
