//! Combined zodiacal classification of a sidereal longitude.

use serde::Serialize;

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Sign, nakshatra and pada of one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Normalized sidereal longitude, [0, 360).
    pub longitude: f64,
    pub sign: Rashi,
    pub sign_index: u8,
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    pub pada: u8,
    pub degrees_in_sign: f64,
}

/// Classify a sidereal longitude.
///
/// The longitude is normalized internally, so 360.0 and 0.0 classify
/// identically and negative input wraps.
pub fn classify(longitude: f64) -> Placement {
    let lon = normalize_360(longitude);
    let rashi = rashi_from_longitude(lon);
    let nak = nakshatra_from_longitude(lon);
    Placement {
        longitude: lon,
        sign: rashi.rashi,
        sign_index: rashi.rashi_index,
        nakshatra: nak.nakshatra,
        nakshatra_index: nak.nakshatra_index,
        pada: nak.pada,
        degrees_in_sign: rashi.degrees_in_rashi,
    }
}
