//! Birth balance: how much of the first dasha remains at birth.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::vimshottari::nakshatra_lord;

/// Moon's nakshatra at birth and the elapsed share of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    pub lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub progress: f64,
    /// `1 - progress`.
    pub remaining: f64,
}

/// Birth balance from the Moon's sidereal longitude.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    BirthBalance {
        nakshatra: info.nakshatra,
        nakshatra_index: info.nakshatra_index,
        lord: nakshatra_lord(info.nakshatra_index),
        progress: info.progress,
        remaining: 1.0 - info.progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    const EPS: f64 = 1e-10;

    #[test]
    fn balance_at_start_of_ashwini() {
        let b = nakshatra_birth_balance(0.0);
        assert_eq!(b.nakshatra_index, 0);
        assert_eq!(b.lord, Graha::Ketu);
        assert!(b.progress.abs() < EPS);
        assert!((b.remaining - 1.0).abs() < EPS);
    }

    #[test]
    fn balance_at_midpoint() {
        let b = nakshatra_birth_balance(NAKSHATRA_SPAN / 2.0);
        assert!((b.progress - 0.5).abs() < EPS);
        assert!((b.remaining - 0.5).abs() < EPS);
    }

    #[test]
    fn bharani_is_venus() {
        let b = nakshatra_birth_balance(NAKSHATRA_SPAN + 1.0);
        assert_eq!(b.nakshatra, Nakshatra::Bharani);
        assert_eq!(b.lord, Graha::Shukra);
    }

    #[test]
    fn revati_is_mercury() {
        let b = nakshatra_birth_balance(359.0);
        assert_eq!(b.nakshatra_index, 26);
        assert_eq!(b.lord, Graha::Buddh);
    }
}
