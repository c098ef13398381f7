//! Whole-sign house (bhava) assignment.
//!
//! House 1 is the entire sign holding the ascendant; house N is the sign
//! N-1 places further on. Houses begin at the sign boundary, never at the
//! ascendant degree.
//!
//! Two index spaces meet here and are kept apart by type:
//! [`SignIndex`] counts from Mesha, [`Bhava`] counts from the ascendant's sign.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// 0-based sign position counted from Mesha (0..=11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SignIndex(u8);

impl SignIndex {
    /// Wraps modulo 12.
    pub const fn new(index: u8) -> Self {
        Self(index % 12)
    }

    /// Sign containing a sidereal longitude (floor semantics).
    pub fn from_longitude(sidereal_lon: f64) -> Self {
        Self(((normalize_360(sidereal_lon) / 30.0).floor() as u8).min(11))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn rashi(self) -> Rashi {
        Rashi::from_index(self.0)
    }

    /// Forward distance to `other`, 0..=11.
    pub const fn steps_to(self, other: SignIndex) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    /// Sign `steps` places forward.
    pub const fn advance(self, steps: u8) -> Self {
        Self::new((self.0 as u16 + steps as u16 % 12) as u8)
    }

    /// First half of the zodiac (Mesha through Kanya).
    pub const fn in_northern_half(self) -> bool {
        self.0 <= 5
    }
}

impl From<Rashi> for SignIndex {
    fn from(r: Rashi) -> Self {
        Self(r.index())
    }
}

/// 1-based house number counted from the ascendant's sign (1..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Bhava(u8);

/// Angular houses.
pub const KENDRA_BHAVAS: [u8; 4] = [1, 4, 7, 10];
/// Trinal houses.
pub const TRIKONA_BHAVAS: [u8; 3] = [1, 5, 9];
/// Houses of difficulty.
pub const DUSTHANA_BHAVAS: [u8; 3] = [6, 8, 12];

impl Bhava {
    /// Wraps into 1..=12 (0 becomes 12, 13 becomes 1).
    pub const fn new(number: u8) -> Self {
        Self(((number as u16 + 11) % 12 + 1) as u8)
    }

    /// Whole-sign house of a planet sign, given the ascendant sign.
    ///
    /// `((planet_sign - ascendant_sign) mod 12) + 1`.
    pub const fn from_signs(planet_sign: SignIndex, ascendant_sign: SignIndex) -> Self {
        Self(ascendant_sign.steps_to(planet_sign) + 1)
    }

    /// Whole-sign house of a longitude, given the ascendant longitude.
    pub fn from_longitudes(planet_lon: f64, ascendant_lon: f64) -> Self {
        Self::from_signs(
            SignIndex::from_longitude(planet_lon),
            SignIndex::from_longitude(ascendant_lon),
        )
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// The sign occupying this house.
    pub const fn sign(self, ascendant_sign: SignIndex) -> SignIndex {
        ascendant_sign.advance(self.0 - 1)
    }

    /// House `distance` places on, counting this house as 1.
    ///
    /// The 7th from house 1 is house 7; the 7th from house 8 is house 2.
    pub const fn nth(self, distance: u8) -> Self {
        Self(((self.0 as u16 - 1 + distance as u16 % 12 + 11) % 12) as u8 + 1)
    }

    pub const fn is_kendra(self) -> bool {
        matches!(self.0, 1 | 4 | 7 | 10)
    }

    pub const fn is_trikona(self) -> bool {
        matches!(self.0, 1 | 5 | 9)
    }

    pub const fn is_dusthana(self) -> bool {
        matches!(self.0, 6 | 8 | 12)
    }
}

impl Display for Bhava {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All 12 houses in order.
pub fn all_bhavas() -> impl Iterator<Item = Bhava> {
    (1..=12).map(Bhava)
}

/// Signs of houses 1..=12, walking forward from the ascendant's sign.
pub fn whole_sign_houses(ascendant_sign: SignIndex) -> [SignIndex; 12] {
    let mut signs = [ascendant_sign; 12];
    for (i, s) in signs.iter_mut().enumerate() {
        *s = ascendant_sign.advance(i as u8);
    }
    signs
}

/// Aggregate house strength: occupant strengths plus half the lord's.
///
/// `lord_strength` is `None` while the lord has not been scored, in which
/// case it contributes nothing.
pub fn house_strength(occupant_strengths: impl IntoIterator<Item = f64>, lord_strength: Option<f64>) -> f64 {
    let occupants: f64 = occupant_strengths.into_iter().sum();
    occupants + 0.5 * lord_strength.unwrap_or(0.0)
}
