//! Rashi (zodiac sign) identification and static sign traits.
//!
//! The sidereal ecliptic is divided into 12 equal signs of 30 degrees,
//! starting from Mesha (Aries) at 0 deg. Each sign carries fixed traits
//! (element, gender, purpose, mobility) that depend only on its position
//! counted from Mesha.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::VedicError;
use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

const SANSKRIT_NAMES: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrischika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

const WESTERN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// South Indian spellings accepted on input.
const REGIONAL_ALIASES: [(&str, Rashi); 6] = [
    ("rishaba", Rashi::Vrishabha),
    ("kataka", Rashi::Karka),
    ("kanni", Rashi::Kanya),
    ("thula", Rashi::Tula),
    ("dhanus", Rashi::Dhanu),
    ("meenam", Rashi::Meena),
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        SANSKRIT_NAMES[self as usize]
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        WESTERN_NAMES[self as usize]
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Static traits of this sign.
    pub const fn traits(self) -> SignTraits {
        sign_traits(self.index() + 1)
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Rashi {
    type Err = VedicError;

    /// Accepts Sanskrit, western and common regional spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(&key) || r.western_name().eq_ignore_ascii_case(&key))
            .or_else(|| {
                REGIONAL_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|(_, r)| *r)
            })
            .ok_or_else(|| VedicError::UnknownEntity(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Sign traits
// ---------------------------------------------------------------------------

/// Classical element (tattva).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Sign gender: odd signs male, even signs female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

/// Life purpose (purushartha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Purpose {
    Dharma,
    Artha,
    Kama,
    Moksha,
}

/// Sign modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mobility {
    Movable,
    Fixed,
    Dual,
}

/// Static attributes of the sign at Aries-anchored position 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignTraits {
    pub element: Element,
    pub gender: Gender,
    pub purpose: Purpose,
    pub mobility: Mobility,
    /// Position 1, 4, 7 or 10.
    pub kendra: bool,
    /// Position 1, 5 or 9.
    pub trikona: bool,
}

const ELEMENT_CYCLE: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
const PURPOSE_CYCLE: [Purpose; 4] = [Purpose::Dharma, Purpose::Artha, Purpose::Kama, Purpose::Moksha];
const MOBILITY_CYCLE: [Mobility; 3] = [Mobility::Movable, Mobility::Fixed, Mobility::Dual];

/// Traits for the sign at `position` (1 = Mesha .. 12 = Meena).
///
/// Positions outside 1..=12 wrap.
pub const fn sign_traits(position: u8) -> SignTraits {
    let i = ((position as usize + 11) % 12) as usize;
    SignTraits {
        element: ELEMENT_CYCLE[i % 4],
        gender: if i % 2 == 0 { Gender::Male } else { Gender::Female },
        purpose: PURPOSE_CYCLE[i % 4],
        mobility: MOBILITY_CYCLE[i % 3],
        kendra: i % 3 == 0,
        trikona: i % 4 == 0,
    }
}

// ---------------------------------------------------------------------------
// Longitude → rashi
// ---------------------------------------------------------------------------

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Decimal degrees to DMS. Negative input uses its absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let arcmin = (d - degrees) * 60.0;
    let minutes = arcmin.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (arcmin - minutes) * 60.0,
    }
}

/// DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Rashi lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    pub dms: Dms,
    /// Decimal degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Rashi containing a sidereal longitude.
///
/// Input is normalized first; boundaries belong to the later sign
/// (30.0 deg is Vrishabha).
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - idx as f64 * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Karka".parse::<Rashi>(), Ok(Rashi::Karka));
        assert_eq!("cancer".parse::<Rashi>(), Ok(Rashi::Karka));
        assert_eq!("Kataka".parse::<Rashi>(), Ok(Rashi::Karka));
        assert_eq!("THULA".parse::<Rashi>(), Ok(Rashi::Tula));
        assert!(matches!("Ophiuchus".parse::<Rashi>(), Err(VedicError::UnknownEntity(_))));
    }

    #[test]
    fn traits_mesha() {
        let t = Rashi::Mesha.traits();
        assert_eq!(t.element, Element::Fire);
        assert_eq!(t.gender, Gender::Male);
        assert_eq!(t.purpose, Purpose::Dharma);
        assert_eq!(t.mobility, Mobility::Movable);
        assert!(t.kendra && t.trikona);
    }

    #[test]
    fn traits_cycle() {
        let vrishabha = Rashi::Vrishabha.traits();
        assert_eq!(vrishabha.element, Element::Earth);
        assert_eq!(vrishabha.gender, Gender::Female);
        assert_eq!(vrishabha.mobility, Mobility::Fixed);

        let meena = Rashi::Meena.traits();
        assert_eq!(meena.element, Element::Water);
        assert_eq!(meena.purpose, Purpose::Moksha);
        assert_eq!(meena.mobility, Mobility::Dual);
        assert!(!meena.kendra && !meena.trikona);
    }

    #[test]
    fn kendra_trikona_positions() {
        let kendras: Vec<u8> = (1..=12).filter(|&p| sign_traits(p).kendra).collect();
        let trikonas: Vec<u8> = (1..=12).filter(|&p| sign_traits(p).trikona).collect();
        assert_eq!(kendras, vec![1, 4, 7, 10]);
        assert_eq!(trikonas, vec![1, 5, 9]);
    }

    #[test]
    fn dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!((d.degrees, d.minutes), (23, 51));
        assert!((d.seconds - 10.8).abs() < 0.01);
        assert!((dms_to_deg(&d) - 23.853).abs() < 1e-9);
    }

    #[test]
    fn boundary_belongs_to_next_sign() {
        let info = rashi_from_longitude(30.0);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!(info.degrees_in_rashi.abs() < 1e-12);
    }

    #[test]
    fn wrap_and_negative() {
        assert_eq!(rashi_from_longitude(360.0).rashi, Rashi::Mesha);
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&Rashi::Vrischika).unwrap(), "\"Vrischika\"");
    }
}
