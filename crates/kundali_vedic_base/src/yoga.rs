//! Classical yoga (planetary combination) detection.
//!
//! Rules are evaluated over whole-sign facts only: each graha's sign and
//! house, each graha's display strength, and each house's aggregate
//! strength. The result is a sorted, de-duplicated list.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::bhava::{Bhava, SignIndex};
use crate::graha::Graha;
use crate::rashi::Rashi;

/// Detected combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Yoga {
    Gajakesari,
    Budhaditya,
    ChandraMangal,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Sasha,
    KujaDosha,
    Dhana,
    Raja,
    GuruChandala,
    Lakshmi,
}

impl Yoga {
    /// Display name as used in chart output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gajakesari => "Gaja Kesari Yoga",
            Self::Budhaditya => "Budhaditya Yoga",
            Self::ChandraMangal => "Chandra Mangal Yoga",
            Self::Ruchaka => "Ruchaka Yoga",
            Self::Bhadra => "Bhadra Yoga",
            Self::Hamsa => "Hamsa Yoga",
            Self::Malavya => "Malavya Yoga",
            Self::Sasha => "Sasha Yoga",
            Self::KujaDosha => "Kuja Dosha (Manglik)",
            Self::Dhana => "Dhana Yoga",
            Self::Raja => "Raja Yoga",
            Self::GuruChandala => "Guru Chandala Yoga",
            Self::Lakshmi => "Lakshmi Yoga",
        }
    }

    /// One-line interpretation.
    pub const fn effect(self) -> &'static str {
        match self {
            Self::Gajakesari => "Brings wisdom, wealth, and high status",
            Self::Budhaditya => "Enhances intelligence and communication",
            Self::ChandraMangal => "Indicates wealth through own efforts",
            Self::Ruchaka => "Mars Mahapurusha - courage and leadership",
            Self::Bhadra => "Mercury Mahapurusha - intelligence and learning",
            Self::Hamsa => "Jupiter Mahapurusha - wisdom and spirituality",
            Self::Malavya => "Venus Mahapurusha - luxury and beauty",
            Self::Sasha => "Saturn Mahapurusha - perseverance and authority",
            Self::KujaDosha => "Mars affliction affecting relationships",
            Self::Dhana => "Strong wealth houses",
            Self::Raja => "Strong angular houses - power and status",
            Self::GuruChandala => "Jupiter afflicted by Rahu - unorthodox judgement",
            Self::Lakshmi => "Brings wealth and prosperity",
        }
    }
}

impl Display for Yoga {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Yoga {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Chart facts the detector reads, indexed by `Graha::index()` / house - 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInputs {
    pub signs: [SignIndex; 9],
    pub bhavas: [Bhava; 9],
    pub strengths: [f64; 9],
    pub house_strengths: [f64; 12],
}

impl YogaInputs {
    fn sign(&self, g: Graha) -> SignIndex {
        self.signs[g.index() as usize]
    }

    fn bhava(&self, g: Graha) -> Bhava {
        self.bhavas[g.index() as usize]
    }

    fn house_strength(&self, number: u8) -> f64 {
        self.house_strengths[Bhava::new(number).number() as usize - 1]
    }
}

// ---------------------------------------------------------------------------
// Individual rules
// ---------------------------------------------------------------------------

/// Moon and Jupiter in mutual kendras (house difference 0, 3, 6 or 9).
pub fn is_gajakesari(y: &YogaInputs) -> bool {
    let moon = y.bhava(Graha::Chandra).number() as i16;
    let jupiter = y.bhava(Graha::Guru).number() as i16;
    (moon - jupiter).abs() % 3 == 0
}

/// Sun and Mercury in the same sign.
pub fn is_budhaditya(y: &YogaInputs) -> bool {
    y.sign(Graha::Surya) == y.sign(Graha::Buddh)
}

/// Moon and Mars in the same sign.
pub fn is_chandra_mangal(y: &YogaInputs) -> bool {
    y.sign(Graha::Chandra) == y.sign(Graha::Mangal)
}

const MAHAPURUSHA: [(Graha, Yoga, &[Rashi]); 5] = [
    (Graha::Mangal, Yoga::Ruchaka, &[Rashi::Mesha, Rashi::Vrischika, Rashi::Makara]),
    (Graha::Buddh, Yoga::Bhadra, &[Rashi::Mithuna, Rashi::Kanya]),
    (Graha::Guru, Yoga::Hamsa, &[Rashi::Dhanu, Rashi::Meena, Rashi::Karka]),
    (Graha::Shukra, Yoga::Malavya, &[Rashi::Vrishabha, Rashi::Tula, Rashi::Meena]),
    (Graha::Shani, Yoga::Sasha, &[Rashi::Makara, Rashi::Kumbha, Rashi::Tula]),
];

/// Pancha Mahapurusha: the planet in own or exaltation sign and in a kendra.
pub fn mahapurusha_yogas(y: &YogaInputs) -> Vec<Yoga> {
    MAHAPURUSHA
        .iter()
        .filter(|(g, _, signs)| y.bhava(*g).is_kendra() && signs.contains(&y.sign(*g).rashi()))
        .map(|(_, yoga, _)| *yoga)
        .collect()
}

/// Houses where Mars causes Kuja Dosha.
pub const KUJA_DOSHA_BHAVAS: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Kuja Dosha (Manglik) for a Mars house.
pub const fn is_kuja_dosha_bhava(mars: Bhava) -> bool {
    matches!(mars.number(), 1 | 2 | 4 | 7 | 8 | 12)
}

pub fn is_kuja_dosha(y: &YogaInputs) -> bool {
    is_kuja_dosha_bhava(y.bhava(Graha::Mangal))
}

fn strong_house_count(y: &YogaInputs, houses: &[u8], threshold: f64) -> usize {
    houses
        .iter()
        .filter(|&&h| y.house_strength(h) > threshold)
        .count()
}

/// At least two of the wealth houses 2, 5, 9, 11 above 5.0.
pub fn is_dhana(y: &YogaInputs) -> bool {
    strong_house_count(y, &[2, 5, 9, 11], 5.0) >= 2
}

/// At least two kendras above 6.0.
pub fn is_raja(y: &YogaInputs) -> bool {
    strong_house_count(y, &[1, 4, 7, 10], 6.0) >= 2
}

/// Jupiter and Rahu in the same sign.
pub fn is_guru_chandala(y: &YogaInputs) -> bool {
    y.sign(Graha::Guru) == y.sign(Graha::Rahu)
}

/// Venus in a kendra or trikona with display strength at least 3.0.
pub fn is_lakshmi(y: &YogaInputs) -> bool {
    let venus = y.bhava(Graha::Shukra);
    (venus.is_kendra() || venus.is_trikona()) && y.strengths[Graha::Shukra.index() as usize] >= 3.0
}

// ---------------------------------------------------------------------------
// Detector
// ---------------------------------------------------------------------------

/// All yogas present, sorted and de-duplicated.
pub fn detect_yogas(y: &YogaInputs) -> Vec<Yoga> {
    let mut found = Vec::new();
    if is_gajakesari(y) {
        found.push(Yoga::Gajakesari);
    }
    if is_budhaditya(y) {
        found.push(Yoga::Budhaditya);
    }
    if is_chandra_mangal(y) {
        found.push(Yoga::ChandraMangal);
    }
    found.extend(mahapurusha_yogas(y));
    if is_kuja_dosha(y) {
        found.push(Yoga::KujaDosha);
    }
    if is_dhana(y) {
        found.push(Yoga::Dhana);
    }
    if is_raja(y) {
        found.push(Yoga::Raja);
    }
    if is_guru_chandala(y) {
        found.push(Yoga::GuruChandala);
    }
    if is_lakshmi(y) {
        found.push(Yoga::Lakshmi);
    }
    found.sort_unstable();
    found.dedup();
    tracing::debug!(count = found.len(), "yogas detected");
    found
}
