//! Compatibility (synastry) between two birth charts.
//!
//! Four sub-scores on a 0-100 scale: Mangal dosha balance, Moon nakshatra
//! affinity, sign agreement of the classical grahas and strength of the
//! marriage houses. The overall score is their rounded mean.

use std::collections::BTreeMap;

use serde::Serialize;

use kundali_core::{EngineConfig, Ephemeris};
use kundali_vedic_base::{Bhava, Graha, Nakshatra, SAPTA_GRAHAS, favourable_rashis, round_to};

use crate::builder::ChartBuilder;
use crate::chart::{Chart, kuja_dosha};
use crate::error::ChartError;
use crate::input::BirthInput;

/// Houses weighed for marriage: spouse, family, home, children, fortune.
pub const MARRIAGE_HOUSES: [u8; 5] = [7, 2, 4, 5, 9];

const FULL: u8 = 100;
const GOOD: u8 = 75;
const PARTIAL: u8 = 50;

/// Overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompatibilityGrade {
    Excellent,
    Good,
    Challenging,
}

impl CompatibilityGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else {
            Self::Challenging
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangalDoshaMatch {
    pub person1_mangal_dosha: bool,
    pub person2_mangal_dosha: bool,
    pub compatibility_score: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraMatch {
    pub person1_nakshatra: Nakshatra,
    pub person2_nakshatra: Nakshatra,
    pub compatibility_score: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetaryMatch {
    pub individual_scores: BTreeMap<Graha, u8>,
    pub average_score: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseMatch {
    pub house_scores: BTreeMap<Bhava, u8>,
    pub average_score: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compatibility {
    pub overall_score: u8,
    pub grade: CompatibilityGrade,
    pub mangal_dosha: MangalDoshaMatch,
    pub nakshatra_compatibility: NakshatraMatch,
    pub planetary_compatibility: PlanetaryMatch,
    pub house_compatibility: HouseMatch,
}

/// Both charts plus their comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityReport {
    pub person1_chart: Chart,
    pub person2_chart: Chart,
    pub compatibility: Compatibility,
}

// ---------------------------------------------------------------------------
// Sub-scores
// ---------------------------------------------------------------------------

pub fn mangal_dosha_match(a: &Chart, b: &Chart) -> MangalDoshaMatch {
    let d1 = kuja_dosha(a);
    let d2 = kuja_dosha(b);
    let (compatibility_score, description) = match (d1, d2) {
        (true, true) => (FULL, "Both have Mangal Dosha - Highly Compatible"),
        (false, false) => (FULL, "Neither has Mangal Dosha - Compatible"),
        _ => (PARTIAL, "One person has Mangal Dosha - Partial Compatibility"),
    };
    MangalDoshaMatch {
        person1_mangal_dosha: d1,
        person2_mangal_dosha: d2,
        compatibility_score,
        description,
    }
}

/// Neighbouring nakshatras on the ring are compatible, and so are any two
/// of Ashwini, Bharani and Krittika.
pub fn nakshatras_compatible(a: Nakshatra, b: Nakshatra) -> bool {
    let (i, j) = (a.index(), b.index());
    let gap = (i + 27 - j) % 27;
    let ring_neighbours = gap == 1 || gap == 26;
    let opening_triad = i <= 2 && j <= 2 && i != j;
    ring_neighbours || opening_triad
}

pub fn nakshatra_score(a: Nakshatra, b: Nakshatra) -> u8 {
    if a == b {
        FULL
    } else if nakshatras_compatible(a, b) {
        GOOD
    } else {
        PARTIAL
    }
}

pub fn nakshatra_match(a: &Chart, b: &Chart) -> Option<NakshatraMatch> {
    let n1 = a.planet(Graha::Chandra)?.nakshatra;
    let n2 = b.planet(Graha::Chandra)?.nakshatra;
    let compatibility_score = nakshatra_score(n1, n2);
    let description = match compatibility_score {
        FULL => "Same Nakshatra - Excellent Compatibility",
        GOOD => "Compatible Nakshatras - Good Compatibility",
        _ => "Neutral Nakshatra Compatibility",
    };
    Some(NakshatraMatch {
        person1_nakshatra: n1,
        person2_nakshatra: n2,
        compatibility_score,
        description,
    })
}

/// Same sign 100; both in the graha's exaltation or own signs 75; else 50.
pub fn planet_score(graha: Graha, a: &Chart, b: &Chart) -> Option<u8> {
    let s1 = a.planet(graha)?.sign;
    let s2 = b.planet(graha)?.sign;
    if s1 == s2 {
        return Some(FULL);
    }
    let favoured = favourable_rashis(graha);
    if favoured.contains(&s1) && favoured.contains(&s2) {
        Some(GOOD)
    } else {
        Some(PARTIAL)
    }
}

fn section_description(
    score: f64,
    excellent: &'static str,
    good: &'static str,
    moderate: &'static str,
) -> &'static str {
    match CompatibilityGrade::from_score(score) {
        CompatibilityGrade::Excellent => excellent,
        CompatibilityGrade::Good => good,
        CompatibilityGrade::Challenging => moderate,
    }
}

fn mean(scores: impl Iterator<Item = u8>) -> f64 {
    let (sum, n) = scores.fold((0.0, 0usize), |(s, n), v| (s + v as f64, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

pub fn planetary_match(a: &Chart, b: &Chart) -> PlanetaryMatch {
    let individual_scores: BTreeMap<Graha, u8> = SAPTA_GRAHAS
        .iter()
        .filter_map(|&g| planet_score(g, a, b).map(|s| (g, s)))
        .collect();
    let average_score = round_to(mean(individual_scores.values().copied()), 2);
    PlanetaryMatch {
        individual_scores,
        average_score,
        description: section_description(
            average_score,
            "Excellent Planetary Compatibility",
            "Good Planetary Compatibility",
            "Moderate Planetary Compatibility",
        ),
    }
}

/// Both above 5.0 → 100, both above 3.0 → 75, else 50.
pub fn house_score(strength1: f64, strength2: f64) -> u8 {
    if strength1 > 5.0 && strength2 > 5.0 {
        FULL
    } else if strength1 > 3.0 && strength2 > 3.0 {
        GOOD
    } else {
        PARTIAL
    }
}

pub fn house_match(a: &Chart, b: &Chart) -> HouseMatch {
    let house_scores: BTreeMap<Bhava, u8> = MARRIAGE_HOUSES
        .iter()
        .map(|&n| {
            let h = Bhava::new(n);
            (h, house_score(a.house(h).strength, b.house(h).strength))
        })
        .collect();
    let average_score = round_to(mean(house_scores.values().copied()), 2);
    HouseMatch {
        house_scores,
        average_score,
        description: section_description(
            average_score,
            "Excellent House Compatibility",
            "Good House Compatibility",
            "Moderate House Compatibility",
        ),
    }
}

/// Compare two built charts. `None` only if a chart lacks its Moon record.
pub fn analyze_compatibility(a: &Chart, b: &Chart) -> Option<Compatibility> {
    let mangal_dosha = mangal_dosha_match(a, b);
    let nakshatra_compatibility = nakshatra_match(a, b)?;
    let planetary_compatibility = planetary_match(a, b);
    let house_compatibility = house_match(a, b);

    let overall = (mangal_dosha.compatibility_score as f64
        + nakshatra_compatibility.compatibility_score as f64
        + planetary_compatibility.average_score
        + house_compatibility.average_score)
        / 4.0;

    Some(Compatibility {
        overall_score: overall.round() as u8,
        grade: CompatibilityGrade::from_score(overall.round()),
        mangal_dosha,
        nakshatra_compatibility,
        planetary_compatibility,
        house_compatibility,
    })
}

/// Build both charts and compare them.
pub fn compatibility_report<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    config: &EngineConfig,
    person1: &BirthInput,
    person2: &BirthInput,
) -> Result<CompatibilityReport, ChartError> {
    let builder = ChartBuilder::new(ephemeris, config);
    let person1_chart = builder.build(person1)?;
    let person2_chart = builder.build(person2)?;
    let compatibility = analyze_compatibility(&person1_chart, &person2_chart)
        .ok_or_else(|| ChartError::InvalidInput("chart has no Moon record".to_string()))?;
    tracing::debug!(score = compatibility.overall_score, "compatibility scored");
    Ok(CompatibilityReport {
        person1_chart,
        person2_chart,
        compatibility,
    })
}
