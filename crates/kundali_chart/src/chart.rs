//! Chart data model and its serialized shape.
//!
//! A [`Chart`] is plain data: built once by the chart builder, never
//! mutated afterwards. Planet-keyed maps are ordered by graha.

use std::collections::BTreeMap;

use serde::Serialize;

use kundali_vedic_base::{
    Bhava, Dignity, Element, Gender, Graha, Mobility, Nakshatra, Purpose, Rashi,
    ShadbalaBreakdown, SignIndex, Yoga, is_kuja_dosha_bhava,
};

use crate::input::BirthInput;

/// Input echo plus the derived instant and ayanamsa.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthInfo {
    #[serde(flatten)]
    pub input: BirthInput,
    pub julian_day: f64,
    /// Degrees, six decimals.
    pub ayanamsa: f64,
}

/// Lagna.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ascendant {
    pub sign: Rashi,
    /// Degrees within the sign, two decimals.
    pub degree: f64,
    /// Sidereal longitude, two decimals.
    pub longitude: f64,
    pub nakshatra: Nakshatra,
}

impl Ascendant {
    pub fn sign_index(&self) -> SignIndex {
        SignIndex::from(self.sign)
    }
}

/// One graha as it appears in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetRecord {
    pub sign: Rashi,
    pub house: Bhava,
    /// Sidereal longitude, two decimals.
    pub longitude: f64,
    /// Degrees/day, four decimals.
    pub speed: f64,
    pub strength: f64,
    pub dignity: Dignity,
    pub retrograde: bool,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadbala: Option<ShadbalaBreakdown>,
}

/// One whole-sign house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRecord {
    pub number: Bhava,
    pub sign: Rashi,
    pub lord: Graha,
    pub element: Element,
    pub gender: Gender,
    pub purpose: Purpose,
    pub mobility: Mobility,
    pub kendra: bool,
    pub trikona: bool,
    pub occupants: Vec<Graha>,
    pub strength: f64,
}

/// A complete birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub birth_info: BirthInfo,
    pub ascendant: Ascendant,
    pub planets: BTreeMap<Graha, PlanetRecord>,
    pub houses: [HouseRecord; 12],
    pub aspects: BTreeMap<Graha, Vec<Bhava>>,
    pub yogas: Vec<Yoga>,
}

impl Chart {
    /// Record of one graha. Every chart carries all nine.
    pub fn planet(&self, graha: Graha) -> Option<&PlanetRecord> {
        self.planets.get(&graha)
    }

    pub fn house(&self, bhava: Bhava) -> &HouseRecord {
        &self.houses[bhava.number() as usize - 1]
    }

    pub fn has_yoga(&self, yoga: Yoga) -> bool {
        self.yogas.contains(&yoga)
    }

    /// Strongest graha and house plus the retrograde set.
    pub fn summary(&self) -> ChartSummary {
        let strongest_planet = self
            .planets
            .iter()
            .map(|(g, p)| (*g, p.strength))
            .fold(None, |best: Option<(Graha, f64)>, cur| match best {
                Some(b) if b.1 >= cur.1 => Some(b),
                _ => Some(cur),
            });
        let strongest_house = self
            .houses
            .iter()
            .map(|h| (h.number, h.strength))
            .fold(None, |best: Option<(Bhava, f64)>, cur| match best {
                Some(b) if b.1 >= cur.1 => Some(b),
                _ => Some(cur),
            });
        ChartSummary {
            strongest_planet,
            strongest_house,
            retrograde: self
                .planets
                .iter()
                .filter(|(_, p)| p.retrograde)
                .map(|(g, _)| *g)
                .collect(),
            yoga_count: self.yogas.len(),
        }
    }
}

/// Headline facts of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub strongest_planet: Option<(Graha, f64)>,
    pub strongest_house: Option<(Bhava, f64)>,
    pub retrograde: Vec<Graha>,
    pub yoga_count: usize,
}

/// Mars in house 1, 2, 4, 7, 8 or 12.
pub fn kuja_dosha(chart: &Chart) -> bool {
    chart
        .planet(Graha::Mangal)
        .is_some_and(|mars| is_kuja_dosha_bhava(mars.house))
}
