//! Transit analysis: current sky positions read against a natal chart.
//!
//! The transit chart is cast for 12:00 local time on the transit date at
//! the natal place and offset. Each classical graha's transit sign is
//! counted as a house from the natal lagna sign.

use chrono::NaiveDate;
use serde::Serialize;

use kundali_core::{EngineConfig, Ephemeris};
use kundali_vedic_base::{Bhava, Graha, Rashi, SAPTA_GRAHAS, SignIndex};

use crate::builder::ChartBuilder;
use crate::chart::Chart;
use crate::error::ChartError;
use crate::input::BirthInput;

/// Local clock time at which transit charts are cast.
pub const TRANSIT_TIME: &str = "12:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitStrength {
    Strong,
    Moderate,
    Neutral,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitImpact {
    High,
    Medium,
    Moderate,
    Challenging,
}

/// Qualitative effect of one transit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitEffects {
    pub strength: TransitStrength,
    pub impact: TransitImpact,
    pub areas_affected: Vec<String>,
    pub remedies: Vec<String>,
}

/// One graha's transit over the natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetTransit {
    pub planet: Graha,
    pub birth_house: Bhava,
    pub transit_sign: Rashi,
    pub transit_house: Bhava,
    pub effects: TransitEffects,
}

/// Life areas a graha's transit touches.
pub const fn life_areas(graha: Graha) -> Option<&'static str> {
    match graha {
        Graha::Surya => Some("Leadership, authority, father, government"),
        Graha::Chandra => Some("Mind, emotions, mother, home"),
        Graha::Mangal => Some("Energy, courage, siblings, property"),
        Graha::Buddh => Some("Communication, business, education"),
        Graha::Guru => Some("Wisdom, children, guru, spirituality"),
        Graha::Shukra => Some("Relationships, luxury, arts, spouse"),
        Graha::Shani => Some("Discipline, career, obstacles, karma"),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// House of a transit sign counted from the natal lagna sign.
pub const fn transit_house(transit_sign: SignIndex, natal_lagna: SignIndex) -> Bhava {
    Bhava::from_signs(transit_sign, natal_lagna)
}

/// Effects of `graha` transiting `transit_house`, natal house `birth_house`.
///
/// Rules apply in order and later ones override the grading: return to
/// the natal house, kendra, trikona, dusthana. House 1 is both kendra and
/// trikona and so ends Moderate.
pub fn transit_effects(graha: Graha, birth_house: Bhava, transit_house: Bhava) -> TransitEffects {
    let mut strength = TransitStrength::Neutral;
    let mut impact = TransitImpact::Moderate;
    let mut areas = Vec::new();

    if transit_house == birth_house {
        strength = TransitStrength::Strong;
        impact = TransitImpact::High;
        areas.push(format!("House {birth_house} matters"));
    }
    if transit_house.is_kendra() {
        strength = TransitStrength::Strong;
        impact = TransitImpact::High;
        areas.push("Kendra transit - major life changes".to_string());
    }
    if transit_house.is_trikona() {
        strength = TransitStrength::Moderate;
        impact = TransitImpact::Medium;
        areas.push("Trikona transit - spiritual growth".to_string());
    }
    if transit_house.is_dusthana() {
        strength = TransitStrength::Weak;
        impact = TransitImpact::Challenging;
        areas.push("Dusthana transit - challenges".to_string());
    }
    if let Some(text) = life_areas(graha) {
        areas.push(text.to_string());
    }

    let remedies = if impact == TransitImpact::Challenging {
        vec![
            format!("Chant {graha} mantras"),
            format!("Donate items related to {graha}"),
        ]
    } else {
        Vec::new()
    };

    TransitEffects {
        strength,
        impact,
        areas_affected: areas,
        remedies,
    }
}

/// Transits of the seven classical grahas.
pub fn analyze_transits(natal: &Chart, transit: &Chart) -> Vec<PlanetTransit> {
    let lagna = natal.ascendant.sign_index();
    SAPTA_GRAHAS
        .iter()
        .filter_map(|&g| {
            let birth = natal.planet(g)?;
            let now = transit.planet(g)?;
            let house = transit_house(SignIndex::from(now.sign), lagna);
            Some(PlanetTransit {
                planet: g,
                birth_house: birth.house,
                transit_sign: now.sign,
                transit_house: house,
                effects: transit_effects(g, birth.house, house),
            })
        })
        .collect()
}

/// Summary line of one transit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitSummaryEntry {
    pub planet: Graha,
    pub birth_house: Bhava,
    pub transit_house: Bhava,
    pub transit_sign: Rashi,
    pub effects: Vec<String>,
}

/// Transits bucketed by strength. A challenging transit is also listed
/// under its strength bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransitSummary {
    pub strong_transits: Vec<TransitSummaryEntry>,
    pub moderate_transits: Vec<TransitSummaryEntry>,
    pub weak_transits: Vec<TransitSummaryEntry>,
    pub challenging_transits: Vec<TransitSummaryEntry>,
}

pub fn summarize_transits(transits: &[PlanetTransit]) -> TransitSummary {
    let mut summary = TransitSummary::default();
    for t in transits {
        let entry = TransitSummaryEntry {
            planet: t.planet,
            birth_house: t.birth_house,
            transit_house: t.transit_house,
            transit_sign: t.transit_sign,
            effects: t.effects.areas_affected.clone(),
        };
        if t.effects.impact == TransitImpact::Challenging {
            summary.challenging_transits.push(entry.clone());
        }
        match t.effects.strength {
            TransitStrength::Strong => summary.strong_transits.push(entry),
            TransitStrength::Moderate => summary.moderate_transits.push(entry),
            TransitStrength::Weak => summary.weak_transits.push(entry),
            TransitStrength::Neutral => {}
        }
    }
    summary
}

/// Natal chart, transit chart and their comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitReport {
    pub transit_date: NaiveDate,
    pub birth_chart: Chart,
    pub transit_chart: Chart,
    pub transits: Vec<PlanetTransit>,
    pub summary: TransitSummary,
}

/// Cast both charts and compare them.
pub fn transit_report<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    config: &EngineConfig,
    birth: &BirthInput,
    transit_date: NaiveDate,
) -> Result<TransitReport, ChartError> {
    let builder = ChartBuilder::new(ephemeris, config);
    let birth_chart = builder.build(birth)?;
    let transit_chart = builder.build(&birth.at(transit_date, TRANSIT_TIME))?;
    let transits = analyze_transits(&birth_chart, &transit_chart);
    let summary = summarize_transits(&transits);
    tracing::debug!(
        %transit_date,
        strong = summary.strong_transits.len(),
        challenging = summary.challenging_transits.len(),
        "transits analyzed"
    );
    Ok(TransitReport {
        transit_date,
        birth_chart,
        transit_chart,
        transits,
        summary,
    })
}
