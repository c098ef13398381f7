//! Chart builder: birth input to a complete [`Chart`].
//!
//! Pipeline: validate → Julian Day → ayanamsa → graha positions →
//! ascendant → whole-sign houses → Shadbala → house strengths → drishti →
//! yogas. The builder holds only borrowed, read-only state, so one
//! ephemeris can serve builds on many threads.

use std::collections::BTreeMap;

use kundali_core::{EngineConfig, EngineError, Ephemeris};
use kundali_vedic_base::{
    ALL_GRAHAS, Bhava, Graha, GrahaStrength, ShadbalaInputs, SignIndex, YogaInputs, all_drishti,
    all_graha_strengths, classify, detect_yogas, house_strength, rashi_lord, round_to,
};

use crate::chart::{Ascendant, BirthInfo, Chart, HouseRecord, PlanetRecord};
use crate::error::ChartError;
use crate::input::BirthInput;
use crate::resolver::{GrahaPositions, resolve_positions};

const AYANAMSA_PLACES: u32 = 6;
const LONGITUDE_PLACES: u32 = 2;
const SPEED_PLACES: u32 = 4;

/// Builds charts against one ephemeris and configuration.
pub struct ChartBuilder<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
    config: &'a EngineConfig,
}

impl<'a, E: Ephemeris + ?Sized> ChartBuilder<'a, E> {
    pub fn new(ephemeris: &'a E, config: &'a EngineConfig) -> Self {
        Self { ephemeris, config }
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    pub fn ephemeris(&self) -> &'a E {
        self.ephemeris
    }

    /// Build a chart. Identical inputs always give identical charts.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(date = %input.date, time = %input.time, tz = input.timezone)
    )]
    pub fn build(&self, input: &BirthInput) -> Result<Chart, ChartError> {
        let civil = input.validate()?;
        let jd = civil.to_jd_ut();
        tracing::debug!(jd, "birth instant");

        let ayanamsa = self.ephemeris.ayanamsa(jd)?;
        let positions = resolve_positions(self.ephemeris, jd, self.config.node_mode)?;

        let cusps = self.ephemeris.cusps(jd, input.latitude, input.longitude)?;
        if !cusps.ascendant.is_finite() {
            return Err(ChartError::EphemerisFailure(EngineError::Unavailable(
                "non-finite ascendant".to_string(),
            )));
        }
        let lagna = classify(cusps.ascendant);
        let ascendant_sign = SignIndex::new(lagna.sign_index);
        tracing::debug!(ascendant = lagna.longitude, sign = %lagna.sign, "lagna");

        let inputs = ShadbalaInputs {
            ascendant_sign,
            signs: positions.signs(),
            speeds: positions.speeds(),
        };
        let strengths = all_graha_strengths(&inputs, self.config.strength_precision);
        let bhavas = ALL_GRAHAS.map(|g| inputs.bhava(g));

        let houses = self.houses(ascendant_sign, &bhavas, &strengths);
        let house_strengths = houses.each_ref().map(|h| h.strength);

        let aspects: BTreeMap<_, _> =
            all_drishti(ALL_GRAHAS.map(|g| (g, bhavas[g.index() as usize])))
                .into_iter()
                .map(|d| (d.graha, d.aspects))
                .collect();

        let yogas = detect_yogas(&YogaInputs {
            signs: inputs.signs,
            bhavas,
            strengths: strengths.map(|s| s.strength),
            house_strengths,
        });

        let chart = Chart {
            birth_info: BirthInfo {
                input: input.clone(),
                julian_day: jd,
                ayanamsa: round_to(ayanamsa, AYANAMSA_PLACES),
            },
            ascendant: Ascendant {
                sign: lagna.sign,
                degree: round_to(lagna.degrees_in_sign, LONGITUDE_PLACES),
                longitude: round_to(lagna.longitude, LONGITUDE_PLACES),
                nakshatra: lagna.nakshatra,
            },
            planets: planet_records(&positions, &bhavas, &strengths),
            houses,
            aspects,
            yogas,
        };
        tracing::info!(
            ascendant = %chart.ascendant.sign,
            yogas = chart.yogas.len(),
            "chart built"
        );
        Ok(chart)
    }

    fn houses(
        &self,
        ascendant_sign: SignIndex,
        bhavas: &[Bhava; 9],
        strengths: &[GrahaStrength; 9],
    ) -> [HouseRecord; 12] {
        std::array::from_fn(|i| {
            let number = Bhava::new(i as u8 + 1);
            let rashi = number.sign(ascendant_sign).rashi();
            let lord = rashi_lord(rashi);
            let occupants: Vec<_> = ALL_GRAHAS
                .into_iter()
                .filter(|g| bhavas[g.index() as usize] == number)
                .collect();
            let strength = house_strength(
                occupants.iter().map(|g| strengths[g.index() as usize].strength),
                Some(strengths[lord.index() as usize].strength),
            );
            let traits = rashi.traits();
            HouseRecord {
                number,
                sign: rashi,
                lord,
                element: traits.element,
                gender: traits.gender,
                purpose: traits.purpose,
                mobility: traits.mobility,
                kendra: traits.kendra,
                trikona: traits.trikona,
                occupants,
                strength: round_to(strength, self.config.strength_precision),
            }
        })
    }
}

fn planet_records(
    positions: &GrahaPositions,
    bhavas: &[Bhava; 9],
    strengths: &[GrahaStrength; 9],
) -> BTreeMap<Graha, PlanetRecord> {
    positions
        .iter()
        .map(|r| {
            let i = r.graha.index() as usize;
            let s = &strengths[i];
            let record = PlanetRecord {
                sign: r.placement.sign,
                house: bhavas[i],
                longitude: round_to(r.longitude, LONGITUDE_PLACES),
                speed: round_to(r.speed, SPEED_PLACES),
                strength: s.strength,
                dignity: s.dignity,
                retrograde: r.retrograde,
                nakshatra: r.placement.nakshatra,
                pada: r.placement.pada,
                shadbala: s.shadbala,
            };
            (r.graha, record)
        })
        .collect()
}
