//! Shadbala (six-fold planetary strength), proportional model.
//!
//! Pure math, no ephemeris dependency. **Sapta grahas only**; Rahu and
//! Ketu get a fixed display strength and neutral dignity.
//!
//! Every component is scored on a roughly 0..1 scale (Naisargika reaches
//! 2.0 for the Sun) rather than in classical shashtiamsas:
//! 1. Sthana Bala (positional): dignity base + kendra/trikona bonuses
//! 2. Dig Bala (directional): sign distance from the ascendant sign
//! 3. Kala Bala (temporal): day/night strength averaged with four constants
//! 4. Cheshta Bala (motional): retrograde or direct
//! 5. Naisargika Bala (natural): fixed per graha
//! 6. Drik Bala (aspectual): house category
//!
//! Total is the unweighted mean of the six; display strength is total × 10.

use serde::Serialize;

use crate::bhava::{Bhava, SignIndex};
use crate::dignity::{Dignity, dignity_in_rashi};
use crate::graha::{ALL_GRAHAS, Graha};
use crate::util::round_to;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Natural strength, indexed like `SAPTA_GRAHAS`:
/// Sun 2.0, Moon 1.5, Mars 0.5, Mercury 0.75, Jupiter 1.0, Venus 1.25, Saturn 0.25.
pub const NAISARGIKA_BALA: [f64; 7] = [2.0, 1.5, 0.5, 0.75, 1.0, 1.25, 0.25];

/// Neutral score used wherever a lookup has nothing better to offer.
pub const NEUTRAL_BALA: f64 = 0.5;

/// Fixed display strength of Rahu and Ketu.
pub const NODE_STRENGTH: f64 = 3.5;

/// Value of each of the abda/masa/vara/hora sub-factors of Kala Bala.
///
/// These four are not derived from the date; the constant is a known
/// approximation of the classical year/month/weekday/hour lords.
pub const KALA_PLACEHOLDER_BALA: f64 = 0.75;

/// Multiplier from the 0..1-ish total to the display strength.
pub const DISPLAY_SCALE: f64 = 10.0;

const KENDRA_BONUS: f64 = 0.25;
const TRIKONA_BONUS: f64 = 0.25;

fn is_sapta_graha(graha: Graha) -> bool {
    !graha.is_node()
}

// ---------------------------------------------------------------------------
// 1. Sthana Bala
// ---------------------------------------------------------------------------

/// Base positional score for a dignity.
pub const fn dignity_score(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 1.0,
        Dignity::OwnSign => 0.75,
        Dignity::Neutral => 0.5,
        Dignity::Debilitated => 0.25,
    }
}

/// Sthana Bala parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SthanaBalaBreakdown {
    pub dignity: Dignity,
    pub dignity_score: f64,
    pub kendra_bonus: f64,
    pub trikona_bonus: f64,
    pub total: f64,
}

/// Positional strength of a graha in a sign and house.
///
/// Kendra and trikona bonuses are judged on the house number and stack
/// (house 1 earns both).
pub fn sthana_bala(graha: Graha, sign: SignIndex, bhava: Bhava) -> SthanaBalaBreakdown {
    let dignity = dignity_in_rashi(graha, sign.rashi());
    let base = dignity_score(dignity);
    let kendra_bonus = if bhava.is_kendra() { KENDRA_BONUS } else { 0.0 };
    let trikona_bonus = if bhava.is_trikona() { TRIKONA_BONUS } else { 0.0 };
    SthanaBalaBreakdown {
        dignity,
        dignity_score: base,
        kendra_bonus,
        trikona_bonus,
        total: base + kendra_bonus + trikona_bonus,
    }
}

// ---------------------------------------------------------------------------
// 2. Dig Bala
// ---------------------------------------------------------------------------

/// Directional strength from the planet sign's distance to the ascendant sign.
///
/// Distance 0-1 east 1.0, 3-4 south 0.75, 6-7 west 0.5, 9-10 north 0.25,
/// the remaining cusp-adjacent positions 0.5.
pub const fn dig_bala(planet_sign: SignIndex, ascendant_sign: SignIndex) -> f64 {
    match ascendant_sign.steps_to(planet_sign) {
        0 | 1 => 1.0,
        3 | 4 => 0.75,
        6 | 7 => 0.5,
        9 | 10 => 0.25,
        _ => NEUTRAL_BALA,
    }
}

// ---------------------------------------------------------------------------
// 3. Kala Bala
// ---------------------------------------------------------------------------

/// Birth counts as "day" when the Sun's sign is Mesha through Kanya.
pub const fn is_daytime(sun_sign: SignIndex) -> bool {
    sun_sign.in_northern_half()
}

/// Day/night component: Sun, Jupiter and Saturn are strong by day; Moon,
/// Mars and Venus by night; Mercury is always 0.75.
pub const fn nathonnata_bala(graha: Graha, is_daytime: bool) -> f64 {
    match graha {
        Graha::Surya | Graha::Guru | Graha::Shani => {
            if is_daytime {
                1.0
            } else {
                0.5
            }
        }
        Graha::Chandra | Graha::Mangal | Graha::Shukra => {
            if is_daytime {
                0.5
            } else {
                1.0
            }
        }
        Graha::Buddh => 0.75,
        Graha::Rahu | Graha::Ketu => 0.0,
    }
}

/// Kala Bala parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KalaBalaBreakdown {
    pub nathonnata: f64,
    pub abda: f64,
    pub masa: f64,
    pub vara: f64,
    pub hora: f64,
    pub total: f64,
}

/// Temporal strength: mean of nathonnata and the four constant sub-factors.
pub fn kala_bala(graha: Graha, is_daytime: bool) -> KalaBalaBreakdown {
    let n = nathonnata_bala(graha, is_daytime);
    let k = KALA_PLACEHOLDER_BALA;
    KalaBalaBreakdown {
        nathonnata: n,
        abda: k,
        masa: k,
        vara: k,
        hora: k,
        total: (n + 4.0 * k) / 5.0,
    }
}

// ---------------------------------------------------------------------------
// 4. Cheshta Bala
// ---------------------------------------------------------------------------

/// Motional strength: 1.0 when retrograde (negative speed), else 0.5.
pub fn cheshta_bala(speed_deg_per_day: f64) -> f64 {
    if speed_deg_per_day < 0.0 { 1.0 } else { NEUTRAL_BALA }
}

// ---------------------------------------------------------------------------
// 5. Naisargika Bala
// ---------------------------------------------------------------------------

/// Natural strength. Nodes get the neutral score.
pub fn naisargika_bala(graha: Graha) -> f64 {
    if is_sapta_graha(graha) {
        NAISARGIKA_BALA[graha.index() as usize]
    } else {
        NEUTRAL_BALA
    }
}

/// Name-keyed natural strength; unknown names get the neutral score.
pub fn naisargika_by_name(graha_name: &str) -> f64 {
    match graha_name.parse::<Graha>() {
        Ok(g) => naisargika_bala(g),
        Err(e) => {
            tracing::warn!(error = %e, "naisargika lookup fell back to neutral");
            NEUTRAL_BALA
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Drik Bala
// ---------------------------------------------------------------------------

/// Aspectual strength: kendra 1.0, houses 5 and 9 0.75, otherwise 0.5.
pub const fn drik_bala(bhava: Bhava) -> f64 {
    match bhava.number() {
        1 | 4 | 7 | 10 => 1.0,
        5 | 9 => 0.75,
        _ => NEUTRAL_BALA,
    }
}

// ---------------------------------------------------------------------------
// Complete Shadbala
// ---------------------------------------------------------------------------

/// Six component scores and their mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadbalaBreakdown {
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub cheshta: f64,
    pub naisargika: f64,
    pub drik: f64,
    pub total: f64,
    #[serde(skip)]
    pub sthana_detail: SthanaBalaBreakdown,
    #[serde(skip)]
    pub kala_detail: KalaBalaBreakdown,
}

impl ShadbalaBreakdown {
    /// Components in output order: sthana, dig, kala, cheshta, naisargika, drik.
    pub const fn components(&self) -> [f64; 6] {
        [self.sthana, self.dig, self.kala, self.cheshta, self.naisargika, self.drik]
    }
}

/// Everything Shadbala needs from a chart, indexed by `Graha::index()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadbalaInputs {
    pub ascendant_sign: SignIndex,
    pub signs: [SignIndex; 9],
    pub speeds: [f64; 9],
}

impl ShadbalaInputs {
    /// Whole-sign house of a graha.
    pub const fn bhava(&self, graha: Graha) -> Bhava {
        Bhava::from_signs(self.signs[graha.index() as usize], self.ascendant_sign)
    }

    pub const fn is_daytime(&self) -> bool {
        is_daytime(self.signs[Graha::Surya.index() as usize])
    }
}

/// Complete Shadbala for one classical graha. `None` for Rahu/Ketu.
pub fn shadbala(graha: Graha, inputs: &ShadbalaInputs) -> Option<ShadbalaBreakdown> {
    if !is_sapta_graha(graha) {
        return None;
    }
    let gi = graha.index() as usize;
    let sign = inputs.signs[gi];
    let bhava = inputs.bhava(graha);

    let sthana = sthana_bala(graha, sign, bhava);
    let dig = dig_bala(sign, inputs.ascendant_sign);
    let kala = kala_bala(graha, inputs.is_daytime());
    let cheshta = cheshta_bala(inputs.speeds[gi]);
    let naisargika = naisargika_bala(graha);
    let drik = drik_bala(bhava);

    let total = (sthana.total + dig + kala.total + cheshta + naisargika + drik) / 6.0;
    Some(ShadbalaBreakdown {
        sthana: sthana.total,
        dig,
        kala: kala.total,
        cheshta,
        naisargika,
        drik,
        total,
        sthana_detail: sthana,
        kala_detail: kala,
    })
}

/// Final per-graha strength record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaStrength {
    pub graha: Graha,
    /// Display strength (total × 10), two decimals.
    pub strength: f64,
    pub dignity: Dignity,
    pub shadbala: Option<ShadbalaBreakdown>,
}

/// Decimal places of the display strength unless configured otherwise.
pub const DEFAULT_STRENGTH_PRECISION: u32 = 2;

/// Strength of any graha; the nodes get [`NODE_STRENGTH`] and neutral dignity.
pub fn graha_strength(graha: Graha, inputs: &ShadbalaInputs) -> GrahaStrength {
    graha_strength_with_precision(graha, inputs, DEFAULT_STRENGTH_PRECISION)
}

/// As [`graha_strength`], rounding the display strength to `places` decimals.
pub fn graha_strength_with_precision(
    graha: Graha,
    inputs: &ShadbalaInputs,
    places: u32,
) -> GrahaStrength {
    match shadbala(graha, inputs) {
        Some(sb) => GrahaStrength {
            graha,
            strength: round_to(sb.total * DISPLAY_SCALE, places),
            dignity: sb.sthana_detail.dignity,
            shadbala: Some(sb),
        },
        None => GrahaStrength {
            graha,
            strength: NODE_STRENGTH,
            dignity: Dignity::Neutral,
            shadbala: None,
        },
    }
}

/// Strengths of all 9 grahas, indexed by `Graha::index()`.
pub fn all_graha_strengths(inputs: &ShadbalaInputs, places: u32) -> [GrahaStrength; 9] {
    ALL_GRAHAS.map(|g| graha_strength_with_precision(g, inputs, places))
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Pass mark for an individual component.
pub const COMPONENT_PASS_MARK: f64 = 0.5;

/// Coarse grading of a Shadbala total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthGrade {
    Strong,
    Moderate,
    Weak,
}

impl StrengthGrade {
    /// Strong from 0.7, Moderate from 0.5.
    pub fn from_total(total: f64) -> Self {
        if total >= 0.7 {
            Self::Strong
        } else if total >= 0.5 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Human-facing summary of one graha's Shadbala.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadbalaAssessment {
    pub grade: StrengthGrade,
    /// Total × 10, one decimal.
    pub score: f64,
    /// Component passes, same order as [`ShadbalaBreakdown::components`].
    pub passes: [bool; 6],
}

/// Grade a breakdown and mark which components meet the pass mark.
pub fn assess(breakdown: &ShadbalaBreakdown) -> ShadbalaAssessment {
    ShadbalaAssessment {
        grade: StrengthGrade::from_total(breakdown.total),
        score: round_to(breakdown.total * DISPLAY_SCALE, 1),
        passes: breakdown.components().map(|c| c >= COMPONENT_PASS_MARK),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn inputs(asc: u8, signs: [u8; 9], speeds: [f64; 9]) -> ShadbalaInputs {
        ShadbalaInputs {
            ascendant_sign: SignIndex::new(asc),
            signs: signs.map(SignIndex::new),
            speeds,
        }
    }

    // --- Sthana ---

    #[test]
    fn sthana_exalted_in_first_house_stacks_both_bonuses() {
        // Sun in Mesha, ascendant Mesha → exalted, house 1
        let s = sthana_bala(Graha::Surya, SignIndex::new(0), Bhava::new(1));
        assert_eq!(s.dignity, Dignity::Exalted);
        assert!((s.total - 1.5).abs() < EPS);
    }

    #[test]
    fn sthana_debilitated_in_sixth() {
        let s = sthana_bala(Graha::Surya, SignIndex::new(6), Bhava::new(6));
        assert_eq!(s.dignity, Dignity::Debilitated);
        assert!((s.total - 0.25).abs() < EPS);
    }

    #[test]
    fn sthana_own_in_trikona() {
        // Jupiter in Dhanu, 5th house
        let s = sthana_bala(Graha::Guru, SignIndex::new(8), Bhava::new(5));
        assert_eq!(s.dignity, Dignity::OwnSign);
        assert!((s.total - 1.0).abs() < EPS);
    }

    // --- Dig ---

    #[test]
    fn dig_buckets() {
        let asc = SignIndex::new(3);
        let expect = [1.0, 1.0, 0.5, 0.75, 0.75, 0.5, 0.5, 0.5, 0.5, 0.25, 0.25, 0.5];
        for (rel, e) in expect.iter().enumerate() {
            let sign = asc.advance(rel as u8);
            assert!((dig_bala(sign, asc) - e).abs() < EPS, "rel {rel}");
        }
    }

    // --- Kala ---

    #[test]
    fn daytime_by_sun_sign() {
        assert!(is_daytime(SignIndex::new(0)));
        assert!(is_daytime(SignIndex::new(5)));
        assert!(!is_daytime(SignIndex::new(6)));
        assert!(!is_daytime(SignIndex::new(11)));
    }

    #[test]
    fn kala_day_planet_by_day() {
        let k = kala_bala(Graha::Guru, true);
        assert!((k.nathonnata - 1.0).abs() < EPS);
        assert!((k.total - 0.8).abs() < EPS);
    }

    #[test]
    fn kala_night_planet_by_day() {
        let k = kala_bala(Graha::Shukra, true);
        assert!((k.total - 0.7).abs() < EPS);
        let k = kala_bala(Graha::Shukra, false);
        assert!((k.total - 0.8).abs() < EPS);
    }

    #[test]
    fn kala_mercury_constant() {
        assert!((kala_bala(Graha::Buddh, true).total - 0.75).abs() < EPS);
        assert!((kala_bala(Graha::Buddh, false).total - 0.75).abs() < EPS);
    }

    // --- Cheshta / Naisargika / Drik ---

    #[test]
    fn cheshta_retrograde() {
        assert_eq!(cheshta_bala(-0.1), 1.0);
        assert_eq!(cheshta_bala(0.0), 0.5);
        assert_eq!(cheshta_bala(1.2), 0.5);
    }

    #[test]
    fn naisargika_order() {
        assert_eq!(naisargika_bala(Graha::Surya), 2.0);
        assert_eq!(naisargika_bala(Graha::Shani), 0.25);
        assert_eq!(naisargika_by_name("Venus"), 1.25);
        assert_eq!(naisargika_by_name("Vulcan"), NEUTRAL_BALA);
    }

    #[test]
    fn drik_categories() {
        assert_eq!(drik_bala(Bhava::new(10)), 1.0);
        assert_eq!(drik_bala(Bhava::new(9)), 0.75);
        assert_eq!(drik_bala(Bhava::new(5)), 0.75);
        assert_eq!(drik_bala(Bhava::new(11)), 0.5);
    }

    // --- Complete ---

    #[test]
    fn total_is_mean_of_components() {
        let inp = inputs(
            0,
            [0, 3, 9, 5, 3, 11, 6, 2, 8],
            [1.0, 13.0, -0.2, 1.1, 0.1, 1.2, 0.05, -0.05, -0.05],
        );
        for g in ALL_GRAHAS.iter().take(7) {
            let sb = shadbala(*g, &inp).unwrap();
            let mean: f64 = sb.components().iter().sum::<f64>() / 6.0;
            assert!((sb.total - mean).abs() < EPS, "{g}");
        }
    }

    #[test]
    fn sun_fixture() {
        // Asc Mesha, Sun in Mesha (house 1, exalted), direct, daytime
        let inp = inputs(0, [0, 1, 2, 3, 4, 5, 6, 7, 1], [1.0; 9]);
        let sb = shadbala(Graha::Surya, &inp).unwrap();
        assert!((sb.sthana - 1.5).abs() < EPS);
        assert!((sb.dig - 1.0).abs() < EPS);
        assert!((sb.kala - 0.8).abs() < EPS);
        assert!((sb.cheshta - 0.5).abs() < EPS);
        assert!((sb.naisargika - 2.0).abs() < EPS);
        assert!((sb.drik - 1.0).abs() < EPS);
        // (1.5 + 1 + 0.8 + 0.5 + 2 + 1) / 6 = 1.1333...
        assert!((sb.total - 6.8 / 6.0).abs() < EPS);
        let gs = graha_strength(Graha::Surya, &inp);
        assert_eq!(gs.strength, 11.33);
        let gs = graha_strength_with_precision(Graha::Surya, &inp, 1);
        assert_eq!(gs.strength, 11.3);
        assert_eq!(gs.dignity, Dignity::Exalted);
    }

    #[test]
    fn nodes_fixed_strength() {
        let inp = inputs(0, [0; 9], [0.0; 9]);
        for g in [Graha::Rahu, Graha::Ketu] {
            assert!(shadbala(g, &inp).is_none());
            let gs = graha_strength(g, &inp);
            assert_eq!(gs.strength, NODE_STRENGTH);
            assert_eq!(gs.dignity, Dignity::Neutral);
        }
    }

    #[test]
    fn all_strengths_indexed_by_graha() {
        let inp = inputs(4, [4, 5, 6, 7, 8, 9, 10, 11, 5], [0.5; 9]);
        let all = all_graha_strengths(&inp, DEFAULT_STRENGTH_PRECISION);
        for (i, gs) in all.iter().enumerate() {
            assert_eq!(gs.graha.index() as usize, i);
        }
    }

    // --- Assessment ---

    #[test]
    fn grades() {
        assert_eq!(StrengthGrade::from_total(0.7), StrengthGrade::Strong);
        assert_eq!(StrengthGrade::from_total(0.69), StrengthGrade::Moderate);
        assert_eq!(StrengthGrade::from_total(0.5), StrengthGrade::Moderate);
        assert_eq!(StrengthGrade::from_total(0.49), StrengthGrade::Weak);
    }

    #[test]
    fn assessment_passes() {
        // Saturn debilitated in Mesha, house 12, direct, night
        let inp = inputs(1, [6, 0, 0, 0, 0, 0, 0, 0, 6], [1.0; 9]);
        let sb = shadbala(Graha::Shani, &inp).unwrap();
        let a = assess(&sb);
        // sthana 0.25, dig 0.5, kala 0.7, cheshta 0.5, naisargika 0.25, drik 0.5
        assert_eq!(a.passes, [false, true, true, true, false, true]);
        assert_eq!(a.grade, StrengthGrade::Weak);
        assert_eq!(a.score, 4.5);
    }
}
