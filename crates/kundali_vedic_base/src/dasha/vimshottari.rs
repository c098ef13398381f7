//! Vimshottari: the 120-year nakshatra dasha cycle.

use crate::graha::Graha;

use super::balance::nakshatra_birth_balance;
use super::subperiod::proportional_children;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// Cycle order and full-period years.
pub const VIMSHOTTARI_ORDER: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

fn cycle_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full mahadasha length of a graha, in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_ORDER[cycle_position(graha)].1
}

/// Nakshatra lord: `VIMSHOTTARI_ORDER[index mod 9]`.
pub fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_ORDER[nakshatra_index as usize % 9].0
}

/// The cycle starting at `lord`.
fn cycle_from(lord: Graha) -> [(Graha, f64); 9] {
    let start = cycle_position(lord);
    std::array::from_fn(|i| VIMSHOTTARI_ORDER[(start + i) % 9])
}

/// Nine mahadashas from birth.
///
/// The first runs for the unelapsed share of its lord's years; the rest
/// run in full, each starting where the previous ended.
pub fn mahadashas(moon_sidereal_lon: f64, birth_jd: f64) -> Vec<DashaPeriod> {
    let balance = nakshatra_birth_balance(moon_sidereal_lon);
    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth_jd;

    for (i, (lord, full_years)) in cycle_from(balance.lord).into_iter().enumerate() {
        let years = if i == 0 { full_years * balance.remaining } else { full_years };
        let end = cursor + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            years,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
        });
        cursor = end;
    }
    periods
}

/// Nine antardashas of a mahadasha, starting from its own lord.
///
/// Sub-period years = `sub_lord_years * maha.years / 120`.
pub fn antardashas(maha: &DashaPeriod) -> Vec<DashaPeriod> {
    proportional_children(
        maha,
        &cycle_from(maha.lord),
        VIMSHOTTARI_TOTAL_YEARS,
        DashaLevel::Antardasha,
    )
}
