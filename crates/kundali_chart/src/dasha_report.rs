//! Vimshottari dasha report with calendar dates.
//!
//! Periods are chained in fractional Julian Days (365.25 days per year)
//! and converted to calendar dates only for output, so period boundaries
//! never drift. The birth anchor is 00:00 of the local birth date.
//!
//! The query date is always supplied by the caller; this module never
//! reads the system clock.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use kundali_core::{Body, Ephemeris};
use kundali_time::{jd_to_naive_utc, naive_utc_to_jd};
use kundali_vedic_base::{
    DashaPeriod, Graha, Nakshatra, antardashas, find_active_period, mahadashas,
    nakshatra_birth_balance,
};

use crate::error::ChartError;
use crate::input::BirthInput;
use crate::resolver::sample;

/// The Moon's nakshatra at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthNakshatra {
    pub index: u8,
    pub name: Nakshatra,
    pub lord: Graha,
    /// Fraction of the nakshatra traversed at birth.
    pub progress: f64,
    pub remaining: f64,
}

/// A dasha period with calendar endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatedPeriod {
    pub lord: Graha,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub years: f64,
}

impl DatedPeriod {
    pub fn from_period(p: &DashaPeriod) -> Result<Self, ChartError> {
        Ok(Self {
            lord: p.lord,
            start_date: jd_to_date(p.start_jd)?,
            end_date: jd_to_date(p.end_jd)?,
            years: p.years,
        })
    }
}

/// Full report: birth nakshatra, mahadashas and the current sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaReport {
    pub birth_nakshatra: BirthNakshatra,
    pub mahadasha_periods: Vec<DatedPeriod>,
    pub current_mahadasha: Option<DatedPeriod>,
    /// Empty when the query date lies outside every mahadasha.
    pub antardasha_periods: Vec<DatedPeriod>,
    pub current_antardasha: Option<DatedPeriod>,
}

fn jd_to_date(jd: f64) -> Result<NaiveDate, ChartError> {
    jd_to_naive_utc(jd)
        .map(|dt| dt.date())
        .ok_or_else(|| ChartError::InvalidInput(format!("JD {jd} has no calendar date")))
}

/// Julian Day of 00:00 on a calendar date.
pub fn date_to_jd(date: NaiveDate) -> f64 {
    naive_utc_to_jd(date.and_time(NaiveTime::MIN))
}

fn dated(periods: &[DashaPeriod]) -> Result<Vec<DatedPeriod>, ChartError> {
    periods.iter().map(DatedPeriod::from_period).collect()
}

/// Build the report from the Moon's sidereal longitude at birth.
pub fn dasha_report(
    moon_sidereal_lon: f64,
    birth_date: NaiveDate,
    query_date: NaiveDate,
) -> Result<DashaReport, ChartError> {
    let balance = nakshatra_birth_balance(moon_sidereal_lon);
    let birth_jd = date_to_jd(birth_date);
    let query_jd = date_to_jd(query_date);

    let mahas = mahadashas(moon_sidereal_lon, birth_jd);
    let current = find_active_period(&mahas, query_jd);
    let antars = current.map(antardashas).unwrap_or_default();
    let current_antar = find_active_period(&antars, query_jd);

    tracing::debug!(
        nakshatra = %balance.nakshatra,
        lord = %balance.lord,
        current = ?current.map(|p| p.lord),
        "dasha timeline"
    );

    Ok(DashaReport {
        birth_nakshatra: BirthNakshatra {
            index: balance.nakshatra_index,
            name: balance.nakshatra,
            lord: balance.lord,
            progress: balance.progress,
            remaining: balance.remaining,
        },
        mahadasha_periods: dated(&mahas)?,
        current_mahadasha: current.map(DatedPeriod::from_period).transpose()?,
        antardasha_periods: dated(&antars)?,
        current_antardasha: current_antar.map(DatedPeriod::from_period).transpose()?,
    })
}

/// Resolve the Moon at the birth instant, then build the report.
pub fn dasha_report_for_birth<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    input: &BirthInput,
    query_date: NaiveDate,
) -> Result<DashaReport, ChartError> {
    let civil = input.validate()?;
    let moon = sample(ephemeris, civil.to_jd_ut(), Body::Moon)?;
    dasha_report(moon.longitude, civil.date, query_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_vedic_base::NAKSHATRA_SPAN;

    const EPS: f64 = 1e-9;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_of_ashwini_runs_full_ketu() {
        let r = dasha_report(0.0, ymd(2000, 1, 1), ymd(2000, 1, 2)).unwrap();
        assert_eq!(r.birth_nakshatra.name, Nakshatra::Ashwini);
        assert_eq!(r.mahadasha_periods.len(), 9);
        assert_eq!(r.mahadasha_periods[0].lord, Graha::Ketu);
        assert!((r.mahadasha_periods[0].years - 7.0).abs() < EPS);
        let total: f64 = r.mahadasha_periods.iter().map(|p| p.years).sum();
        assert!((total - 120.0).abs() < EPS);
    }

    #[test]
    fn periods_chain_without_gaps() {
        let r = dasha_report(100.0, ymd(1977, 10, 29), ymd(2000, 1, 1)).unwrap();
        for w in r.mahadasha_periods.windows(2) {
            assert_eq!(w[0].end_date, w[1].start_date);
        }
        assert_eq!(r.mahadasha_periods[0].start_date, ymd(1977, 10, 29));
    }

    #[test]
    fn current_period_and_subperiods() {
        let r = dasha_report(0.0, ymd(2000, 1, 1), ymd(2003, 6, 1)).unwrap();
        let current = r.current_mahadasha.unwrap();
        assert_eq!(current.lord, Graha::Ketu);
        assert_eq!(r.antardasha_periods.len(), 9);
        assert_eq!(r.antardasha_periods[0].lord, Graha::Ketu);
        let sum: f64 = r.antardasha_periods.iter().map(|p| p.years).sum();
        assert!((sum - current.years).abs() < 0.01);
        assert!(r.current_antardasha.is_some());
    }

    #[test]
    fn query_before_birth_has_no_current() {
        let r = dasha_report(50.0, ymd(2000, 1, 1), ymd(1990, 1, 1)).unwrap();
        assert!(r.current_mahadasha.is_none());
        assert!(r.antardasha_periods.is_empty());
        assert!(r.current_antardasha.is_none());
    }

    #[test]
    fn half_way_balance() {
        let moon = 7.0 * NAKSHATRA_SPAN + 0.5 * NAKSHATRA_SPAN;
        let r = dasha_report(moon, ymd(2000, 1, 1), ymd(2000, 1, 1)).unwrap();
        assert_eq!(r.birth_nakshatra.name, Nakshatra::Pushya);
        assert_eq!(r.birth_nakshatra.lord, Graha::Shani);
        assert!((r.birth_nakshatra.remaining - 0.5).abs() < 1e-9);
        assert!((r.mahadasha_periods[0].years - 9.5).abs() < 1e-9);
    }

    #[test]
    fn date_jd_round_trip() {
        let jd = date_to_jd(ymd(2000, 1, 1));
        assert!((jd - 2_451_544.5).abs() < EPS);
        assert_eq!(jd_to_date(jd).unwrap(), ymd(2000, 1, 1));
    }
}
