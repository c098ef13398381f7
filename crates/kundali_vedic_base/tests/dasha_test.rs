//! Integration tests for Vimshottari periods on a Julian-day axis.

use kundali_vedic_base::{
    DAYS_PER_YEAR, Graha, NAKSHATRA_SPAN, antardashas, find_active_period, mahadashas,
    nakshatra_birth_balance,
};

const BIRTH_JD: f64 = 2_443_445.5;

#[test]
fn total_span_at_nakshatra_start_is_120_years() {
    let periods = mahadashas(4.0 * NAKSHATRA_SPAN, BIRTH_JD);
    let days = periods.last().unwrap().end_jd - BIRTH_JD;
    assert!((days - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
    assert_eq!(periods[0].lord, Graha::Mangal);
}

#[test]
fn balance_and_first_period_agree() {
    let moon = 100.0;
    let b = nakshatra_birth_balance(moon);
    let periods = mahadashas(moon, BIRTH_JD);
    assert_eq!(periods[0].lord, b.lord);
    // Pushya (index 7), Saturn 19 years, halfway through
    assert_eq!(b.nakshatra_index, 7);
    assert_eq!(b.lord, Graha::Shani);
    assert!((b.progress - 0.5).abs() < 1e-9);
    assert!((periods[0].years - 19.0 * b.remaining).abs() < 1e-9);
}

#[test]
fn current_period_and_subperiods() {
    let periods = mahadashas(100.0, BIRTH_JD);
    let query = BIRTH_JD + 30.0 * DAYS_PER_YEAR;
    let current = find_active_period(&periods, query).unwrap();
    assert!(current.start_jd <= query && query <= current.end_jd);

    let subs = antardashas(current);
    let sum: f64 = subs.iter().map(|s| s.years).sum();
    assert!((sum - current.years).abs() < 0.01);
    assert!(find_active_period(&subs, query).is_some());
}

#[test]
fn query_before_birth_has_no_period() {
    let periods = mahadashas(100.0, BIRTH_JD);
    assert!(find_active_period(&periods, BIRTH_JD - 1.0).is_none());
}
