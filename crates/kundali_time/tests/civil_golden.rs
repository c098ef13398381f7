//! Golden values for civil → Julian Day conversion.

use kundali_time::{CivilDateTime, TimeError, calendar_to_jd, jd_to_calendar, jd_to_naive_utc};
use proptest::prelude::*;

#[test]
fn chennai_1977_birth() {
    // 21:30 IST = 16:00 UTC
    let c = CivilDateTime::parse("1977-10-29", "21:30", 5.5).unwrap();
    assert!((c.to_jd_ut() - 2_443_446.166_666_667).abs() < 1e-6);
}

#[test]
fn nepal_quarter_hour_offset() {
    let c = CivilDateTime::parse("2015-04-25", "11:56", 5.75).unwrap();
    assert_eq!(c.utc().to_string(), "2015-04-25 06:11:00");
}

#[test]
fn whitespace_tolerated() {
    let c = CivilDateTime::parse(" 2001-09-09 ", " 01:46 ", 0.0).unwrap();
    assert_eq!(c.local().to_string(), "2001-09-09 01:46:00");
}

#[test]
fn errors_carry_input() {
    let err = CivilDateTime::parse("2001-02-30", "10:00", 0.0).unwrap_err();
    assert_eq!(err, TimeError::InvalidDate("2001-02-30".to_string()));
    assert!(err.to_string().contains("2001-02-30"));

    let err = CivilDateTime::parse("2001-02-03", "10h", 0.0).unwrap_err();
    assert!(matches!(err, TimeError::InvalidTime(_)));
}

proptest! {
    #[test]
    fn offset_shifts_jd_linearly(
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        quarter_hours in -48i32..=48,
    ) {
        let offset = quarter_hours as f64 * 0.25;
        let time = format!("{hour:02}:{minute:02}");
        let date = format!("1990-06-{day:02}");
        let local = CivilDateTime::parse(&date, &time, 0.0).unwrap();
        let shifted = CivilDateTime::parse(&date, &time, offset).unwrap();
        prop_assert!((local.to_jd_ut() - shifted.to_jd_ut() - offset / 24.0).abs() < 1e-8);
    }

    #[test]
    fn calendar_roundtrip(jd in 2_378_496.5f64..2_524_593.5) {
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert!((calendar_to_jd(y, m, d) - jd).abs() < 1e-6);
        prop_assert!(jd_to_naive_utc(jd).is_some());
    }
}
