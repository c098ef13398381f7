//! Civil local date/time with a fixed UTC offset.
//!
//! The offset is taken as given (no timezone database): local time minus
//! the offset is UTC, and UTC maps directly onto a Julian Day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::TimeError;
use crate::julian::UNIX_EPOCH_JD;

/// Largest accepted magnitude of a UTC offset, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A local calendar instant plus its offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Hours east of Greenwich; fractional offsets such as 5.5 are allowed.
    pub utc_offset_hours: f64,
}

impl CivilDateTime {
    /// Build from already-parsed parts, validating the offset.
    pub fn new(date: NaiveDate, time: NaiveTime, utc_offset_hours: f64) -> Result<Self, TimeError> {
        validate_offset(utc_offset_hours)?;
        Ok(Self {
            date,
            time,
            utc_offset_hours,
        })
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` (or `HH:MM:SS`) strings.
    pub fn parse(date: &str, time: &str, utc_offset_hours: f64) -> Result<Self, TimeError> {
        Self::new(parse_date(date)?, parse_time(time)?, utc_offset_hours)
    }

    /// Local wall-clock instant.
    pub fn local(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// The same instant expressed in UTC.
    pub fn utc(&self) -> NaiveDateTime {
        let offset_s = (self.utc_offset_hours * 3600.0).round() as i64;
        self.local() - TimeDelta::seconds(offset_s)
    }

    /// Julian Day (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        naive_utc_to_jd(self.utc())
    }
}

fn validate_offset(hours: f64) -> Result<(), TimeError> {
    if !hours.is_finite() || hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(TimeError::InvalidOffset(hours));
    }
    Ok(())
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse a 24-hour clock time, `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s_trim = s.trim();
    NaiveTime::parse_from_str(s_trim, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s_trim, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Julian Day of a UTC instant.
pub fn naive_utc_to_jd(utc: NaiveDateTime) -> f64 {
    utc.and_utc().timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// UTC instant of a Julian Day, rounded to the millisecond.
///
/// Returns `None` when the day lies outside chrono's representable range.
pub fn jd_to_naive_utc(jd: f64) -> Option<NaiveDateTime> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round() as i64;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::{J2000_JD, calendar_to_jd};

    #[test]
    fn offset_is_subtracted() {
        let c = CivilDateTime::parse("1977-10-29", "21:30", 5.5).unwrap();
        assert_eq!(c.utc().to_string(), "1977-10-29 16:00:00");
    }

    #[test]
    fn negative_offset_rolls_forward() {
        let c = CivilDateTime::parse("2020-12-31", "20:00", -5.0).unwrap();
        assert_eq!(c.utc().to_string(), "2021-01-01 01:00:00");
    }

    #[test]
    fn jd_matches_calendar_formula() {
        let c = CivilDateTime::parse("1977-10-29", "21:30", 5.5).unwrap();
        let expected = calendar_to_jd(1977, 10, 29.0 + 16.0 / 24.0);
        assert!((c.to_jd_ut() - expected).abs() < 1e-8);
    }

    #[test]
    fn j2000_noon_utc() {
        let c = CivilDateTime::parse("2000-01-01", "12:00", 0.0).unwrap();
        assert!((c.to_jd_ut() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn seconds_accepted() {
        let t = parse_time("06:15:30").unwrap();
        assert_eq!(t.to_string(), "06:15:30");
    }

    #[test]
    fn bad_date_rejected() {
        assert_eq!(
            parse_date("1977-13-01"),
            Err(TimeError::InvalidDate("1977-13-01".to_string()))
        );
        assert!(parse_date("29/10/1977").is_err());
    }

    #[test]
    fn bad_time_rejected() {
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn offset_bounds() {
        assert!(CivilDateTime::parse("2000-01-01", "00:00", 14.0).is_ok());
        assert_eq!(
            CivilDateTime::parse("2000-01-01", "00:00", 14.5),
            Err(TimeError::InvalidOffset(14.5))
        );
        assert!(CivilDateTime::parse("2000-01-01", "00:00", f64::NAN).is_err());
    }

    #[test]
    fn jd_to_naive_inverts() {
        let dt = jd_to_naive_utc(J2000_JD).unwrap();
        assert_eq!(dt.to_string(), "2000-01-01 12:00:00");
        assert!(jd_to_naive_utc(f64::INFINITY).is_none());
    }
}
