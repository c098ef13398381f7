//! Birth input: local date/time, location and UTC offset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kundali_time::CivilDateTime;

use crate::error::ChartError;

/// Raw birth details as supplied by a caller.
///
/// `timezone` is the UTC offset in hours (east positive), not a zone name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// `YYYY-MM-DD`, local.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`, local 24-hour clock.
    pub time: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    pub timezone: f64,
}

impl BirthInput {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: f64,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            latitude,
            longitude,
            timezone,
        }
    }

    /// Same place and offset at another local date and time.
    pub fn at(&self, date: NaiveDate, time: &str) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            time: time.to_string(),
            ..self.clone()
        }
    }

    /// Check coordinates, then parse date, time and offset.
    pub fn validate(&self) -> Result<CivilDateTime, ChartError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(CivilDateTime::parse(&self.date, &self.time, self.timezone)?)
    }

    /// Julian Day (UT) of the birth instant.
    pub fn jd_ut(&self) -> Result<f64, ChartError> {
        Ok(self.validate()?.to_jd_ut())
    }

    /// Local calendar date of birth.
    pub fn birth_date(&self) -> Result<NaiveDate, ChartError> {
        Ok(self.validate()?.date)
    }

    /// Hex BLAKE3 digest of the canonical JSON form (keys sorted).
    ///
    /// Equal inputs always give equal keys, so callers can memoize charts.
    pub fn cache_key(&self) -> String {
        let canonical = serde_json::json!({
            "date": self.date,
            "latitude": self.latitude,
            "longitude": self.longitude,
            "time": self.time,
            "timezone": self.timezone,
        });
        blake3::hash(canonical.to_string().as_bytes())
            .to_hex()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chennai() -> BirthInput {
        BirthInput::new("1977-10-29", "21:30", 13.0833, 80.2833, 5.5)
    }

    #[test]
    fn valid_input_parses() {
        let civil = chennai().validate().unwrap();
        assert_eq!(civil.date, NaiveDate::from_ymd_opt(1977, 10, 29).unwrap());
        assert!((civil.utc_offset_hours - 5.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_latitude() {
        let mut input = chennai();
        input.latitude = 91.0;
        assert!(matches!(input.validate(), Err(ChartError::InvalidInput(_))));
        input.latitude = f64::NAN;
        assert!(matches!(input.validate(), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn rejects_bad_longitude() {
        let mut input = chennai();
        input.longitude = -180.5;
        assert!(matches!(input.validate(), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn rejects_bad_time_and_offset() {
        let mut input = chennai();
        input.time = "25:00".into();
        assert!(matches!(input.validate(), Err(ChartError::InvalidInput(_))));
        let mut input = chennai();
        input.timezone = 15.0;
        assert!(matches!(input.validate(), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn cache_key_is_stable() {
        let a = chennai();
        let b = chennai();
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key().len(), 64);
    }

    #[test]
    fn cache_key_tracks_every_field() {
        let base = chennai().cache_key();
        let mut moved = chennai();
        moved.longitude += 0.001;
        assert_ne!(moved.cache_key(), base);
        let mut shifted = chennai();
        shifted.timezone = 5.0;
        assert_ne!(shifted.cache_key(), base);
    }

    #[test]
    fn at_keeps_location() {
        let noon = chennai().at(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), "12:00");
        assert_eq!(noon.date, "2024-01-15");
        assert_eq!(noon.time, "12:00");
        assert_eq!(noon.latitude, 13.0833);
        assert_eq!(noon.timezone, 5.5);
    }
}
