//! Civil time to astronomical time conversion.
//!
//! This crate provides:
//! - Parsing of local `YYYY-MM-DD` / `HH:MM` input with a fixed UTC offset
//! - Julian Day ↔ Gregorian calendar conversions
//! - Greenwich and local mean sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    CivilDateTime, MAX_UTC_OFFSET_HOURS, jd_to_naive_utc, naive_utc_to_jd, parse_date, parse_time,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
