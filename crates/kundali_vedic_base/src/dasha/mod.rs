//! Vimshottari dasha (planetary period) calculations.
//!
//! Periods are computed on a Julian-day axis with fractional days; calendar
//! presentation belongs to the caller. Two levels are generated:
//! Mahadasha and Antardasha.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use query::find_active_period;
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_ORDER, VIMSHOTTARI_TOTAL_YEARS, antardashas, mahadashas, nakshatra_lord,
    vimshottari_years,
};
