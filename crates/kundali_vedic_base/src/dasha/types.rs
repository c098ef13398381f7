//! Core types for dasha periods.

use serde::Serialize;

use crate::graha::Graha;

/// Year length used to turn period years into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Period depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    /// JD, start of the period.
    pub start_jd: f64,
    /// JD, end of the period; the next sibling starts here.
    pub end_jd: f64,
    /// Length in years (`DAYS_PER_YEAR` days each).
    pub years: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Inclusive at both ends.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd <= self.end_jd
    }
}
