//! Birth chart orchestration over an [`Ephemeris`](kundali_core::Ephemeris).
//!
//! This crate provides:
//! - [`BirthInput`] validation and cache-key derivation
//! - The planetary position resolver (classical grahas plus the lunar nodes)
//! - [`ChartBuilder`]: houses, Shadbala, drishti and yogas in one [`Chart`]
//! - Vimshottari dasha reports with calendar dates
//! - Transit analysis against a natal chart
//! - Two-chart compatibility scoring
//!
//! ```rust,ignore
//! let eph = AnalyticEphemeris::new(&config);
//! let chart = ChartBuilder::new(&eph, &config)
//!     .build(&BirthInput::new("1977-10-29", "21:30", 13.0833, 80.2833, 5.5))?;
//! println!("{}", serde_json::to_string_pretty(&chart)?);
//! ```

pub mod builder;
pub mod chart;
pub mod compatibility;
pub mod dasha_report;
pub mod error;
pub mod input;
pub mod resolver;
pub mod transit;

pub use builder::ChartBuilder;
pub use chart::{
    Ascendant, BirthInfo, Chart, ChartSummary, HouseRecord, PlanetRecord, kuja_dosha,
};
pub use compatibility::{
    Compatibility, CompatibilityGrade, CompatibilityReport, HouseMatch, MARRIAGE_HOUSES,
    MangalDoshaMatch, NakshatraMatch, PlanetaryMatch, analyze_compatibility,
    compatibility_report, house_score, nakshatra_score, nakshatras_compatible, planet_score,
};
pub use dasha_report::{
    BirthNakshatra, DashaReport, DatedPeriod, dasha_report, dasha_report_for_birth, date_to_jd,
};
pub use error::ChartError;
pub use input::BirthInput;
pub use resolver::{GrahaPositions, ResolvedGraha, classical_body, ketu_from_rahu, resolve_positions};
pub use transit::{
    PlanetTransit, TRANSIT_TIME, TransitEffects, TransitImpact, TransitReport, TransitStrength,
    TransitSummary, TransitSummaryEntry, analyze_transits, summarize_transits, transit_effects,
    transit_house, transit_report,
};
