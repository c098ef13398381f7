//! Pure-math Vedic chart primitives.
//!
//! This crate provides:
//! - Rashi, nakshatra and pada classification of sidereal longitudes
//! - Graha identities, sign lordship and dignity tables
//! - Whole-sign house assignment
//! - Proportional Shadbala strength scoring
//! - Yoga detection and graha drishti
//! - Vimshottari dasha periods
//!
//! Nothing here touches an ephemeris: callers supply sidereal longitudes
//! and speeds.

pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod yoga;
pub mod zodiac;

pub use bhava::{
    Bhava, DUSTHANA_BHAVAS, KENDRA_BHAVAS, SignIndex, TRIKONA_BHAVAS, all_bhavas, house_strength,
    whole_sign_houses,
};
pub use dasha::{
    BirthBalance, DAYS_PER_YEAR, DashaLevel, DashaPeriod, VIMSHOTTARI_ORDER,
    VIMSHOTTARI_TOTAL_YEARS, antardashas, find_active_period, mahadashas, nakshatra_birth_balance,
    nakshatra_lord, vimshottari_years,
};
pub use dignity::{
    Dignity, debilitation_rashi, dignity_by_name, dignity_in_rashi, exaltation_rashi,
    favourable_rashis, own_rashis,
};
pub use drishti::{
    GrahaDrishti, all_drishti, aspect_distances, aspect_distances_by_name, aspected_bhavas,
    aspects_bhava,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Gender, Mobility, Purpose, Rashi, RashiInfo, SignTraits,
    deg_to_dms, dms_to_deg, rashi_from_longitude, sign_traits,
};
pub use shadbala::{
    DEFAULT_STRENGTH_PRECISION, GrahaStrength, KalaBalaBreakdown, NODE_STRENGTH,
    ShadbalaAssessment, ShadbalaBreakdown, ShadbalaInputs, SthanaBalaBreakdown, StrengthGrade,
    all_graha_strengths, assess, cheshta_bala, dig_bala, drik_bala, graha_strength,
    graha_strength_with_precision, is_daytime, kala_bala, naisargika_bala, naisargika_by_name,
    shadbala, sthana_bala,
};
pub use util::{normalize_360, round_to};
pub use yoga::{Yoga, YogaInputs, detect_yogas, is_kuja_dosha, is_kuja_dosha_bhava};
pub use zodiac::{Placement, classify};
