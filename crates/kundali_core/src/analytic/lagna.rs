//! Ascendant from sidereal time, latitude and obliquity.

use kundali_time::{gmst_deg, jd_to_centuries, local_sidereal_time_deg};

/// Mean obliquity of the ecliptic of date, degrees (IAU 2006, linear part).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_279_444 - 0.013_010_214 * t
}

/// Tropical ascendant of date, degrees [0, 360).
///
/// `lat` geographic latitude (north positive), `lon` east longitude.
/// `λ = atan2(cos θ, −(sin θ cos ε + tan φ sin ε))` with θ the local
/// sidereal time.
pub fn tropical_ascendant_deg(jd_ut: f64, lat: f64, lon: f64) -> f64 {
    let theta = local_sidereal_time_deg(gmst_deg(jd_ut), lon).to_radians();
    let eps = mean_obliquity_deg(jd_to_centuries(jd_ut)).to_radians();
    let phi = lat.to_radians();
    let y = theta.cos();
    let x = -(theta.sin() * eps.cos() + phi.tan() * eps.sin());
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::J2000_JD;

    #[test]
    fn equator_with_aries_culminating() {
        // LST 0 at the equator → ascendant 90 deg
        let gmst = gmst_deg(J2000_JD);
        let asc = tropical_ascendant_deg(J2000_JD, 0.0, -gmst);
        assert!((asc - 90.0).abs() < 1e-6, "asc = {asc}");
    }

    #[test]
    fn equator_with_cancer_culminating() {
        // LST 90 at the equator → ascendant 180 deg
        let gmst = gmst_deg(J2000_JD);
        let asc = tropical_ascendant_deg(J2000_JD, 0.0, 90.0 - gmst);
        assert!((asc - 180.0).abs() < 1e-6, "asc = {asc}");
    }

    #[test]
    fn ascendant_advances_through_the_day() {
        let mut prev = tropical_ascendant_deg(J2000_JD, 13.08, 80.28);
        let mut total = 0.0;
        for k in 1..=24 {
            let a = tropical_ascendant_deg(J2000_JD + k as f64 / 24.0, 13.08, 80.28);
            total += (a - prev).rem_euclid(360.0);
            prev = a;
        }
        // one full turn per sidereal day, slightly more per solar day
        assert!((total - 361.0).abs() < 1.0, "total = {total}");
    }
}
