//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! GMST polynomial from Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.
//! Input is a UT Julian Day; UT1−UTC (< 0.9 s) is ignored.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and east longitude, both in degrees.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000() {
        assert!((gmst_deg(J2000_JD) - 280.460_618_37).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_12a() {
        // 1987-04-10 0h UT → 13h10m46.3668s = 197.693195 deg
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-4, "gmst = {g}");
    }

    #[test]
    fn lst_wraps() {
        assert!((local_sidereal_time_deg(350.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((local_sidereal_time_deg(10.0, -20.0) - 350.0).abs() < 1e-12);
    }
}
