//! Lunar position from mean elements plus the principal periodic terms.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed.), Chapter 47, truncated to the
//! largest terms of Tables 47.A and 47.B. Good to roughly 0.05 deg in
//! longitude. Result is referred to the mean equinox of date.

use super::nodes::delaunay_arguments;

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

// [D, M, M', F, coefficient]: longitude sin terms (1e-6 deg),
// distance cos terms (1e-3 km).
#[rustfmt::skip]
static LON_DIST_TERMS: [[f64; 6]; 16] = [
    // D     M     M'    F     Σl         Σr
    [ 0.0,  0.0,  1.0,  0.0, 6288774.0, -20905355.0],
    [ 2.0,  0.0, -1.0,  0.0, 1274027.0,  -3699111.0],
    [ 2.0,  0.0,  0.0,  0.0,  658314.0,  -2955968.0],
    [ 0.0,  0.0,  2.0,  0.0,  213618.0,   -569925.0],
    [ 0.0,  1.0,  0.0,  0.0, -185116.0,     48888.0],
    [ 0.0,  0.0,  0.0,  2.0, -114332.0,     -3149.0],
    [ 2.0,  0.0, -2.0,  0.0,   58793.0,    246158.0],
    [ 2.0, -1.0, -1.0,  0.0,   57066.0,   -152138.0],
    [ 2.0,  0.0,  1.0,  0.0,   53322.0,   -170733.0],
    [ 2.0, -1.0,  0.0,  0.0,   45758.0,   -204586.0],
    [ 0.0,  1.0, -1.0,  0.0,  -40923.0,   -129620.0],
    [ 1.0,  0.0,  0.0,  0.0,  -34720.0,    108743.0],
    [ 0.0,  1.0,  1.0,  0.0,  -30383.0,    104755.0],
    [ 2.0,  0.0,  0.0, -2.0,   15327.0,     10321.0],
    [ 0.0,  0.0,  1.0,  2.0,  -12528.0,         0.0],
    [ 0.0,  0.0,  1.0, -2.0,   10980.0,     79661.0],
];

// [D, M, M', F, coefficient]: latitude sin terms (1e-6 deg).
#[rustfmt::skip]
static LAT_TERMS: [[f64; 5]; 8] = [
    [ 0.0,  0.0,  0.0,  1.0, 5128122.0],
    [ 0.0,  0.0,  1.0,  1.0,  280602.0],
    [ 0.0,  0.0,  1.0, -1.0,  277693.0],
    [ 2.0,  0.0,  0.0, -1.0,  173237.0],
    [ 2.0,  0.0, -1.0,  1.0,   55413.0],
    [ 2.0,  0.0, -1.0, -1.0,   46271.0],
    [ 2.0,  0.0,  0.0,  1.0,   32573.0],
    [ 0.0,  0.0,  2.0,  1.0,   17198.0],
];

/// Moon's mean longitude L', degrees.
fn mean_longitude_deg(t: f64) -> f64 {
    218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t
}

/// Geocentric `(longitude deg, latitude deg, distance AU)`, mean equinox of date.
pub fn moon_ecliptic(t: f64) -> (f64, f64, f64) {
    let [mp, m, f, d, _] = delaunay_arguments(t);
    // Eccentricity of Earth's orbit damps terms containing M.
    let ecc = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for term in &LON_DIST_TERMS {
        let arg = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
        let damp = ecc.powi(term[1].abs() as i32);
        sum_l += term[4] * damp * arg.sin();
        sum_r += term[5] * damp * arg.cos();
    }

    let mut sum_b = 0.0;
    for term in &LAT_TERMS {
        let arg = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
        sum_b += term[4] * ecc.powi(term[1].abs() as i32) * arg.sin();
    }

    let lon = (mean_longitude_deg(t) + sum_l * 1e-6).rem_euclid(360.0);
    let lat = sum_b * 1e-6;
    let dist_km = 385_000.56 + sum_r * 1e-3;
    (lon, lat, dist_km / KM_PER_AU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_at_j2000() {
        // Apparent longitude ≈ 223.32 deg, latitude ≈ 5.17 deg
        let (lon, lat, dist) = moon_ecliptic(0.0);
        assert!((lon - 223.32).abs() < 0.1, "lon = {lon}");
        assert!((lat - 5.17).abs() < 0.1, "lat = {lat}");
        assert!((dist * KM_PER_AU - 402_000.0).abs() < 3_000.0);
    }

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12 0h TD: λ = 133.162655, β = -3.229126, Δ = 368409.7 km
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let (lon, lat, dist) = moon_ecliptic(t);
        assert!((lon - 133.16).abs() < 0.1, "lon = {lon}");
        assert!((lat + 3.23).abs() < 0.1, "lat = {lat}");
        assert!((dist * KM_PER_AU - 368_409.7).abs() < 1_000.0);
    }
}
