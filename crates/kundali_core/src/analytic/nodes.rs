//! Delaunay arguments and the Moon's ascending node (Rahu).
//!
//! Mean node: fifth Delaunay argument Ω, IERS Conventions 2010 Table 5.2e.
//! True node: mean node plus the short-period terms of Meeus Ch. 47.

const AS2RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Delaunay fundamental arguments `[l, l', F, D, Ω]` in radians.
///
/// - `l`  = mean anomaly of the Moon
/// - `l'` = mean anomaly of the Sun
/// - `F`  = mean argument of latitude of the Moon
/// - `D`  = mean elongation of the Moon from the Sun
/// - `Ω`  = mean longitude of the Moon's ascending node
///
/// `t` = Julian centuries since J2000.0.
pub fn delaunay_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Mean ascending node, tropical degrees [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    delaunay_arguments(t)[4].to_degrees().rem_euclid(360.0)
}

// [nl, nl', nF, nD, nΩ, amplitude deg]
#[rustfmt::skip]
static NODE_TERMS: [[f64; 6]; 13] = [
    [ 0.0,  0.0,  0.0,  0.0,  1.0, -1.4979],
    [ 0.0,  0.0,  2.0, -2.0,  0.0,  0.1500],
    [ 0.0,  0.0,  2.0,  0.0,  0.0, -0.1226],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,  0.1176],
    [ 1.0,  0.0,  0.0,  0.0,  0.0, -0.0801],
    [ 0.0,  1.0,  0.0,  0.0,  0.0,  0.0056],
    [ 0.0,  0.0,  2.0,  0.0, -2.0, -0.0047],
    [ 1.0,  0.0,  2.0,  0.0,  0.0, -0.0043],
    [ 0.0,  0.0,  2.0, -2.0,  2.0,  0.0040],
    [ 0.0,  1.0,  0.0,  0.0, -1.0,  0.0037],
    [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.0030],
    [ 2.0,  0.0,  0.0,  0.0,  0.0, -0.0020],
    [ 0.0,  1.0,  2.0, -2.0,  0.0,  0.0015],
];

/// True ascending node, tropical degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    let args = delaunay_arguments(t);
    let correction: f64 = NODE_TERMS
        .iter()
        .map(|c| {
            let angle = c[0] * args[0] + c[1] * args[1] + c[2] * args[2] + c[3] * args[3]
                + c[4] * args[4];
            c[5] * angle.sin()
        })
        .sum();
    (args[4].to_degrees() + correction).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_node_at_j2000() {
        // Ω0 = 450160.398036" = 125.0445550 deg
        assert!((mean_node_deg(0.0) - 125.044_555).abs() < 1e-6);
    }

    #[test]
    fn mean_node_regresses() {
        let a = mean_node_deg(0.0);
        let b = mean_node_deg(1.0 / 36_525.0);
        let rate = (b - a + 540.0).rem_euclid(360.0) - 180.0;
        // ~ -0.0529 deg/day
        assert!((rate + 0.0529).abs() < 0.001, "rate = {rate}");
    }

    #[test]
    fn true_node_within_two_degrees_of_mean() {
        for k in -20..20 {
            let t = k as f64 * 0.05;
            let diff = (true_node_deg(t) - mean_node_deg(t) + 540.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 2.0, "t = {t}, diff = {diff}");
        }
    }
}
