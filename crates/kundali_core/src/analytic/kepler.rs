//! Planetary positions from mean Keplerian elements.
//!
//! Elements and linear rates from Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL), Table 1, referred to
//! the J2000 ecliptic and equinox. Accuracy is a fraction of a degree for
//! the inner planets and about a degree for Saturn over 1800-2200.

use std::f64::consts::TAU;

/// `[a (AU), e, I (deg), L (deg), long. perihelion (deg), long. node (deg)]`
/// at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub base: [f64; 6],
    pub rate: [f64; 6],
}

#[rustfmt::skip]
pub const MERCURY: OrbitalElements = OrbitalElements {
    base: [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
    rate: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};

#[rustfmt::skip]
pub const VENUS: OrbitalElements = OrbitalElements {
    base: [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
    rate: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};

/// Earth-Moon barycentre.
#[rustfmt::skip]
pub const EARTH_MOON: OrbitalElements = OrbitalElements {
    base: [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    rate: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};

#[rustfmt::skip]
pub const MARS: OrbitalElements = OrbitalElements {
    base: [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
    rate: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};

#[rustfmt::skip]
pub const JUPITER: OrbitalElements = OrbitalElements {
    base: [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
    rate: [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
};

#[rustfmt::skip]
pub const SATURN: OrbitalElements = OrbitalElements {
    base: [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
    rate: [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.54179478, -0.28867794],
};

const KEPLER_MAX_ITER: usize = 30;
const KEPLER_TOL: f64 = 1e-12;

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration (radians).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ea = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ea - e * ea.sin() - mean_anomaly) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < KEPLER_TOL {
            break;
        }
    }
    ea
}

/// Heliocentric J2000 ecliptic position in AU, `t` in Julian centuries.
pub fn heliocentric_ecliptic(el: &OrbitalElements, t: f64) -> [f64; 3] {
    let [a, e, incl, l, peri, node] =
        std::array::from_fn::<f64, 6, _>(|i| el.base[i] + el.rate[i] * t);

    let omega = (peri - node).to_radians();
    let m = ((l - peri).to_radians()).rem_euclid(TAU);
    let incl = incl.to_radians();
    let node = node.to_radians();

    let ea = solve_kepler(m, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric J2000 ecliptic `(longitude deg, latitude deg, distance AU)`
/// of a planet, or of the Sun when `el` is `None`.
pub fn geocentric_ecliptic(el: Option<&OrbitalElements>, t: f64) -> (f64, f64, f64) {
    let earth = heliocentric_ecliptic(&EARTH_MOON, t);
    let planet = el.map_or([0.0; 3], |el| heliocentric_ecliptic(el, t));
    let x = planet[0] - earth[0];
    let y = planet[1] - earth[1];
    let z = planet[2] - earth[2];
    let lon = y.atan2(x).to_degrees().rem_euclid(360.0);
    let lat = z.atan2(x.hypot(y)).to_degrees();
    (lon, lat, (x * x + y * y + z * z).sqrt())
}
