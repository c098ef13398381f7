//! Planetary position resolver: ephemeris samples to classified grahas.
//!
//! The seven classical grahas are queried individually. The node is
//! queried once (mean or true per configuration) and Ketu is placed
//! opposite Rahu with the same speed. Both nodes are always flagged
//! retrograde.

use serde::Serialize;

use kundali_core::{Body, EngineError, Ephemeris, EphemerisSample, NodeMode};
use kundali_vedic_base::{ALL_GRAHAS, Graha, Placement, SAPTA_GRAHAS, SignIndex, classify, normalize_360};

use crate::error::ChartError;

/// One graha's state at the chart instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedGraha {
    pub graha: Graha,
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    pub latitude: f64,
    pub distance_au: f64,
    /// Degrees/day.
    pub speed: f64,
    pub retrograde: bool,
    pub placement: Placement,
}

impl ResolvedGraha {
    fn sentinel() -> Self {
        Self::from_sample(
            Graha::Surya,
            &EphemerisSample {
                longitude: 0.0,
                latitude: 0.0,
                distance_au: 0.0,
                speed: 0.0,
            },
        )
    }

    fn from_sample(graha: Graha, sample: &EphemerisSample) -> Self {
        let placement = classify(sample.longitude);
        Self {
            graha,
            longitude: placement.longitude,
            latitude: sample.latitude,
            distance_au: sample.distance_au,
            speed: sample.speed,
            retrograde: graha.is_node() || sample.speed < 0.0,
            placement,
        }
    }

    pub fn sign_index(&self) -> SignIndex {
        SignIndex::new(self.placement.sign_index)
    }
}

/// All nine grahas, indexed by `Graha::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPositions {
    pub grahas: [ResolvedGraha; 9],
}

impl GrahaPositions {
    pub fn get(&self, graha: Graha) -> &ResolvedGraha {
        &self.grahas[graha.index() as usize]
    }

    pub fn signs(&self) -> [SignIndex; 9] {
        self.grahas.map(|g| g.sign_index())
    }

    pub fn speeds(&self) -> [f64; 9] {
        self.grahas.map(|g| g.speed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedGraha> {
        self.grahas.iter()
    }
}

/// Ephemeris body for a classical graha. `None` for the nodes.
pub const fn classical_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Query one body and reject non-finite samples.
pub fn sample<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    body: Body,
) -> Result<EphemerisSample, ChartError> {
    let s = ephemeris.position(jd_ut, body)?;
    if !s.is_finite() {
        return Err(ChartError::EphemerisFailure(EngineError::Unavailable(format!(
            "non-finite {body} sample at JD {jd_ut}"
        ))));
    }
    Ok(s)
}

/// Ketu from Rahu: opposite longitude and latitude, same distance and speed.
pub fn ketu_from_rahu(rahu: &EphemerisSample) -> EphemerisSample {
    EphemerisSample {
        longitude: normalize_360(rahu.longitude + 180.0),
        latitude: -rahu.latitude,
        distance_au: rahu.distance_au,
        speed: rahu.speed,
    }
}

/// Resolve and classify all nine grahas at a UT Julian Day.
pub fn resolve_positions<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    node_mode: NodeMode,
) -> Result<GrahaPositions, ChartError> {
    let mut grahas = [ResolvedGraha::sentinel(); 9];

    for graha in SAPTA_GRAHAS {
        let Some(body) = classical_body(graha) else {
            continue;
        };
        let s = sample(ephemeris, jd_ut, body)?;
        grahas[graha.index() as usize] = ResolvedGraha::from_sample(graha, &s);
    }

    let rahu = sample(ephemeris, jd_ut, node_mode.body())?;
    let ketu = ketu_from_rahu(&rahu);
    grahas[Graha::Rahu.index() as usize] = ResolvedGraha::from_sample(Graha::Rahu, &rahu);
    grahas[Graha::Ketu.index() as usize] = ResolvedGraha::from_sample(Graha::Ketu, &ketu);

    for g in ALL_GRAHAS {
        let r = &grahas[g.index() as usize];
        tracing::debug!(
            graha = %g,
            longitude = r.longitude,
            speed = r.speed,
            sign = %r.placement.sign,
            "resolved graha"
        );
    }
    Ok(GrahaPositions { grahas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_core::HouseCusps;

    const EPS: f64 = 1e-9;

    struct Fixed {
        node_lon: f64,
        bad_body: Option<Body>,
    }

    impl Ephemeris for Fixed {
        fn position(&self, _jd: f64, body: Body) -> Result<EphemerisSample, EngineError> {
            let longitude = match body {
                Body::MeanNode | Body::TrueNode => self.node_lon,
                _ => 10.0,
            };
            let speed = if Some(body) == self.bad_body { f64::NAN } else { 1.0 };
            let speed = if body.is_node() { -0.05 } else { speed };
            Ok(EphemerisSample {
                longitude,
                latitude: 1.0,
                distance_au: 1.0,
                speed,
            })
        }

        fn ayanamsa(&self, _jd: f64) -> Result<f64, EngineError> {
            Ok(24.0)
        }

        fn cusps(&self, _jd: f64, _lat: f64, _lon: f64) -> Result<HouseCusps, EngineError> {
            Err(EngineError::Unavailable("no cusps".into()))
        }
    }

    #[test]
    fn ketu_opposes_rahu() {
        let eph = Fixed { node_lon: 200.0, bad_body: None };
        let p = resolve_positions(&eph, 2_451_545.0, NodeMode::True).unwrap();
        let rahu = p.get(Graha::Rahu);
        let ketu = p.get(Graha::Ketu);
        assert!((ketu.longitude - 20.0).abs() < EPS);
        assert!((ketu.speed - rahu.speed).abs() < EPS);
        assert!(rahu.retrograde && ketu.retrograde);
    }

    #[test]
    fn ketu_wraps_below_360() {
        let eph = Fixed { node_lon: 350.0, bad_body: None };
        let p = resolve_positions(&eph, 2_451_545.0, NodeMode::Mean).unwrap();
        assert!((p.get(Graha::Ketu).longitude - 170.0).abs() < EPS);
    }

    #[test]
    fn direct_planets_not_retrograde() {
        let eph = Fixed { node_lon: 0.0, bad_body: None };
        let p = resolve_positions(&eph, 2_451_545.0, NodeMode::True).unwrap();
        for g in SAPTA_GRAHAS {
            assert!(!p.get(g).retrograde, "{g}");
            assert_eq!(p.get(g).graha, g);
        }
    }

    #[test]
    fn non_finite_sample_fails() {
        let eph = Fixed { node_lon: 0.0, bad_body: Some(Body::Mars) };
        let err = resolve_positions(&eph, 2_451_545.0, NodeMode::True).unwrap_err();
        assert!(matches!(err, ChartError::EphemerisFailure(EngineError::Unavailable(_))));
    }

    #[test]
    fn node_bodies_have_no_classical_body() {
        assert_eq!(classical_body(Graha::Rahu), None);
        assert_eq!(classical_body(Graha::Ketu), None);
        assert_eq!(classical_body(Graha::Buddh), Some(Body::Mercury));
    }
}
