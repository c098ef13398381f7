//! Graha drishti (planetary aspects) by whole-sign house count.
//!
//! Every graha aspects the 7th house from itself. Mars, Jupiter and Saturn
//! carry special aspects; Rahu and Ketu are given Jupiter's set.
//!
//! Distances count the occupied house as 1, so a 7th aspect from house 1
//! falls on house 7.

use serde::Serialize;

use crate::bhava::Bhava;
use crate::graha::Graha;

/// House distances a graha aspects, counting its own house as 1.
pub const fn aspect_distances(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        Graha::Rahu | Graha::Ketu => &[5, 7, 9],
        Graha::Surya | Graha::Chandra | Graha::Buddh | Graha::Shukra => &[7],
    }
}

/// Aspect distances for a graha given by name.
///
/// Unknown names fall back to the universal 7th aspect only.
pub fn aspect_distances_by_name(graha_name: &str) -> &'static [u8] {
    match graha_name.parse::<Graha>() {
        Ok(g) => aspect_distances(g),
        Err(e) => {
            tracing::warn!(error = %e, "aspect lookup fell back to 7th only");
            &[7]
        }
    }
}

/// Houses aspected by a graha occupying `from`, ascending and deduplicated.
pub fn aspected_bhavas(graha: Graha, from: Bhava) -> Vec<Bhava> {
    let mut houses: Vec<Bhava> = aspect_distances(graha)
        .iter()
        .map(|&d| from.nth(d))
        .collect();
    houses.sort_unstable();
    houses.dedup();
    houses
}

/// Aspects cast by one graha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrahaDrishti {
    pub graha: Graha,
    pub from: Bhava,
    pub aspects: Vec<Bhava>,
}

/// Aspects of every graha given its house.
pub fn all_drishti(placements: impl IntoIterator<Item = (Graha, Bhava)>) -> Vec<GrahaDrishti> {
    placements
        .into_iter()
        .map(|(graha, from)| GrahaDrishti {
            graha,
            from,
            aspects: aspected_bhavas(graha, from),
        })
        .collect()
}

/// Does `graha` in `from` aspect house `target`?
pub fn aspects_bhava(graha: Graha, from: Bhava, target: Bhava) -> bool {
    aspect_distances(graha).iter().any(|&d| from.nth(d) == target)
}
