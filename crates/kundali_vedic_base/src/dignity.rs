//! Planetary dignity: exaltation, debilitation and own-sign tables.
//!
//! Dignity is judged by whole sign only (no exaltation degree or
//! moolatrikona span). Check order is exalted, debilitated, own sign,
//! then neutral, so Buddh in Kanya is exalted rather than own sign.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Four-level dignity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Exalted,
    #[serde(rename = "own")]
    OwnSign,
    Neutral,
    Debilitated,
}

impl Dignity {
    /// Lowercase label as used in chart output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::OwnSign => "own",
            Self::Neutral => "neutral",
            Self::Debilitated => "debilitated",
        }
    }
}

/// Sign of exaltation. None for the nodes.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sign of debilitation. None for the nodes.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Tula),
        Graha::Chandra => Some(Rashi::Vrischika),
        Graha::Mangal => Some(Rashi::Karka),
        Graha::Buddh => Some(Rashi::Meena),
        Graha::Guru => Some(Rashi::Makara),
        Graha::Shukra => Some(Rashi::Kanya),
        Graha::Shani => Some(Rashi::Mesha),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Signs owned by a graha. Empty for the nodes.
pub const fn own_rashis(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Exaltation sign plus own signs: where a graha is "comfortable".
pub fn favourable_rashis(graha: Graha) -> Vec<Rashi> {
    let mut signs: Vec<Rashi> = exaltation_rashi(graha).into_iter().collect();
    for r in own_rashis(graha) {
        if !signs.contains(r) {
            signs.push(*r);
        }
    }
    signs
}

/// Dignity of a graha placed in a rashi.
pub fn dignity_in_rashi(graha: Graha, rashi: Rashi) -> Dignity {
    if exaltation_rashi(graha) == Some(rashi) {
        Dignity::Exalted
    } else if debilitation_rashi(graha) == Some(rashi) {
        Dignity::Debilitated
    } else if own_rashis(graha).contains(&rashi) {
        Dignity::OwnSign
    } else {
        Dignity::Neutral
    }
}

/// Name-keyed dignity lookup. Unknown names are neutral.
pub fn dignity_by_name(graha_name: &str, rashi: Rashi) -> Dignity {
    match graha_name.parse::<Graha>() {
        Ok(g) => dignity_in_rashi(g, rashi),
        Err(e) => {
            tracing::warn!(error = %e, "dignity lookup fell back to neutral");
            Dignity::Neutral
        }
    }
}
