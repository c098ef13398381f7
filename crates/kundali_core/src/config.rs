//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! ayanamsha = "lahiri"
//! node_mode = "true"
//! strength_precision = 2
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Deserialize;

use crate::Body;
use crate::ayanamsha::AyanamshaSystem;

/// Mean or true (perturbed) lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    Mean,
    #[default]
    True,
}

impl NodeMode {
    /// Ephemeris body queried for Rahu.
    pub const fn body(self) -> Body {
        match self {
            Self::Mean => Body::MeanNode,
            Self::True => Body::TrueNode,
        }
    }
}

/// Largest accepted `strength_precision`.
pub const MAX_STRENGTH_PRECISION: u32 = 6;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    /// Decimal places of display strengths.
    pub strength_precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            node_mode: NodeMode::True,
            strength_precision: 2,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strength_precision > MAX_STRENGTH_PRECISION {
            return Err(ConfigError::Invalid(
                "strength_precision must be at most 6",
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config read error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}
