use std::time::Duration;

use kinematics_core::{DEFAULT_MAX_POINTS, Series};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings that stay fixed for the lifetime of a [`Session`](crate::Session).
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```
/// use kinematics_session::SessionConfig;
///
/// let config = SessionConfig::from_toml_str(r#"
///     max_points = 500
///     drag_series = ["velocity"]
/// "#).unwrap();
///
/// assert_eq!(config.max_points, 500);
/// assert_eq!(config.debounce_ms, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Cap on generated samples, used when the form leaves it blank.
    pub max_points: usize,
    /// Quiet period after the last keystroke before a live recompute.
    pub debounce_ms: u64,
    /// Series whose points may be dragged.
    pub drag_series: Vec<Series>,
}

/// Errors that can occur when loading a [`SessionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file")]
    Parse(#[from] toml::de::Error),

    #[error("max_points must be at least one")]
    ZeroMaxPoints,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            debounce_ms: 300,
            drag_series: Series::ALL.to_vec(),
        }
    }
}

impl SessionConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// [`ConfigError::ZeroMaxPoints`] if `max_points` is zero.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config for values a session cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxPoints`] if `max_points` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_points == 0 {
            return Err(ConfigError::ZeroMaxPoints);
        }
        Ok(())
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
