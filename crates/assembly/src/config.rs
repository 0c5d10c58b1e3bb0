//! Tunable constants for the assembly animation.
//!
//! The named constants are the reference behaviour; `AssemblyConfig` carries
//! them as a resource so a JSON override can replace any of them without
//! touching the controller.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Width of each part's personal animation slice in global progress space.
pub const ASSEMBLY_WINDOW: f32 = 0.6;

/// Fraction of the scrollable distance after which the assembly is complete.
/// The remaining tail of the page scrolls over a settled scene.
pub const COMPLETION_FRACTION: f32 = 0.85;

/// Peak tilt (radians) of the wobble applied around X and Z while falling.
pub const WOBBLE_AMPLITUDE: f32 = 0.1;

/// Wobble frequency around X, in multiples of π per unit local progress.
pub const WOBBLE_FREQUENCY_X: f32 = 4.0;

/// Wobble frequency around Z, in multiples of π per unit local progress.
pub const WOBBLE_FREQUENCY_Z: f32 = 3.0;

/// Half-turns of spin per unit `rotation_speed` at the start of the descent.
pub const SPIN_TURNS: f32 = 1.0;

/// Seed used when neither the environment nor the page supplies one.
pub const DEFAULT_SEED: u64 = 42;

/// Lowest spawn height used by the scene layout.
pub const START_HEIGHT_BASE: f32 = 50.0;

// =============================================================================
// Errors
// =============================================================================

/// Why a configuration override was rejected.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidWindow(f32),
    InvalidCompletionFraction(f32),
    InvalidWobble(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::InvalidWindow(v) => {
                write!(f, "window must be finite and > 0 (got {v})")
            }
            ConfigError::InvalidCompletionFraction(v) => {
                write!(f, "completion_fraction must be in (0, 1] (got {v})")
            }
            ConfigError::InvalidWobble(v) => {
                write!(f, "wobble_amplitude must be finite and >= 0 (got {v})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// =============================================================================
// AssemblyConfig resource
// =============================================================================

/// Animation parameters read by the scroll mapper and the controller.
///
/// Missing JSON fields fall back to the reference constants.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Width of a part's animation slice in progress space. Must be > 0.
    pub window: f32,
    /// Scroll fraction at which global progress reaches 1.
    pub completion_fraction: f32,
    pub wobble_amplitude: f32,
    pub wobble_frequency_x: f32,
    pub wobble_frequency_z: f32,
    pub spin_turns: f32,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            window: ASSEMBLY_WINDOW,
            completion_fraction: COMPLETION_FRACTION,
            wobble_amplitude: WOBBLE_AMPLITUDE,
            wobble_frequency_x: WOBBLE_FREQUENCY_X,
            wobble_frequency_z: WOBBLE_FREQUENCY_Z,
            spin_turns: SPIN_TURNS,
        }
    }
}

impl AssemblyConfig {
    /// Parse and validate a JSON override.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AssemblyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON override from disk.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.window.is_finite() || self.window <= 0.0 {
            return Err(ConfigError::InvalidWindow(self.window));
        }
        if !self.completion_fraction.is_finite()
            || self.completion_fraction <= 0.0
            || self.completion_fraction > 1.0
        {
            return Err(ConfigError::InvalidCompletionFraction(
                self.completion_fraction,
            ));
        }
        if !self.wobble_amplitude.is_finite() || self.wobble_amplitude < 0.0 {
            return Err(ConfigError::InvalidWobble(self.wobble_amplitude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_constants() {
        let config = AssemblyConfig::default();
        assert_eq!(config.window, 0.6);
        assert_eq!(config.completion_fraction, 0.85);
        assert_eq!(config.wobble_amplitude, 0.1);
        assert_eq!(config.wobble_frequency_x, 4.0);
        assert_eq!(config.wobble_frequency_z, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AssemblyConfig::from_json(r#"{ "window": 0.5 }"#).expect("valid json");
        assert_eq!(config.window, 0.5);
        assert_eq!(config.completion_fraction, COMPLETION_FRACTION);
        assert_eq!(config.spin_turns, SPIN_TURNS);
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = AssemblyConfig::from_json(r#"{ "window": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindow(_)));
    }

    #[test]
    fn test_completion_fraction_bounds() {
        assert!(matches!(
            AssemblyConfig::from_json(r#"{ "completion_fraction": 1.5 }"#),
            Err(ConfigError::InvalidCompletionFraction(_))
        ));
        assert!(matches!(
            AssemblyConfig::from_json(r#"{ "completion_fraction": 0.0 }"#),
            Err(ConfigError::InvalidCompletionFraction(_))
        ));
        assert!(AssemblyConfig::from_json(r#"{ "completion_fraction": 1.0 }"#).is_ok());
    }

    #[test]
    fn test_negative_wobble_rejected() {
        assert!(matches!(
            AssemblyConfig::from_json(r#"{ "wobble_amplitude": -0.1 }"#),
            Err(ConfigError::InvalidWobble(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = AssemblyConfig::from_json("{ window: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AssemblyConfig::load_from_path(Path::new("/nonexistent/maketa.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
