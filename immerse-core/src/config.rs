//! Configuration for the immerse world engine.
//!
//! Maps directly to `immerse.toml`. Every field has a serde default, so a
//! partial file (or an empty one) loads, and the defaults reproduce the
//! engine's fixed policies exactly.
//!
//! The configuration is always passed explicitly to the functions that need
//! it. There is no process-wide registry.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImmerseConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// World construction policies.
    #[serde(default)]
    pub world: WorldConfig,
    /// Mood dynamics tuning.
    #[serde(default)]
    pub mood: MoodConfig,
    /// Session driver settings.
    #[serde(default)]
    pub session: SessionConfig,
}

impl ImmerseConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `WorldError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::WorldError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format: "text" for human-readable lines, "json" for one
    /// JSON object per event.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl GeneralConfig {
    /// Whether `log_format` asks for JSON output.
    #[must_use]
    pub fn wants_json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

/// Policies applied when a world is built from an environment description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Location id the learner starts in when the world has one.
    #[serde(default = "default_start_location")]
    pub preferred_start_location: String,
    /// Day length used when the environment supplies no time system.
    #[serde(default = "default_day_length")]
    pub default_day_length_minutes: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            preferred_start_location: default_start_location(),
            default_day_length_minutes: default_day_length(),
        }
    }
}

/// Mood dynamics tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodConfig {
    /// Decay progress per elapsed turn; a mood resets once
    /// `turns × rate ≥ 1.0`.
    #[serde(default = "default_decay_rate")]
    pub decay_rate_per_turn: f64,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            decay_rate_per_turn: crate::mood::MOOD_DECAY_PER_TURN,
        }
    }
}

/// Session driver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How many previous snapshots a session keeps for undo.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Chance (0.0–1.0) that an inactive `random` ambient event fires on a roll.
    #[serde(default)]
    pub random_event_chance: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: 64,
            random_event_chance: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "text".to_string() }
fn default_start_location() -> String { "staff-break-room".to_string() }
fn default_day_length() -> u32 { 60 }
fn default_decay_rate() -> f64 { crate::mood::MOOD_DECAY_PER_TURN }
fn default_max_history() -> usize { 64 }
