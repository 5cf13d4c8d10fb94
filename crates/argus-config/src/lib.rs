//! Shared configuration for the Argus board.
//!
//! TOML file + environment overlay (figment), translation to
//! `argus_core::DispatchConfig` / `argus_geo::GeocodeConfig`, and the
//! best-effort local UI preferences file ([`prefs`]).

pub mod prefs;

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use argus_core::{AlarmTone, DispatchConfig};
use argus_geo::GeocodeConfig;

pub use prefs::UiPrefs;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Operator name stamped onto call records.
    #[serde(default = "default_operator")]
    pub operator: String,

    #[serde(default)]
    pub feed: FeedSection,

    #[serde(default)]
    pub tone: ToneSection,

    #[serde(default)]
    pub geocoder: GeocoderSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operator: default_operator(),
            feed: FeedSection::default(),
            tone: ToneSection::default(),
            geocoder: GeocoderSection::default(),
        }
    }
}

fn default_operator() -> String {
    "Operator A. A.".into()
}

/// Synthetic feed tuning.
#[derive(Debug, Deserialize, Serialize)]
pub struct FeedSection {
    /// Seconds between synthetic alarms. 0 disables the generator.
    #[serde(default = "default_feed_interval")]
    pub interval_secs: u64,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            interval_secs: default_feed_interval(),
        }
    }
}

fn default_feed_interval() -> u64 {
    300
}

/// Audible-cue parameters.
#[derive(Debug, Deserialize, Serialize)]
pub struct ToneSection {
    #[serde(default = "default_tone_frequency")]
    pub frequency_hz: f32,
    #[serde(default = "default_tone_duration")]
    pub duration_secs: f32,
    #[serde(default = "default_tone_volume")]
    pub volume: f32,
}

impl Default for ToneSection {
    fn default() -> Self {
        Self {
            frequency_hz: default_tone_frequency(),
            duration_secs: default_tone_duration(),
            volume: default_tone_volume(),
        }
    }
}

fn default_tone_frequency() -> f32 {
    880.0
}
fn default_tone_duration() -> f32 {
    0.5
}
fn default_tone_volume() -> f32 {
    0.1
}

/// Reverse-geocoder endpoint settings.
#[derive(Debug, Deserialize, Serialize)]
pub struct GeocoderSection {
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
    #[serde(default = "default_geocoder_language")]
    pub language: String,
    #[serde(default = "default_geocoder_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeocoderSection {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            language: default_geocoder_language(),
            timeout_secs: default_geocoder_timeout(),
        }
    }
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".into()
}
fn default_geocoder_language() -> String {
    "hy".into()
}
fn default_geocoder_timeout() -> u64 {
    10
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "argus", "argus").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("argus");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a Config from an explicit file path + environment.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ARGUS_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to runtime configs ──────────────────────────────────

impl Config {
    /// Build the dispatcher's runtime config.
    pub fn to_dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            operator_name: self.operator.clone(),
            feed_interval_secs: self.feed.interval_secs,
            tone: AlarmTone {
                frequency_hz: self.tone.frequency_hz,
                duration_secs: self.tone.duration_secs,
                volume: self.tone.volume,
            },
            ..DispatchConfig::default()
        }
    }

    /// Build the geocoder client config, validating the endpoint URL.
    pub fn to_geocode_config(&self) -> Result<GeocodeConfig, ConfigError> {
        let base_url: url::Url =
            self.geocoder
                .base_url
                .parse()
                .map_err(|_| ConfigError::Validation {
                    field: "geocoder.base_url".into(),
                    reason: format!("invalid URL: {}", self.geocoder.base_url),
                })?;

        Ok(GeocodeConfig {
            base_url,
            language: self.geocoder.language.clone(),
            timeout: Duration::from_secs(self.geocoder.timeout_secs),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_round_trip_to_dispatch_config() {
        let cfg = Config::default();
        let dispatch = cfg.to_dispatch_config();
        assert_eq!(dispatch.operator_name, "Operator A. A.");
        assert_eq!(dispatch.feed_interval_secs, 300);
        assert!((dispatch.tone.frequency_hz - 880.0).abs() < f32::EPSILON);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "operator = \"Night Shift\"\n\n[feed]\ninterval_secs = 60\n\n[geocoder]\nlanguage = \"en\""
        )
        .unwrap();

        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.operator, "Night Shift");
        assert_eq!(cfg.feed.interval_secs, 60);
        assert_eq!(cfg.geocoder.language, "en");
        // Untouched sections keep their defaults.
        assert_eq!(cfg.geocoder.base_url, default_geocoder_url());
    }

    #[test]
    fn invalid_geocoder_url_is_a_validation_error() {
        let cfg = Config {
            geocoder: GeocoderSection {
                base_url: "not a url".into(),
                ..GeocoderSection::default()
            },
            ..Config::default()
        };
        let err = cfg.to_geocode_config().unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn valid_geocoder_config_carries_timeout() {
        let cfg = Config::default();
        let geo = cfg.to_geocode_config().unwrap();
        assert_eq!(geo.timeout, Duration::from_secs(10));
        assert_eq!(geo.language, "hy");
    }
}
