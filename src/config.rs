use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{AUTO_MATCH_LIMIT, DEFAULT_MIN_SCORE, MAX_SCORE};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    #[serde(default = "default_auto_match_limit")]
    pub auto_match_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            auto_match_limit: default_auto_match_limit(),
        }
    }
}

fn default_min_score() -> u32 { DEFAULT_MIN_SCORE }
fn default_auto_match_limit() -> usize { AUTO_MATCH_LIMIT }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_position_exact")]
    pub position_exact: u32,
    #[serde(default = "default_position_partial")]
    pub position_partial: u32,
    #[serde(default = "default_experience_exact")]
    pub experience_exact: u32,
    #[serde(default = "default_experience_partial")]
    pub experience_partial: u32,
    #[serde(default = "default_cuisine_exact")]
    pub cuisine_exact: u32,
    #[serde(default = "default_cuisine_partial")]
    pub cuisine_partial: u32,
    #[serde(default = "default_locality")]
    pub locality: u32,
    #[serde(default = "default_completeness_bonus")]
    pub completeness_bonus: u32,
    #[serde(default = "default_completeness_bonus_threshold")]
    pub completeness_bonus_threshold: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            position_exact: default_position_exact(),
            position_partial: default_position_partial(),
            experience_exact: default_experience_exact(),
            experience_partial: default_experience_partial(),
            cuisine_exact: default_cuisine_exact(),
            cuisine_partial: default_cuisine_partial(),
            locality: default_locality(),
            completeness_bonus: default_completeness_bonus(),
            completeness_bonus_threshold: default_completeness_bonus_threshold(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            position_weight_exact: config.position_exact,
            position_weight_partial: config.position_partial,
            experience_weight_exact: config.experience_exact,
            experience_weight_partial: config.experience_partial,
            cuisine_weight_exact: config.cuisine_exact,
            cuisine_weight_partial: config.cuisine_partial,
            locality_weight: config.locality,
            completeness_bonus: config.completeness_bonus,
            completeness_bonus_threshold: config.completeness_bonus_threshold,
        }
    }
}

fn default_position_exact() -> u32 { 40 }
fn default_position_partial() -> u32 { 25 }
fn default_experience_exact() -> u32 { 25 }
fn default_experience_partial() -> u32 { 15 }
fn default_cuisine_exact() -> u32 { 20 }
fn default_cuisine_partial() -> u32 { 10 }
fn default_locality() -> u32 { 10 }
fn default_completeness_bonus() -> u32 { 5 }
fn default_completeness_bonus_threshold() -> u32 { 70 }

/// Caller-side memoization of ranked results
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_enabled() -> bool { true }
fn default_cache_capacity() -> u64 { 1000 }
fn default_cache_ttl() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with KITCHEN_)
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., KITCHEN__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("KITCHEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("KITCHEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Deserialize a built config and check value ranges
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.matching.min_score > MAX_SCORE {
            return Err(ConfigError::Message(format!(
                "matching.min_score must be at most {}, got {}",
                MAX_SCORE, self.matching.min_score
            )));
        }
        Ok(())
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}
