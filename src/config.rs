use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON array of fragrance records; the built-in sample is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
    #[serde(default = "default_dupes_budget")]
    pub dupes_default_budget: u32,
    #[serde(default = "default_top_n")]
    pub dupes_default_n: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            dupes_default_budget: default_dupes_budget(),
            dupes_default_n: default_top_n(),
        }
    }
}

impl RankingSettings {
    /// Resolve a caller-supplied top-N against the default and the cap
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.top_n).min(self.max_top_n)
    }
}

fn default_top_n() -> usize { 3 }
fn default_max_top_n() -> usize { 20 }
fn default_dupes_budget() -> u32 { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_context_weight")]
    pub context: f64,
    #[serde(default = "default_season_weight")]
    pub season: f64,
    #[serde(default = "default_projection_weight")]
    pub projection: f64,
    #[serde(default = "default_longevity_weight")]
    pub longevity: f64,
    #[serde(default = "default_style_weight")]
    pub style: f64,
    #[serde(default = "default_over_budget_weight")]
    pub over_budget: f64,
    #[serde(default = "default_value_bonus_weight")]
    pub value_bonus: f64,
    #[serde(default = "default_value_ratio")]
    pub value_ratio: f64,
    #[serde(default = "default_allergen_weight")]
    pub allergen: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            context: default_context_weight(),
            season: default_season_weight(),
            projection: default_projection_weight(),
            longevity: default_longevity_weight(),
            style: default_style_weight(),
            over_budget: default_over_budget_weight(),
            value_bonus: default_value_bonus_weight(),
            value_ratio: default_value_ratio(),
            allergen: default_allergen_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            context: config.context,
            season: config.season,
            projection: config.projection,
            longevity: config.longevity,
            style: config.style,
            over_budget: config.over_budget,
            value_bonus: config.value_bonus,
            value_ratio: config.value_ratio,
            allergen: config.allergen,
        }
    }
}

fn default_context_weight() -> f64 { 2.0 }
fn default_season_weight() -> f64 { 1.5 }
fn default_projection_weight() -> f64 { 1.0 }
fn default_longevity_weight() -> f64 { 1.0 }
fn default_style_weight() -> f64 { 1.5 }
fn default_over_budget_weight() -> f64 { -2.0 }
fn default_value_bonus_weight() -> f64 { 0.5 }
fn default_value_ratio() -> f64 { 0.7 }
fn default_allergen_weight() -> f64 { -5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Empty list means any origin is accepted
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

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
    /// 4. Environment variables (prefixed with SCENT_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SCENT__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SCENT")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights_match_scoring_defaults() {
        let weights = ScoringWeights::from(&WeightsConfig::default());
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_clamp_limit() {
        let ranking = RankingSettings::default();
        assert_eq!(ranking.clamp_limit(None), 3);
        assert_eq!(ranking.clamp_limit(Some(7)), 7);
        assert_eq!(ranking.clamp_limit(Some(500)), 20);
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[scoring.weights]\nallergen = -10.0\n\n[ranking]\nmax_top_n = 5"
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.weights.allergen, -10.0);
        assert_eq!(settings.scoring.weights.context, 2.0);
        assert_eq!(settings.ranking.max_top_n, 5);
        assert!(settings.catalog.path.is_none());
    }
}
