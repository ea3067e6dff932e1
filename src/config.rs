use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{HardFilter, Ranker};
use crate::models::{RankingError, WeightVector};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
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
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    /// Empty means any origin is accepted
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_pool_cap")]
    pub pool_cap: usize,
    #[serde(default = "default_true")]
    pub hard_filters: bool,
    #[serde(default = "default_apartment_max_hours")]
    pub apartment_max_hours: u32,
    #[serde(default = "default_low_time_max_hours")]
    pub low_time_max_hours: u32,
    #[serde(default = "default_hours_cap")]
    pub hours_cap: u32,
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            pool_cap: default_pool_cap(),
            hard_filters: true,
            apartment_max_hours: default_apartment_max_hours(),
            low_time_max_hours: default_low_time_max_hours(),
            hours_cap: default_hours_cap(),
            weights: WeightsConfig::default(),
        }
    }
}

impl RankingSettings {
    /// Build the ranker, rejecting invalid weights up front
    pub fn ranker(&self) -> Result<Ranker, RankingError> {
        let weights = WeightVector::new([
            self.weights.housing,
            self.weights.children,
            self.weights.energy,
            self.weights.lifestyle,
        ])?;

        let hard_filter = self.hard_filters.then_some(HardFilter {
            apartment_max_hours: self.apartment_max_hours,
            low_time_max_hours: self.low_time_max_hours,
        });

        Ok(Ranker::new(weights)
            .with_hours_cap(self.hours_cap)
            .with_hard_filter(hard_filter))
    }
}

fn default_limit() -> usize { 5 }
fn default_pool_cap() -> usize { 200 }
fn default_true() -> bool { true }
fn default_apartment_max_hours() -> u32 { 6 }
fn default_low_time_max_hours() -> u32 { 4 }
fn default_hours_cap() -> u32 { 40 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_housing_weight")]
    pub housing: f64,
    #[serde(default = "default_children_weight")]
    pub children: f64,
    #[serde(default = "default_energy_weight")]
    pub energy: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            housing: default_housing_weight(),
            children: default_children_weight(),
            energy: default_energy_weight(),
            lifestyle: default_lifestyle_weight(),
        }
    }
}

fn default_housing_weight() -> f64 { 1.0 }
fn default_children_weight() -> f64 { 3.5 }
fn default_energy_weight() -> f64 { 6.0 }
fn default_lifestyle_weight() -> f64 { 1.5 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PETMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PETMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PETMATCH")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

/// Conventional unprefixed variables win over file values
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("DATABASE_URL") {
        builder = builder.set_override("database.url", url)?;
    }
    if let Ok(secret) = env::var("JWT_SECRET") {
        builder = builder.set_override("auth.jwt_secret", secret)?;
    }

    builder.build()
}
