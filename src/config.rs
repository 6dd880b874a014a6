use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ai: AiSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct AiSettings {
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// Completion credential; None routes every request to the
    /// rule-based fallback without attempting network I/O
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_ai_model")]
    pub model: String,
    #[serde(default = "default_ai_temperature")]
    pub temperature: f64,
    #[serde(default = "default_ai_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_ai_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            base_url: default_ai_base_url(),
            api_key: None,
            model: default_ai_model(),
            temperature: default_ai_temperature(),
            max_tokens: default_ai_max_tokens(),
            timeout_secs: default_ai_timeout_secs(),
        }
    }
}

fn default_ai_base_url() -> String { "https://api.openai.com".to_string() }
fn default_ai_model() -> String { "gpt-4o-mini".to_string() }
fn default_ai_temperature() -> f64 { 0.2 }
fn default_ai_max_tokens() -> u32 { 1024 }
fn default_ai_timeout_secs() -> u64 { 15 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_event_type_weight")]
    pub event_type: f64,
    #[serde(default = "default_guest_fit_weight")]
    pub guest_fit: f64,
    #[serde(default = "default_budget_fit_weight")]
    pub budget_fit: f64,
    #[serde(default = "default_package_weight")]
    pub package: f64,
    #[serde(default = "default_ambience_weight")]
    pub ambience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            event_type: default_event_type_weight(),
            guest_fit: default_guest_fit_weight(),
            budget_fit: default_budget_fit_weight(),
            package: default_package_weight(),
            ambience: default_ambience_weight(),
        }
    }
}

fn default_event_type_weight() -> f64 { 0.40 }
fn default_guest_fit_weight() -> f64 { 0.25 }
fn default_budget_fit_weight() -> f64 { 0.20 }
fn default_package_weight() -> f64 { 0.10 }
fn default_ambience_weight() -> f64 { 0.05 }

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
    /// 3. Environment variables (prefixed with EVENTA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with EVENTA_)
            // e.g., EVENTA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EVENTA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("EVENTA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Fold the credential in from the environment. OPENAI_API_KEY is the
/// conventional variable; EVENTA_AI__API_KEY takes precedence.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("EVENTA_AI__API_KEY")
        .or_else(|_| env::var("OPENAI_API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = api_key {
        builder = builder.set_override("ai.api_key", key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.event_type, 0.40);
        assert_eq!(weights.guest_fit, 0.25);
        assert_eq!(weights.budget_fit, 0.20);
        assert_eq!(weights.package, 0.10);
        assert_eq!(weights.ambience, 0.05);
    }

    #[test]
    fn test_default_ai_settings() {
        let ai = AiSettings::default();
        assert!(ai.api_key.is_none());
        assert_eq!(ai.timeout_secs, 15);
        assert!(ai.temperature < 0.5);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
