use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub sessions: SessionSettings,
    #[serde(default)]
    pub app: AppSettings,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    #[serde(default = "default_idle_secs")]
    pub idle_secs: u64,
    /// Fixed seed for match draws; entropy-seeded when absent
    pub match_seed: Option<u64>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_secs: default_idle_secs(),
            match_seed: None,
        }
    }
}

fn default_max_sessions() -> u64 { 10_000 }
fn default_idle_secs() -> u64 { 1800 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    /// TOML document with the app configuration tree; built-in defaults when absent
    pub config_path: Option<PathBuf>,
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

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the file values
    pub fn overridden(&self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.unwrap_or_else(|| self.level.clone()),
            format: format.unwrap_or_else(|| self.format.clone()),
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.format == "pretty"
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

fn environment() -> Environment {
    // e.g., CINDER__SERVER__PORT -> server.port
    Environment::with_prefix("CINDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CINDER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}
