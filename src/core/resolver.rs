use crate::models::AppConfig;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Errors raised while loading a configuration document
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Business rules are not representable as JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One immutable view of the configuration
#[derive(Debug)]
struct Snapshot {
    config: Arc<AppConfig>,
    /// `businessRules` as a JSON tree for dotted-path lookups
    rules: Value,
}

impl Snapshot {
    fn build(config: AppConfig) -> Result<Self, ConfigLoadError> {
        let rules = serde_json::to_value(&config.business_rules)?;
        Ok(Self {
            config: Arc::new(config),
            rules,
        })
    }
}

/// Read accessors over the app configuration tree
///
/// Lookups never fail: unknown flags are disabled, unknown copy keys echo
/// the key back, unknown rule paths resolve to `None`. The whole tree is
/// swapped at once by [`ConfigResolver::replace`]; readers that already
/// hold a snapshot keep seeing it unchanged.
#[derive(Debug)]
pub struct ConfigResolver {
    current: RwLock<Arc<Snapshot>>,
}

impl ConfigResolver {
    pub fn new(config: AppConfig) -> Result<Self, ConfigLoadError> {
        Ok(Self {
            current: RwLock::new(Arc::new(Snapshot::build(config)?)),
        })
    }

    /// Resolver over the built-in demo configuration
    pub fn with_defaults() -> Self {
        let config = AppConfig::default();
        let rules = serde_json::to_value(&config.business_rules).unwrap_or(Value::Null);
        Self {
            current: RwLock::new(Arc::new(Snapshot {
                config: Arc::new(config),
                rules,
            })),
        }
    }

    /// Parse a TOML document holding (part of) the configuration tree
    pub fn from_toml_str(doc: &str) -> Result<Self, ConfigLoadError> {
        let config: AppConfig = toml::from_str(doc)?;
        Self::new(config)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let doc = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&doc)
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        // A poisoned lock still holds a complete snapshot; writers only swap the Arc.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Current configuration snapshot
    pub fn get_config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.snapshot().config)
    }

    /// Replace the whole tree
    pub fn replace(&self, config: AppConfig) -> Result<(), ConfigLoadError> {
        let next = Arc::new(Snapshot::build(config)?);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
        tracing::info!("Configuration snapshot replaced");
        Ok(())
    }

    pub fn is_feature_enabled(&self, name: &str) -> bool {
        self.snapshot()
            .config
            .feature_flags
            .get(name)
            .map(|flag| flag.enabled)
            .unwrap_or(false)
    }

    /// Localized text for `key`, or `key` itself when the locale or key is unknown
    pub fn get_copy(&self, key: &str, locale: &str) -> String {
        self.snapshot()
            .config
            .copy
            .get(locale)
            .and_then(|table| table.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Walk `businessRules` by a `.`-delimited path
    ///
    /// Numeric segments index into arrays, so `monetization.tiers.0.name`
    /// resolves to the first tier's name.
    pub fn get_business_rule(&self, path: &str) -> Option<Value> {
        let snapshot = self.snapshot();
        let mut node = &snapshot.rules;

        for segment in path.split('.') {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(node.clone())
    }

    /// Daily swipe allowance of the free tier
    pub fn swipe_limit(&self) -> u32 {
        self.snapshot().config.business_rules.free_tier.swipe_limit_per_day
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}
