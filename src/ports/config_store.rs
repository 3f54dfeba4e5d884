use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    ReadError(String),

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub json_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_output: false,
        }
    }
}

impl AppConfig {
    /// Command line values win over whatever the store returned
    pub fn with_overrides(mut self, log_level: Option<&str>, json_output: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        self.json_output |= json_output;
        self
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    fn load_config(&self) -> ConfigResult<AppConfig>;
}

/// Load from the store and apply command line overrides on top.
pub fn resolve_config(
    store: &dyn ConfigStore,
    log_level: Option<&str>,
    json_output: bool,
) -> ConfigResult<AppConfig> {
    let config = store.load_config()?;
    Ok(config.with_overrides(log_level, json_output))
}

/// Same as `resolve_config`, but a failing store falls back to defaults.
///
/// The store error is handed back so it can be logged once tracing is up.
pub fn resolve_config_or_default(
    store: &dyn ConfigStore,
    log_level: Option<&str>,
    json_output: bool,
) -> (AppConfig, Option<ConfigError>) {
    match resolve_config(store, log_level, json_output) {
        Ok(config) => (config, None),
        Err(err) => (
            AppConfig::default().with_overrides(log_level, json_output),
            Some(err),
        ),
    }
}
