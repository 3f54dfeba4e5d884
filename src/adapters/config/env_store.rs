use crate::ports::{AppConfig, ConfigError, ConfigResult, ConfigStore};
use std::env::VarError;

pub const LOG_LEVEL_VAR: &str = "USER_LIFECYCLE_LOG";
pub const JSON_OUTPUT_VAR: &str = "USER_LIFECYCLE_JSON";

type Lookup = Box<dyn Fn(&str) -> Result<String, VarError>>;

/// Reads configuration from process environment variables.
pub struct EnvConfigStore {
    lookup: Lookup,
}

impl EnvConfigStore {
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key))
    }

    pub fn with_lookup(lookup: impl Fn(&str) -> Result<String, VarError> + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        match (self.lookup)(key) {
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::ReadError(format!("{key}: {e}"))),
        }
    }
}

impl Default for EnvConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(key: &str, value: &str) -> ConfigResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::InvalidFormat(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

impl ConfigStore for EnvConfigStore {
    fn load_config(&self) -> ConfigResult<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(level) = self.get(LOG_LEVEL_VAR)?.filter(|l| !l.is_empty()) {
            config.log_level = level;
        }

        if let Some(flag) = self.get(JSON_OUTPUT_VAR)? {
            config.json_output = parse_flag(JSON_OUTPUT_VAR, &flag)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::resolve_config_or_default;
    use std::collections::HashMap;

    fn store_with(vars: &[(&str, &str)]) -> EnvConfigStore {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfigStore::with_lookup(move |key| vars.get(key).cloned().ok_or(VarError::NotPresent))
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = store_with(&[]).load_config().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_log_level_and_json_flag() {
        let config = store_with(&[(LOG_LEVEL_VAR, "debug"), (JSON_OUTPUT_VAR, "Yes")])
            .load_config()
            .unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.json_output);
    }

    #[test]
    fn test_blank_log_level_keeps_default() {
        let config = store_with(&[(LOG_LEVEL_VAR, "  ")]).load_config().unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_json_flag_is_rejected() {
        let err = store_with(&[(JSON_OUTPUT_VAR, "sometimes")])
            .load_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(_)));
    }

    #[test]
    fn test_non_unicode_value_is_read_error() {
        let store = EnvConfigStore::with_lookup(|_| {
            Err(VarError::NotUnicode(std::ffi::OsString::from("x")))
        });
        let err = store.load_config().unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_empty_json_flag_falls_back_to_defaults() {
        let store = store_with(&[(LOG_LEVEL_VAR, "debug"), (JSON_OUTPUT_VAR, "")]);
        let (config, err) = resolve_config_or_default(&store, None, false);

        assert_eq!(config, AppConfig::default());
        assert!(matches!(err, Some(ConfigError::InvalidFormat(_))));
    }
}
