use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;

/// Where the listing and session slots live, plus logging defaults
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub listings_file: String,
    pub session_file: String,
    pub log_filter: String,
    /// Optional ceiling on the listings file, in bytes
    pub storage_quota_bytes: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("propyto-data"),
            listings_file: "properties.json".to_string(),
            session_file: "logged_in_user.json".to_string(),
            log_filter: "info".to_string(),
            storage_quota_bytes: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("PROPYTO_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("PROPYTO_LISTINGS_FILE") {
            config.listings_file = non_empty("PROPYTO_LISTINGS_FILE", file)?;
        }
        if let Some(file) = lookup("PROPYTO_SESSION_FILE") {
            config.session_file = non_empty("PROPYTO_SESSION_FILE", file)?;
        }
        if let Some(filter) = lookup("PROPYTO_LOG") {
            config.log_filter = non_empty("PROPYTO_LOG", filter)?;
        }
        if let Some(quota) = lookup("PROPYTO_STORAGE_QUOTA_BYTES") {
            let quota = quota.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: "PROPYTO_STORAGE_QUOTA_BYTES".to_string(),
                reason: e.to_string(),
            })?;
            config.storage_quota_bytes = Some(quota);
        }

        Ok(config)
    }

    pub fn listings_path(&self) -> PathBuf {
        self.data_dir.join(&self.listings_file)
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(&self.session_file)
    }
}

fn non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "must not be empty".to_string(),
        })
    } else {
        Ok(value.trim().to_string())
    }
}
