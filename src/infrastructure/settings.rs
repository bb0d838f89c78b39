//! Runtime configuration.
//!
//! Values come from built-in defaults, then an optional `kamayan.toml` in the
//! working directory, then `KAMAYAN__*` environment variables
//! (for example `KAMAYAN__STORAGE__DATA_DIR=/var/lib/kamayan`).

use crate::domain::DEFAULT_SLOT;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct KamayanConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub slot: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file; logging is off when unset because the terminal belongs to the UI.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl KamayanConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("kamayan").required(false))
            .add_source(Environment::with_prefix("KAMAYAN").separator("__"))
            .build()?
            .try_deserialize::<KamayanConfig>()
    }

    /// Loads defaults overlaid with a specific TOML file, ignoring the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<KamayanConfig>()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("storage.data_dir", ".")?
            .set_default("storage.slot", DEFAULT_SLOT)?
            .set_default("logging.level", "info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kamayan.toml");
        fs::write(&path, "[logging]\nfile = \"kamayan.log\"\n").unwrap();

        let config = KamayanConfig::load_from(&path).unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("."));
        assert_eq!(config.storage.slot, DEFAULT_SLOT);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, Some(PathBuf::from("kamayan.log")));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kamayan.toml");
        fs::write(
            &path,
            "[storage]\ndata_dir = \"/tmp/kamayan\"\nslot = \"bookings\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = KamayanConfig::load_from(&path).unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/kamayan"));
        assert_eq!(config.storage.slot, "bookings");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(KamayanConfig::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
