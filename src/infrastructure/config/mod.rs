use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::{CsvParser, Delimiter};

/// Optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "utilbox.toml";

/// Prefix for environment overrides, e.g. `UTILBOX_DELIMITER=;`
pub const ENV_PREFIX: &str = "UTILBOX_";

/// Ambient settings shared by every tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Single ASCII character, `tab`, or `auto`
    pub delimiter: String,

    /// File summed by `add-numbers` when no path is given
    pub numbers_file: PathBuf,

    /// File read by `csv-reader` when no path is given
    pub sample_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            delimiter: ",".to_string(),
            numbers_file: PathBuf::from("numbers.csv"),
            sample_file: PathBuf::from("sample_data.csv"),
        }
    }
}

impl AppConfig {
    pub fn csv_delimiter(&self) -> Result<Delimiter> {
        self.delimiter.parse()
    }

    /// CSV parser configured with this delimiter
    pub fn csv_parser(&self) -> Result<CsvParser> {
        Ok(CsvParser::new().with_delimiter(self.csv_delimiter()?))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(AppError::ConfigError("log_filter must not be empty".to_string()));
        }
        self.csv_delimiter()?;
        Ok(())
    }
}

pub struct ConfigService;

impl ConfigService {
    /// Defaults, then `utilbox.toml`, then `UTILBOX_*` environment variables
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<AppConfig> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let config: AppConfig = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_overrides() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::load().map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "numbers_file = \"data/n.csv\"\ndelimiter = \";\"")?;
            let config = ConfigService::load().map_err(|e| e.to_string())?;
            assert_eq!(config.numbers_file, PathBuf::from("data/n.csv"));
            assert_eq!(config.csv_delimiter().ok(), Some(Delimiter::Fixed(b';')));
            assert_eq!(config.log_filter, "warn");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "log_filter = \"info\"")?;
            jail.set_env("UTILBOX_LOG_FILTER", "debug");
            jail.set_env("UTILBOX_DELIMITER", "auto");
            let config = ConfigService::load().map_err(|e| e.to_string())?;
            assert_eq!(config.log_filter, "debug");
            assert_eq!(config.csv_delimiter().ok(), Some(Delimiter::Auto));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_delimiter_is_config_error() {
        Jail::expect_with(|jail| {
            jail.set_env("UTILBOX_DELIMITER", "::");
            let err = ConfigService::load().unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)));
            Ok(())
        });
    }
}
