use std::fmt::Debug;

use config::{Config, Environment, File};
use error_stack::ResultExt;
use thiserror::Error;

use super::row_appender_config::RowAppenderConfig;

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Failed to read configuration sources")]
    FailedToBuild,
    #[error("Failed to deserialize configuration")]
    FailedToDeserialize,
}

#[derive(serde::Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub service_account_json: Option<String>,
    #[serde(default)]
    pub spreadsheet_url: Option<String>,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub log_json: bool,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "service_account_json",
                &self.service_account_json.as_ref().map(|_| "<redacted>"),
            )
            .field("spreadsheet_url", &self.spreadsheet_url)
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl AppConfig {
    /// Reads the optional file named by `CONFIG_PATH` (default `Config`), then the
    /// process environment on top of it.
    pub fn load() -> error_stack::Result<Self, AppConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        let config = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::default())
            .build()
            .change_context(AppConfigError::FailedToBuild)
            .attach_printable_lazy(|| format!("Config file: {}", config_path))?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> error_stack::Result<Self, AppConfigError> {
        config
            .try_deserialize()
            .change_context(AppConfigError::FailedToDeserialize)
    }

    pub fn row_appender_config(&self) -> RowAppenderConfig {
        RowAppenderConfig::new(
            self.service_account_json.clone(),
            self.spreadsheet_url.clone(),
        )
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::builder().build().unwrap();
        let app_config = AppConfig::from_config(config).unwrap();
        assert_eq!(app_config.listen_address(), "0.0.0.0:8080");
        assert!(!app_config.log_json);
        assert!(app_config.row_appender_config().validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::builder()
            .set_override("service_account_json", r#"{"type": "service_account"}"#)
            .unwrap()
            .set_override("spreadsheet_url", "https://docs.google.com/spreadsheets/d/abc")
            .unwrap()
            .set_override("port", "9000")
            .unwrap()
            .set_override("log_json", "true")
            .unwrap()
            .build()
            .unwrap();
        let app_config = AppConfig::from_config(config).unwrap();

        assert_eq!(app_config.port, 9000);
        assert!(app_config.log_json);
        assert_eq!(app_config.row_appender_config().validate(), Ok(()));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = Config::builder()
            .set_override("service_account_json", "top-secret")
            .unwrap()
            .build()
            .unwrap();
        let app_config = AppConfig::from_config(config).unwrap();
        assert!(!format!("{:?}", app_config).contains("top-secret"));
    }
}
