use thiserror::Error;

use crate::domain::credentials::CredentialBundle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Service account JSON not found in environment variables")]
    MissingServiceAccountJson,
    #[error("Spreadsheet URL not found in environment variables")]
    MissingSpreadsheetUrl,
}

/// Everything the row appender needs from its environment, passed in explicitly.
#[derive(Debug, Clone, Default)]
pub struct RowAppenderConfig {
    pub credential_bundle: Option<CredentialBundle>,
    pub spreadsheet_url: Option<String>,
}

impl RowAppenderConfig {
    pub fn new(credential_bundle: Option<String>, spreadsheet_url: Option<String>) -> Self {
        RowAppenderConfig {
            credential_bundle: credential_bundle.and_then(CredentialBundle::new),
            spreadsheet_url: spreadsheet_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn credential_bundle(&self) -> Result<&CredentialBundle, ConfigurationError> {
        self.credential_bundle
            .as_ref()
            .ok_or(ConfigurationError::MissingServiceAccountJson)
    }

    pub fn spreadsheet_url(&self) -> Result<&str, ConfigurationError> {
        self.spreadsheet_url
            .as_deref()
            .ok_or(ConfigurationError::MissingSpreadsheetUrl)
    }

    /// Checks every required field, reporting the credential bundle first.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.credential_bundle()?;
        self.spreadsheet_url()?;
        Ok(())
    }
}
