use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::{
    credentials::CredentialBundle, output_row::OutputRow, sheets::a1_notation::SheetRange,
    spreadsheet_id::SpreadsheetId,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetError {
    #[error("Failed to authenticate with the spreadsheet service")]
    Authentication,
    #[error("Spreadsheet not found")]
    SpreadsheetNotFound,
    #[error("Worksheet '{0}' not found")]
    WorksheetNotFound(String),
    #[error("Worksheet '{worksheet}' is missing the '{column}' column")]
    MissingRecordColumn {
        worksheet: String,
        column: &'static str,
    },
    #[error("Failed to fetch spreadsheet")]
    FailedToFetchSpreadsheet,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("Failed to append row")]
    FailedToAppendRow,
}

/// Builds authenticated clients for the spreadsheet service.
#[async_trait::async_trait]
pub trait SpreadsheetConnector: Send + Sync {
    /// Parses the credential bundle and authorizes it. Fails with
    /// [`SpreadsheetError::Authentication`] before any spreadsheet is touched.
    async fn connect(
        &self,
        credentials: &CredentialBundle,
    ) -> error_stack::Result<Arc<dyn SpreadsheetClient>, SpreadsheetError>;
}

/// Raw operations against one authenticated session of the spreadsheet service.
#[async_trait::async_trait]
pub trait SpreadsheetClient: Send + Sync {
    /// Titles of every worksheet in the spreadsheet, in tab order.
    async fn worksheet_titles(
        &self,
        spreadsheet_id: &SpreadsheetId,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError>;

    /// Cells of the range, row-major. Missing trailing cells and rows are omitted, and an
    /// empty range yields an empty grid.
    async fn read_values(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetError>;

    /// Appends the row after the last non-empty row of the range.
    async fn append_row(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
        row: &OutputRow,
    ) -> error_stack::Result<(), SpreadsheetError>;
}
