use std::sync::Arc;

use error_stack::{report, Report, ResultExt};
use thiserror::Error;
use tracing::{info, instrument};

use super::worksheet::Worksheet;
use crate::{
    adapters::config::row_appender_config::{ConfigurationError, RowAppenderConfig},
    domain::{
        mapping::{ColumnMapping, MappingError},
        output_row::OutputRow,
        payload::Payload,
        sheets::row::Row,
        spreadsheet_id::SpreadsheetId,
    },
    ports::spreadsheet::{SpreadsheetClient, SpreadsheetConnector, SpreadsheetError},
};

pub const MAPPING_WORKSHEET: &str = "mapping";
pub const DATA_WORKSHEET: &str = "data";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowAppendError {
    #[error("{0}")]
    Configuration(ConfigurationError),
    #[error("Failed to authenticate with the spreadsheet service")]
    Authentication,
    #[error("Spreadsheet or worksheet not found")]
    NotFound,
    #[error("Request body is not a valid JSON object")]
    MalformedRequest,
    #[error("Spreadsheet request failed")]
    Spreadsheet,
}

impl From<&SpreadsheetError> for RowAppendError {
    fn from(error: &SpreadsheetError) -> Self {
        match error {
            SpreadsheetError::Authentication => RowAppendError::Authentication,
            SpreadsheetError::SpreadsheetNotFound
            | SpreadsheetError::WorksheetNotFound(_)
            | SpreadsheetError::MissingRecordColumn { .. } => RowAppendError::NotFound,
            SpreadsheetError::FailedToFetchSpreadsheet
            | SpreadsheetError::FailedToFetchRange
            | SpreadsheetError::FailedToAppendRow => RowAppendError::Spreadsheet,
        }
    }
}

fn escalate(report: Report<SpreadsheetError>) -> Report<RowAppendError> {
    let context = RowAppendError::from(report.current_context());
    report.change_context(context)
}

/// Appends one webhook payload as a row of the `data` worksheet, using the `mapping`
/// worksheet to decide which payload key fills which column.
///
/// Holds no per-request state: one instance serves every request.
pub struct RowAppender {
    config: RowAppenderConfig,
    connector: Arc<dyn SpreadsheetConnector>,
}

impl RowAppender {
    pub fn new(config: RowAppenderConfig, connector: Arc<dyn SpreadsheetConnector>) -> Self {
        RowAppender { config, connector }
    }

    /// Runs the whole append for one request body and returns the row that was written.
    ///
    /// Nothing is written unless every read before the append succeeded.
    #[instrument(name = "RowAppender::append", skip_all, fields(body_len = body.len()))]
    pub async fn append(&self, body: &[u8]) -> error_stack::Result<OutputRow, RowAppendError> {
        let credentials = self
            .config
            .credential_bundle()
            .map_err(|error| report!(RowAppendError::Configuration(error)))?;
        let spreadsheet_url = self
            .config
            .spreadsheet_url()
            .map_err(|error| report!(RowAppendError::Configuration(error)))?;

        let client = self
            .connector
            .connect(credentials)
            .await
            .map_err(escalate)?;

        let payload = Payload::from_slice(body).change_context(RowAppendError::MalformedRequest)?;
        info!("json keys: {}", payload.keys().collect::<Vec<_>>().join(" "));

        let spreadsheet_id = SpreadsheetId::from_url(spreadsheet_url).ok_or_else(|| {
            report!(RowAppendError::NotFound)
                .attach_printable(format!("No spreadsheet id in URL {}", spreadsheet_url))
        })?;

        let mapping = Self::read_mapping(client.as_ref(), &spreadsheet_id)
            .await
            .map_err(escalate)?;
        info!("mapping: {}", mapping);

        let data_sheet = Worksheet::open(client.as_ref(), &spreadsheet_id, DATA_WORKSHEET)
            .await
            .map_err(escalate)?;
        let headers = data_sheet.row_values(Row::HEADER).await.map_err(escalate)?;
        info!("headers: {:?}", headers);

        let row = mapping.header_lookup().build_row(headers.as_slice(), &payload);
        info!("row: {:?}", row.redacted());

        data_sheet.append_row(&row).await.map_err(escalate)?;
        info!("✅ Appended {} cells to '{}'", row.len(), data_sheet.title());

        Ok(row)
    }

    /// Reads the translation table from the `mapping` worksheet.
    pub async fn read_mapping(
        client: &dyn SpreadsheetClient,
        spreadsheet_id: &SpreadsheetId,
    ) -> error_stack::Result<ColumnMapping, SpreadsheetError> {
        let mapping_sheet = Worksheet::open(client, spreadsheet_id, MAPPING_WORKSHEET).await?;
        let records = mapping_sheet.get_all_records().await?;

        ColumnMapping::from_records(&records).map_err(|error| match error {
            MappingError::MissingColumn(column) => {
                report!(SpreadsheetError::MissingRecordColumn {
                    worksheet: MAPPING_WORKSHEET.to_string(),
                    column,
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreadsheet_errors_map_to_taxonomy() {
        assert_eq!(
            RowAppendError::from(&SpreadsheetError::Authentication),
            RowAppendError::Authentication
        );
        assert_eq!(
            RowAppendError::from(&SpreadsheetError::WorksheetNotFound("data".to_string())),
            RowAppendError::NotFound
        );
        assert_eq!(
            RowAppendError::from(&SpreadsheetError::MissingRecordColumn {
                worksheet: "mapping".to_string(),
                column: "json_key",
            }),
            RowAppendError::NotFound
        );
        assert_eq!(
            RowAppendError::from(&SpreadsheetError::FailedToAppendRow),
            RowAppendError::Spreadsheet
        );
    }

    #[test]
    fn test_configuration_message_is_passed_through() {
        let error = RowAppendError::Configuration(ConfigurationError::MissingServiceAccountJson);
        assert_eq!(
            error.to_string(),
            "Service account JSON not found in environment variables"
        );
    }
}
