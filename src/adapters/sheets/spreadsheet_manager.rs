use std::{fmt::Debug, sync::Arc};

use error_stack::{Report, ResultExt};
use google_sheets4::{api::ValueRange, hyper, Error as Sheets4Error, Sheets};
use serde_json::Value;
use tracing::instrument;

use super::{
    auth::{self, SCOPES},
    http_client::{self, HttpsConnector},
    value_range_factory::ValueRangeFactory,
};
use crate::{
    domain::{
        credentials::CredentialBundle,
        output_row::OutputRow,
        sheets::a1_notation::{SheetRange, ToA1Notation},
        spreadsheet_id::SpreadsheetId,
    },
    ports::spreadsheet::{SpreadsheetClient, SpreadsheetConnector, SpreadsheetError},
};

/// Connects to Google Sheets with a service account. The HTTPS client is shared between
/// requests; authenticators are not.
pub struct GoogleSheetsConnector {
    client: hyper::Client<HttpsConnector>,
}

impl GoogleSheetsConnector {
    pub fn new() -> Self {
        GoogleSheetsConnector {
            client: http_client::http_client(),
        }
    }
}

impl Default for GoogleSheetsConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SpreadsheetConnector for GoogleSheetsConnector {
    #[instrument(name = "GoogleSheetsConnector::connect", skip_all)]
    async fn connect(
        &self,
        credentials: &CredentialBundle,
    ) -> error_stack::Result<Arc<dyn SpreadsheetClient>, SpreadsheetError> {
        let auth = auth::auth(credentials, self.client.clone()).await?;
        let hub: Sheets<HttpsConnector> = Sheets::new(self.client.clone(), auth);

        Ok(Arc::new(SpreadsheetManager { hub }))
    }
}

pub struct SpreadsheetManager {
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager")
    }
}

/// Maps a hub error onto the port's error, keeping `fallback` for anything that is
/// neither an auth nor a not-found failure.
fn classify(error: &Sheets4Error, fallback: SpreadsheetError) -> SpreadsheetError {
    match error {
        Sheets4Error::MissingToken(_) => SpreadsheetError::Authentication,
        Sheets4Error::BadRequest(body) if body["error"]["code"].as_u64() == Some(404) => {
            SpreadsheetError::SpreadsheetNotFound
        }
        Sheets4Error::Failure(response) if response.status() == hyper::StatusCode::NOT_FOUND => {
            SpreadsheetError::SpreadsheetNotFound
        }
        _ => fallback,
    }
}

fn into_report(error: Sheets4Error, fallback: SpreadsheetError) -> Report<SpreadsheetError> {
    let context = classify(&error, fallback);
    Report::new(error).change_context(context)
}

#[async_trait::async_trait]
impl SpreadsheetClient for SpreadsheetManager {
    #[instrument(skip(self))]
    async fn worksheet_titles(
        &self,
        spreadsheet_id: &SpreadsheetId,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(spreadsheet_id.as_ref())
            .add_scopes(SCOPES)
            .doit()
            .await
            .map_err(|error| into_report(error, SpreadsheetError::FailedToFetchSpreadsheet))
            .attach_printable_lazy(|| format!("Failed to open spreadsheet {}", spreadsheet_id))?;

        let titles = spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|props| props.title))
            .collect();

        Ok(titles)
    }

    #[instrument(skip(self))]
    async fn read_values(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetError> {
        let a1_notation = range.to_a1_notation();
        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(spreadsheet_id.as_ref(), a1_notation.as_ref())
            .add_scopes(SCOPES)
            .doit()
            .await
            .map_err(|error| into_report(error, SpreadsheetError::FailedToFetchRange))
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", a1_notation))?;

        // The API leaves `values` out entirely for an empty range.
        Ok(value_range.values.unwrap_or_default())
    }

    #[instrument(skip(self, row), fields(cells = row.len()))]
    async fn append_row(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
        row: &OutputRow,
    ) -> error_stack::Result<(), SpreadsheetError> {
        let a1_notation = range.to_a1_notation();
        self.hub
            .spreadsheets()
            .values_append(
                ValueRange::from_row(row.values()),
                spreadsheet_id.as_ref(),
                a1_notation.as_ref(),
            )
            .value_input_option("RAW")
            .add_scopes(SCOPES)
            .doit()
            .await
            .map(|_| ())
            .map_err(|error| into_report(error, SpreadsheetError::FailedToAppendRow))
            .attach_printable_lazy(|| format!("Failed to append to range {}", a1_notation))
    }
}
