#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use error_stack::report;
use serde_json::Value;
use sheets_append::{
    adapters::config::row_appender_config::RowAppenderConfig,
    domain::{
        credentials::CredentialBundle, output_row::OutputRow, sheets::a1_notation::SheetRange,
        spreadsheet_id::SpreadsheetId,
    },
    RowAppender, SpreadsheetClient, SpreadsheetConnector, SpreadsheetError,
};

pub const SPREADSHEET_ID: &str = "test-sheet_1";
pub const SPREADSHEET_URL: &str = "https://docs.google.com/spreadsheets/d/test-sheet_1/edit#gid=0";
pub const SERVICE_ACCOUNT_JSON: &str = r#"{"type": "service_account"}"#;

/// In-memory spreadsheet: worksheets in tab order, each a grid of cells.
pub struct FakeSheets {
    spreadsheet_id: SpreadsheetId,
    worksheets: Mutex<Vec<(String, Vec<Vec<Value>>)>>,
    pub append_calls: AtomicUsize,
    pub read_calls: AtomicUsize,
}

impl FakeSheets {
    pub fn new() -> Self {
        FakeSheets {
            spreadsheet_id: SpreadsheetId::new(SPREADSHEET_ID),
            worksheets: Mutex::new(Vec::new()),
            append_calls: AtomicUsize::new(0),
            read_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_worksheet(self, title: &str, rows: &[&[&str]]) -> Self {
        let grid = rows
            .iter()
            .map(|row| row.iter().map(|cell| Value::String(cell.to_string())).collect())
            .collect();
        self.worksheets
            .lock()
            .unwrap()
            .push((title.to_string(), grid));
        self
    }

    /// The usual two-tab layout: a mapping of `n`/`e` onto `Name`/`Email`.
    pub fn standard() -> Self {
        FakeSheets::new()
            .with_worksheet(
                "mapping",
                &[&["json_key", "column_header"], &["n", "Name"], &["e", "Email"]],
            )
            .with_worksheet("data", &[&["Name", "Email"]])
    }

    pub fn rows(&self, title: &str) -> Vec<Vec<Value>> {
        self.worksheets
            .lock()
            .unwrap()
            .iter()
            .find(|(existing, _)| existing == title)
            .map(|(_, grid)| grid.clone())
            .unwrap_or_default()
    }

    pub fn appends(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }

    fn check_id(&self, spreadsheet_id: &SpreadsheetId) -> error_stack::Result<(), SpreadsheetError> {
        if *spreadsheet_id == self.spreadsheet_id {
            Ok(())
        } else {
            Err(report!(SpreadsheetError::SpreadsheetNotFound))
        }
    }
}

#[async_trait::async_trait]
impl SpreadsheetClient for FakeSheets {
    async fn worksheet_titles(
        &self,
        spreadsheet_id: &SpreadsheetId,
    ) -> error_stack::Result<Vec<String>, SpreadsheetError> {
        self.check_id(spreadsheet_id)?;
        Ok(self
            .worksheets
            .lock()
            .unwrap()
            .iter()
            .map(|(title, _)| title.clone())
            .collect())
    }

    async fn read_values(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetError> {
        self.check_id(spreadsheet_id)?;
        self.read_calls.fetch_add(1, Ordering::SeqCst);

        let worksheets = self.worksheets.lock().unwrap();
        let (_, grid) = worksheets
            .iter()
            .find(|(title, _)| *title == range.title)
            .ok_or(report!(SpreadsheetError::FailedToFetchRange))?;

        Ok(match range.row {
            Some(row) => grid
                .get(row.index() as usize)
                .map(|cells| vec![cells.clone()])
                .unwrap_or_default(),
            None => grid.clone(),
        })
    }

    async fn append_row(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
        row: &OutputRow,
    ) -> error_stack::Result<(), SpreadsheetError> {
        self.check_id(spreadsheet_id)?;
        self.append_calls.fetch_add(1, Ordering::SeqCst);

        let mut worksheets = self.worksheets.lock().unwrap();
        let (_, grid) = worksheets
            .iter_mut()
            .find(|(title, _)| *title == range.title)
            .ok_or(report!(SpreadsheetError::FailedToAppendRow))?;
        grid.push(row.values().to_vec());
        Ok(())
    }
}

pub struct FakeConnector {
    pub sheets: Arc<FakeSheets>,
    pub reject_credentials: bool,
    pub connect_calls: AtomicUsize,
}

impl FakeConnector {
    pub fn new(sheets: Arc<FakeSheets>) -> Self {
        FakeConnector {
            sheets,
            reject_credentials: false,
            connect_calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(sheets: Arc<FakeSheets>) -> Self {
        FakeConnector {
            reject_credentials: true,
            ..FakeConnector::new(sheets)
        }
    }

    pub fn connects(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpreadsheetConnector for FakeConnector {
    async fn connect(
        &self,
        _credentials: &CredentialBundle,
    ) -> error_stack::Result<Arc<dyn SpreadsheetClient>, SpreadsheetError> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_credentials {
            return Err(report!(SpreadsheetError::Authentication));
        }
        Ok(self.sheets.clone())
    }
}

pub fn valid_config() -> RowAppenderConfig {
    RowAppenderConfig::new(
        Some(SERVICE_ACCOUNT_JSON.to_string()),
        Some(SPREADSHEET_URL.to_string()),
    )
}

pub fn row_appender(config: RowAppenderConfig, connector: Arc<FakeConnector>) -> RowAppender {
    RowAppender::new(config, connector)
}
