pub mod auth;
pub mod http_client;
pub mod spreadsheet_manager;
pub mod value_range_factory;

pub use spreadsheet_manager::{GoogleSheetsConnector, SpreadsheetManager};
