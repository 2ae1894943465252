pub mod spreadsheet;

pub use spreadsheet::{SpreadsheetClient, SpreadsheetConnector, SpreadsheetError};
