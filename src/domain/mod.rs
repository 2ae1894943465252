pub mod credentials;
pub mod mapping;
pub mod output_row;
pub mod payload;
pub mod sheets;
pub mod spreadsheet_id;

// Re-export commonly used types
pub use credentials::CredentialBundle;
pub use mapping::{ColumnMapping, HeaderLookup, MappingEntry};
pub use output_row::OutputRow;
pub use payload::Payload;
pub use spreadsheet_id::SpreadsheetId;
