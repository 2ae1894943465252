// Public API exports
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod telemetry;

// Re-export key types for easy access
pub use adapters::http::build_router;
pub use application::{RowAppendError, RowAppender};
pub use ports::{SpreadsheetClient, SpreadsheetConnector, SpreadsheetError};
