pub mod row_appender;
pub mod worksheet;

pub use row_appender::{RowAppendError, RowAppender, DATA_WORKSHEET, MAPPING_WORKSHEET};
pub use worksheet::Worksheet;
