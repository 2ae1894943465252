use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    fn from_row(values: &[Value]) -> Self;
}

impl ValueRangeFactory for ValueRange {
    fn from_row(values: &[Value]) -> Self {
        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(vec![values.to_vec()]),
        }
    }
}
