use serde_json::Value;

const REDACTED: &str = "[redacted]";

/// Values to append, positionally aligned with the data worksheet's header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRow(Vec<Value>);

impl OutputRow {
    pub fn new(values: Vec<Value>) -> Self {
        OutputRow(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Audit view of the row: `[redacted]` for every filled slot, `""` for empty ones.
    pub fn redacted(&self) -> Vec<&'static str> {
        self.0
            .iter()
            .map(|value| if is_filled(value) { REDACTED } else { "" })
            .collect()
    }
}

impl From<Vec<Value>> for OutputRow {
    fn from(values: Vec<Value>) -> Self {
        OutputRow(values)
    }
}

fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redacted_hides_values() {
        let row = OutputRow::new(vec![json!("Alice"), json!(""), json!(42)]);
        assert_eq!(row.redacted(), vec!["[redacted]", "", "[redacted]"]);
    }

    #[test]
    fn test_redacted_treats_falsy_values_as_empty() {
        let row = OutputRow::new(vec![
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!([]),
            json!({}),
        ]);
        assert_eq!(row.redacted(), vec![""; 6]);
    }

    #[test]
    fn test_redacted_keeps_truthy_values() {
        let row = OutputRow::new(vec![json!(true), json!(-1), json!(["x"]), json!({"k": 1})]);
        assert_eq!(row.redacted(), vec![REDACTED; 4]);
    }
}
