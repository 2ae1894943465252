use serde_json::Value;

/// Converts cells returned by the values API into their displayed text.
pub trait IntoCellText<T> {
    fn into_cell_text(self) -> T;
}

impl IntoCellText<String> for Value {
    fn into_cell_text(self) -> String {
        match self {
            Value::String(text) => text,
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl IntoCellText<Vec<String>> for Vec<Value> {
    fn into_cell_text(self) -> Vec<String> {
        self.into_iter()
            .map(<Value as IntoCellText<String>>::into_cell_text)
            .collect()
    }
}

impl IntoCellText<Vec<Vec<String>>> for Vec<Vec<Value>> {
    fn into_cell_text(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(<Vec<Value> as IntoCellText<Vec<String>>>::into_cell_text)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_are_not_quoted() {
        let text: String = json!("Name").into_cell_text();
        assert_eq!(text, "Name");
    }

    #[test]
    fn test_other_values() {
        let cells: Vec<String> = vec![json!(12), json!(true), json!(null)].into_cell_text();
        assert_eq!(cells, vec!["12", "true", ""]);
    }

    #[test]
    fn test_grid() {
        let grid: Vec<Vec<String>> =
            vec![vec![json!("a"), json!("b")], vec![json!("c")]].into_cell_text();
        assert_eq!(grid, vec![vec!["a", "b"], vec!["c"]]);
    }
}
