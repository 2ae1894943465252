use std::fmt::Formatter;

use super::row::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self) -> A1Notation;
}

/// A range inside a single worksheet, addressed by the worksheet title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    pub title: String,
    /// `None` addresses the whole worksheet.
    pub row: Option<Row>,
}

impl SheetRange {
    pub fn whole(title: impl Into<String>) -> Self {
        SheetRange {
            title: title.into(),
            row: None,
        }
    }

    pub fn row(title: impl Into<String>, row: Row) -> Self {
        SheetRange {
            title: title.into(),
            row: Some(row),
        }
    }
}

/// Titles are always quoted; embedded quotes are doubled.
fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

impl ToA1Notation for SheetRange {
    fn to_a1_notation(&self) -> A1Notation {
        let title = quote_sheet_title(&self.title);
        match self.row {
            Some(row) => A1Notation(format!("{}!{}:{}", title, row, row)),
            None => A1Notation(title),
        }
    }
}
