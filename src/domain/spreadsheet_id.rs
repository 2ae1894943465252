use std::{fmt::Formatter, sync::LazyLock};

use regex::Regex;

static SPREADSHEET_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/spreadsheets/d/([a-zA-Z0-9_-]+)")
        .expect("Spreadsheet id pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpreadsheetId(String);

impl SpreadsheetId {
    pub fn new(id: impl Into<String>) -> Self {
        SpreadsheetId(id.into())
    }

    /// Extracts the id from a URL such as
    /// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`.
    ///
    /// # Examples
    /// ```
    /// use sheets_append::domain::spreadsheet_id::SpreadsheetId;
    /// let id = SpreadsheetId::from_url("https://docs.google.com/spreadsheets/d/abc-123_X/edit");
    /// assert_eq!(id.unwrap().as_ref(), "abc-123_X");
    /// ```
    pub fn from_url(url: &str) -> Option<Self> {
        SPREADSHEET_ID_PATTERN
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| SpreadsheetId(id.as_str().to_owned()))
    }
}

impl AsRef<str> for SpreadsheetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
