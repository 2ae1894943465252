use std::{collections::HashMap, fmt::Formatter};

use serde_json::Value;
use thiserror::Error;

use super::{output_row::OutputRow, payload::Payload, sheets::record::Record};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Mapping record is missing the '{0}' column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub json_key: String,
    pub column_header: String,
}

/// Translation table from payload keys to data worksheet headers.
///
/// Entries keep the order in which their key was first read. Reading the same key again
/// replaces its header without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: Vec<MappingEntry>,
}

impl ColumnMapping {
    pub const JSON_KEY_COLUMN: &'static str = "json_key";
    pub const COLUMN_HEADER_COLUMN: &'static str = "column_header";

    pub fn from_records(records: &[Record]) -> Result<Self, MappingError> {
        let mut mapping = ColumnMapping::default();
        for record in records {
            let json_key = record
                .get(Self::JSON_KEY_COLUMN)
                .ok_or(MappingError::MissingColumn(Self::JSON_KEY_COLUMN))?;
            let column_header = record
                .get(Self::COLUMN_HEADER_COLUMN)
                .ok_or(MappingError::MissingColumn(Self::COLUMN_HEADER_COLUMN))?;
            mapping.insert(json_key.clone(), column_header.clone());
        }
        Ok(mapping)
    }

    pub fn insert(&mut self, json_key: impl Into<String>, column_header: impl Into<String>) {
        let json_key = json_key.into();
        let column_header = column_header.into();
        match self.entries.iter_mut().find(|entry| entry.json_key == json_key) {
            Some(entry) => entry.column_header = column_header,
            None => self.entries.push(MappingEntry {
                json_key,
                column_header,
            }),
        }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inverts the table once so each header is resolved without scanning every entry.
    /// When several keys map to the same header, the first one in table order wins.
    pub fn header_lookup(&self) -> HeaderLookup<'_> {
        let mut by_header = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            by_header
                .entry(entry.column_header.as_str())
                .or_insert(entry.json_key.as_str());
        }
        HeaderLookup { by_header }
    }
}

impl<K: Into<String>, H: Into<String>> FromIterator<(K, H)> for ColumnMapping {
    fn from_iter<I: IntoIterator<Item = (K, H)>>(iter: I) -> Self {
        let mut mapping = ColumnMapping::default();
        for (json_key, column_header) in iter {
            mapping.insert(json_key, column_header);
        }
        mapping
    }
}

impl std::fmt::Display for ColumnMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|entry| (&entry.json_key, &entry.column_header)),
            )
            .finish()
    }
}

pub struct HeaderLookup<'a> {
    by_header: HashMap<&'a str, &'a str>,
}

impl<'a> HeaderLookup<'a> {
    pub fn json_key_for(&self, column_header: &str) -> Option<&'a str> {
        self.by_header.get(column_header).copied()
    }

    /// Builds one value per header. Unmapped headers and keys absent from the payload
    /// become empty strings; everything else is copied as-is.
    pub fn build_row<S: AsRef<str>>(&self, headers: &[S], payload: &Payload) -> OutputRow {
        headers
            .iter()
            .map(|header| {
                self.json_key_for(header.as_ref())
                    .and_then(|json_key| payload.get(json_key))
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new()))
            })
            .collect::<Vec<_>>()
            .into()
    }
}
