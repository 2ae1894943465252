use std::fmt::Formatter;

/// Service-account JSON used to authenticate against the spreadsheet service.
///
/// The content is opaque to the domain: only the sheets adapter knows how to parse it.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialBundle(String);

impl CredentialBundle {
    /// Returns `None` for an empty bundle, which is treated the same as an absent one.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(CredentialBundle(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CredentialBundle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CredentialBundle(<redacted>)")
    }
}
