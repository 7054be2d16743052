//! URL record entity.

/// The association between an issued short code and its destination.
///
/// Records are immutable once created. The store shares each one between the
/// owning user's `urls` mapping and the global code mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub short_code: String,
    pub long_url: String,
}

impl UrlRecord {
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}
