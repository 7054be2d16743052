//! User entity and its identifier.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::UrlRecord;

/// Caller-supplied user identifier.
///
/// Accepted as either a JSON integer or a JSON string. No authentication is
/// performed: any identifier is treated as valid and its user is created on
/// first sight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId::Text(value)
    }
}

/// A user and the URLs they have shortened.
///
/// `urls` is keyed by long URL: shortening the same long URL again replaces
/// the previous record for this user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub urls: HashMap<String, Arc<UrlRecord>>,
}

impl User {
    /// Creates a user with no URLs.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            urls: HashMap::new(),
        }
    }

    /// Returns the current record for `long_url`, if this user shortened it.
    pub fn record_for(&self, long_url: &str) -> Option<&UrlRecord> {
        self.urls.get(long_url).map(Arc::as_ref)
    }
}
