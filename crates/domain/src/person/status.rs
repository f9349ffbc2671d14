//! Person status — categorical value kept verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical status attached to a [`Person`](super::Person).
///
/// The set of values is owned by clients; any text is accepted and stored
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonStatus(String);

impl PersonStatus {
    /// Wrap a status value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Text form used on the wire and in storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PersonStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
