//! Strongly-typed identifier value objects.

use std::fmt;

/// Store-assigned identifier for a session.
///
/// Ids are handed out by the database on insert and are never reused,
/// so there is no constructor for a "fresh" id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(i64);

impl SessionId {
    /// Wraps a raw row id.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
