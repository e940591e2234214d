//! Opaque JSON configuration carried by a session.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::domain::foundation::ValidationError;

/// Arbitrary JSON document attached to a session.
///
/// The service never looks inside it. The client's JSON text is kept
/// verbatim, so numbers, key order and escapes come back exactly as sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionConfig(Box<RawValue>);

impl SessionConfig {
    /// Checks that `text` is a single JSON value and wraps it.
    ///
    /// Surrounding whitespace is dropped; everything inside is kept as is.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        RawValue::from_string(text.to_owned())
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("config", e.to_string()))
    }

    /// The JSON text, as written to the `config` column.
    pub fn as_str(&self) -> &str {
        self.0.get()
    }
}

impl PartialEq for SessionConfig {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
