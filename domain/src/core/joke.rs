//! Joke value object

use serde::{Deserialize, Serialize};

/// A single joke (Value Object)
///
/// Decoded from the joke API body `{"joke": "<text>"}`. Unknown fields in the
/// body are ignored. Serializes back to the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Joke {
    #[serde(rename = "joke")]
    text: String,
}

impl Joke {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the joke text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Joke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Joke {
    fn from(s: &str) -> Self {
        Joke::new(s)
    }
}

impl From<String> for Joke {
    fn from(s: String) -> Self {
        Joke::new(s)
    }
}
