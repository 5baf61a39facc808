//! Joke endpoint value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Public joke API used when nothing else is configured
pub const DEFAULT_JOKE_ENDPOINT: &str = "https://geek-jokes.sameerkumar.website/api?format=json";

/// URL that every request of a batch is sent to (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JokeEndpoint {
    url: String,
}

impl JokeEndpoint {
    /// Create an endpoint, rejecting anything that is not an absolute http(s) URL
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        let trimmed = url.trim();
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(Self {
                url: trimmed.to_string(),
            }),
            _ => Err(DomainError::InvalidEndpoint(url)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for JokeEndpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_JOKE_ENDPOINT.to_string(),
        }
    }
}

impl std::fmt::Display for JokeEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl TryFrom<String> for JokeEndpoint {
    type Error = DomainError;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::new(url)
    }
}

impl From<JokeEndpoint> for String {
    fn from(endpoint: JokeEndpoint) -> Self {
        endpoint.url
    }
}
