//! Endpoint configuration from TOML (`[endpoint]` section)

use jokes_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_JOKE_ENDPOINT, JokeEndpoint,
};
use serde::{Deserialize, Serialize};

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// URL every joke request is sent to
    pub url: String,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_JOKE_ENDPOINT.to_string(),
        }
    }
}

impl FileEndpointConfig {
    /// Parse the URL, falling back to the default endpoint on error
    pub fn parse_endpoint(&self) -> (JokeEndpoint, Vec<ConfigIssue>) {
        match JokeEndpoint::new(&self.url) {
            Ok(endpoint) => (endpoint, vec![]),
            Err(e) => (
                JokeEndpoint::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidValue {
                        field: "endpoint.url".to_string(),
                        value: self.url.clone(),
                    },
                    format!("endpoint.url: {}", e),
                )],
            ),
        }
    }
}
