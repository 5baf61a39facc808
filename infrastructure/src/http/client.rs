//! Non-blocking joke client (`reqwest::Client`)

use super::error::HttpClientError;
use super::response::{decode_joke, network_error};
use async_trait::async_trait;
use jokes_application::AsyncJokeClient;
use jokes_domain::{FetchError, Joke, JokeEndpoint};
use tracing::trace;

/// Non-blocking HTTP adapter for [`AsyncJokeClient`]
#[derive(Debug, Clone)]
pub struct HttpJokeClient {
    client: reqwest::Client,
    endpoint: JokeEndpoint,
}

impl HttpJokeClient {
    /// Build a client with default settings for the given endpoint
    pub fn new(endpoint: JokeEndpoint) -> Result<Self, HttpClientError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl AsyncJokeClient for HttpJokeClient {
    async fn fetch_joke(&self) -> Result<Joke, FetchError> {
        trace!("GET {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.url())
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(network_error)?;
        decode_joke(status, &body)
    }
}
