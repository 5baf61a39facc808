//! Blocking joke client (`reqwest::blocking::Client`)

use super::error::HttpClientError;
use super::response::{decode_joke, network_error};
use jokes_application::JokeClient;
use jokes_domain::{FetchError, Joke, JokeEndpoint};
use tracing::trace;

/// Blocking HTTP adapter for [`JokeClient`]
///
/// Every call holds the calling thread until the body is decoded.
#[derive(Debug, Clone)]
pub struct BlockingHttpJokeClient {
    client: reqwest::blocking::Client,
    endpoint: JokeEndpoint,
}

impl BlockingHttpJokeClient {
    /// Build a client with default settings for the given endpoint
    pub fn new(endpoint: JokeEndpoint) -> Result<Self, HttpClientError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client, endpoint })
    }
}

impl JokeClient for BlockingHttpJokeClient {
    fn fetch_joke(&self) -> Result<Joke, FetchError> {
        trace!("GET {} (blocking)", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.url())
            .send()
            .map_err(network_error)?;

        let status = response.status();
        let body = response.bytes().map_err(network_error)?;
        decode_joke(status, &body)
    }
}
