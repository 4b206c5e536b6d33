//! Production HTTP client backed by `reqwest::blocking`.
//!
//! Requests use reqwest's defaults: no custom headers, no retry. One
//! request is in flight at a time, matching the sequential fetch loop.

use crate::error::FetchError;
use crate::ports::{HttpClient, HttpResponse};

/// `HttpClient` implementation over a shared blocking reqwest client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Create a client with reqwest's default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| FetchError::network(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
