//! HTTP client port.
//!
//! The fetch loop depends on this trait, not on a concrete transport.
//! The production implementation is [`crate::ReqwestClient`]; tests
//! inject hand-rolled mocks.

use crate::error::FetchError;

/// Response to a single GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Port for issuing blocking GET requests.
///
/// `Err` means a transport-level failure (DNS, connect, read) and aborts
/// the whole run. A non-200 status is returned as a normal response and
/// handled per item by the caller.
pub trait HttpClient {
    /// Issue a blocking GET against `url` and return the full response.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}
