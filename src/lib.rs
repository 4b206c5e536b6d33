//! Fetches the chess.com piece image sets and stores them locally.
//!
//! One-shot batch downloader: for each of the three bundled themes and
//! each of the twelve piece codes, issue a blocking GET and write the
//! body under `{base_dir}/{theme}/{code}.png`. Non-200 responses are
//! reported and skipped; transport and filesystem errors abort the run.
//!
//! The fetch loop depends on the [`ports::HttpClient`] trait; the
//! reqwest-backed implementation is wired in by the binary.

pub mod catalog;
mod error;
mod fetcher;
mod http;
pub mod ports;

pub use error::FetchError;
pub use fetcher::{FetchOutcome, fetch_all};
pub use http::ReqwestClient;
