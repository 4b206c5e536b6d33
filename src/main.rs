//! Binary entry point - the composition root.
//!
//! Wires the reqwest-backed client into the fetch loop and runs it
//! against the fixed destination tree. Any aborting error propagates
//! through anyhow and terminates the process non-zero.

use std::path::Path;

use piecefetch::{ReqwestClient, fetch_all};

/// Destination root; theme folders are created beneath it.
const PIECES_DIR: &str = "images/chess/pieces";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = ReqwestClient::new();
    fetch_all(&client, Path::new(PIECES_DIR))?;

    Ok(())
}
