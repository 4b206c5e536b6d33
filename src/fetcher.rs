//! Sequential fetch-and-write loop over the piece catalog.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{THEMES, piece_codes};
use crate::error::FetchError;
use crate::ports::HttpClient;

/// Outcome of a single (theme, piece) attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response was 200; body written to this path.
    Saved(PathBuf),
    /// Non-200 status; nothing written, loop continued.
    Skipped {
        /// The URL that was requested.
        url: String,
        /// The status that came back.
        status: u16,
    },
}

/// Fetch every piece image for every theme into `base_dir`.
///
/// Requests proceed theme-major, piece-minor, strictly one at a time.
/// Each theme's folder is created (with parents) before its first
/// request. A 200 response is written byte-for-byte to
/// `{base_dir}/{theme}/{code}.png`, overwriting any existing file; any
/// other status is reported and skipped. Transport or filesystem errors
/// abort the run immediately, leaving already-written files in place.
///
/// One console line is printed per attempt. The returned list mirrors
/// those lines in order, one entry per attempt.
pub fn fetch_all(
    client: &dyn HttpClient,
    base_dir: &Path,
) -> Result<Vec<FetchOutcome>, FetchError> {
    let pieces = piece_codes();
    let mut outcomes = Vec::with_capacity(THEMES.len() * pieces.len());

    for theme in &THEMES {
        let folder = base_dir.join(theme.name);
        ensure_dir(&folder)?;

        for piece in &pieces {
            let url = format!("{}/{piece}.png", theme.base_url);
            tracing::debug!("GET {url}");

            let response = client.get(&url)?;
            if response.status == 200 {
                let filename = folder.join(format!("{piece}.png"));
                fs::write(&filename, &response.body)
                    .map_err(|e| FetchError::io("write_file", e.to_string()))?;
                println!("Downloaded {}", filename.display());
                outcomes.push(FetchOutcome::Saved(filename));
            } else {
                println!("Failed to download {url}");
                outcomes.push(FetchOutcome::Skipped {
                    url,
                    status: response.status,
                });
            }
        }
    }

    Ok(outcomes)
}

/// Ensure `dir` exists, creating it and any missing parents.
fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    if !dir.exists() {
        tracing::debug!("creating {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| FetchError::io("create_dir", e.to_string()))?;
    }
    Ok(())
}
