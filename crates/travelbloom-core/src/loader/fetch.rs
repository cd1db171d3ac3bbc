// crates/travelbloom-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::{CatalogError, Result};

/// Single blocking GET. Any non-2xx status ends the attempt; there is no
/// retry.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url).map_err(|e| CatalogError::fetch(url, e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "catalog fetch rejected");
        return Err(CatalogError::fetch(url, format!("HTTP {}", status.as_u16())));
    }

    let body = response.bytes().map_err(|e| CatalogError::fetch(url, e))?;
    Ok(body.to_vec())
}
