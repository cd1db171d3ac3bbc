// crates/travelbloom-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file, gzip, HTTP) and hands the raw bytes to
//! the JSON parser. Nothing here caches: keeping the loaded [`Catalog`]
//! around is the job of [`Session`](crate::Session).

use crate::error::{CatalogError, Result};
use crate::model::Catalog;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod common_io;
#[cfg(feature = "fetch")]
mod fetch;

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// `http://` and `https://` strings are URLs; anything else is a path.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(trimmed.to_string())
        } else {
            Source::Path(PathBuf::from(trimmed))
        }
    }

    pub fn location(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
        }
    }
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Source::parse(s))
    }
}

impl From<&Path> for Source {
    fn from(p: &Path) -> Self {
        Source::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for Source {
    fn from(p: PathBuf) -> Self {
        Source::Path(p)
    }
}

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "travel_recommendation_api.json"
    }

    /// Path of the dataset bundled with this crate.
    pub fn default_source() -> Source {
        Source::Path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// Load the bundled dataset.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_source())
    }

    /// Fetch and parse the catalog once.
    ///
    /// - transport failures (missing file, HTTP non-success status, network
    ///   errors) yield [`CatalogError::Fetch`]
    /// - a body that is not a catalog-shaped JSON object yields
    ///   [`CatalogError::Parse`]
    ///
    /// Missing top-level collections are not an error; they load empty.
    pub fn load(source: &Source) -> Result<Self> {
        tracing::debug!(source = %source, "loading catalog");
        let bytes = match source {
            Source::Path(path) => common_io::read_path(path)?,
            Source::Url(url) => fetch_url(url)?,
        };
        let catalog = Self::from_json_slice(&bytes)?;
        let stats = catalog.stats();
        tracing::info!(
            source = %source,
            countries = stats.countries,
            cities = stats.cities,
            temples = stats.temples,
            beaches = stats.beaches,
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(&Source::from(path.as_ref()))
    }

    /// Parse a catalog document already held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_slice(json.as_bytes())
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(CatalogError::Parse)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(CatalogError::Parse)
    }
}

#[cfg(feature = "fetch")]
fn fetch_url(url: &str) -> Result<Vec<u8>> {
    fetch::fetch_bytes(url)
}

#[cfg(not(feature = "fetch"))]
fn fetch_url(url: &str) -> Result<Vec<u8>> {
    Err(CatalogError::fetch(
        url,
        "URL sources need the 'fetch' feature",
    ))
}
