// crates/travelbloom-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or querying the catalog.
///
/// `Fetch` and `Parse` end a load attempt for good: the session that saw
/// them stays unloaded. `NotReady` and `EmptyQuery` only reject the current
/// search and carry the text shown to the user.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure: HTTP non-success status, network error or an
    /// unreadable file.
    #[error("failed to fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    /// The body is not valid JSON or does not have the catalog shape.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Data still loading, try again.")]
    NotReady,

    #[error("Please enter a valid search query.")]
    EmptyQuery,
}

impl CatalogError {
    pub(crate) fn fetch(location: impl Into<String>, reason: impl ToString) -> Self {
        CatalogError::Fetch {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// `true` for errors the user can recover from by simply trying again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CatalogError::NotReady | CatalogError::EmptyQuery)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
