// crates/travelbloom-core/src/session.rs
use crate::error::{CatalogError, Result};
use crate::loader::Source;
use crate::model::Catalog;
use crate::search::{Query, SearchOptions, SearchOutcome};

/// Lifecycle of the one catalog a session ever holds.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Load not finished yet; searches are rejected with `NotReady`.
    #[default]
    Pending,
    Ready(Catalog),
    /// Load failed. The session stays unloaded; the message is kept for
    /// display.
    Failed(String),
}

/// Owns the loaded catalog and gates searches on it.
///
/// The state moves out of [`LoadState::Pending`] exactly once. Nothing is
/// re-fetched and a failed load is never retried.
///
/// ```
/// use travelbloom_core::{Catalog, CatalogError, Session};
///
/// let mut session = Session::new();
/// assert!(matches!(session.search("japan"), Err(CatalogError::NotReady)));
///
/// session.finish_load(Catalog::from_json_str(
///     r#"{"countries":[{"name":"Japan","cities":[{"name":"Tokyo"}]}]}"#,
/// ));
/// assert_eq!(session.search("japan").unwrap().names(), ["Tokyo"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: LoadState,
    options: SearchOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that is already loaded.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Session {
            state: LoadState::Ready(catalog),
            options: SearchOptions::default(),
        }
    }

    /// Load `source` synchronously and record the outcome.
    pub fn open(source: &Source) -> Self {
        let mut session = Session::new();
        session.finish_load(Catalog::load(source));
        session
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Record the result of a load that completed elsewhere (e.g. a browser
    /// fetch). Only the first call has an effect.
    pub fn finish_load(&mut self, result: Result<Catalog>) {
        if !matches!(self.state, LoadState::Pending) {
            tracing::warn!("catalog load already settled; ignoring second result");
            return;
        }
        self.state = match result {
            Ok(catalog) => LoadState::Ready(catalog),
            Err(e) => {
                tracing::error!(error = %e, "catalog load failed");
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// The load error message, if the load failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Normalize `raw` and resolve it against the loaded catalog.
    ///
    /// A blank term is rejected with [`CatalogError::EmptyQuery`] before
    /// readiness is checked; an unloaded session answers
    /// [`CatalogError::NotReady`].
    pub fn search(&self, raw: &str) -> Result<SearchOutcome<'_>> {
        let query = Query::parse(raw)?;
        let catalog = self.catalog().ok_or(CatalogError::NotReady)?;
        Ok(catalog.resolve_with(&query, self.options))
    }
}
