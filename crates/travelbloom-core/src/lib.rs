// crates/travelbloom-core/src/lib.rs

//! # travelbloom-core
//!
//! Load a travel-recommendation catalog (countries with cities, temples,
//! beaches) once, then answer keyword searches against it.
//!
//! ```
//! use travelbloom_core::prelude::*;
//!
//! let session = Session::from_catalog(Catalog::from_json_str(r#"{
//!     "countries": [{"name": "Japan", "cities": [{"name": "Tokyo"}, {"name": "Kyoto"}]}],
//!     "beaches": [{"name": "Bora Bora"}]
//! }"#)?);
//!
//! let outcome = session.search("Beaches")?;
//! assert_eq!(outcome.rule, MatchRule::Beaches);
//! for card in CardView::from_outcome(&outcome) {
//!     println!("{} -> {}", card.name, card.image_url);
//! }
//! # Ok::<(), CatalogError>(())
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod session;
pub mod text;
pub mod traits;
pub mod view;

pub mod prelude;

// Re-exports
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, Result};
pub use crate::loader::Source;
pub use crate::model::{Catalog, Country, Place, PlaceKind};
pub use crate::search::{MatchRule, Query, SearchOptions, SearchOutcome, NO_MATCH_ADVICE};
pub use crate::session::{LoadState, Session};
pub use crate::text::Folding;
pub use crate::view::{cards_for_all, CardView, PLACEHOLDER_IMAGE};
