//! travelbloom prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, Result};
pub use crate::loader::Source;
pub use crate::model::{Catalog, Country, Place, PlaceKind};
pub use crate::search::{MatchRule, Query, SearchOptions, SearchOutcome, NO_MATCH_ADVICE};
pub use crate::session::{LoadState, Session};
pub use crate::text::{fold_key, Folding};
pub use crate::traits::NameMatch;
pub use crate::view::{cards_for_all, CardView, PLACEHOLDER_IMAGE};
