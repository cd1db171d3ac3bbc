use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats); cities are counted
/// across all countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub cities: usize,
    pub temples: usize,
    pub beaches: usize,
}

impl CatalogStats {
    /// Number of displayable records (cities + temples + beaches).
    pub fn places(&self) -> usize {
        self.cities + self.temples + self.beaches
    }
}
