// crates/travelbloom-core/src/view.rs

//! Presentation-neutral card views.
//!
//! A [`CardView`] is everything a grid cell needs: title, image, alt text and
//! description. It borrows from the catalog and serializes to the same
//! camelCase keys as the source document, so JS callers can consume it
//! directly.

use crate::model::{Catalog, Place, PlaceKind};
use crate::search::SearchOutcome;
use serde::Serialize;

/// Used when a record has no (or an empty) `imageUrl`.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x180?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView<'a> {
    pub name: &'a str,
    pub image_url: &'a str,
    pub alt: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PlaceKind>,
}

impl<'a> CardView<'a> {
    pub fn new(place: &'a Place) -> Self {
        CardView {
            name: place.name(),
            image_url: place.image_url().unwrap_or(PLACEHOLDER_IMAGE),
            alt: place.name(),
            description: place.description(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: PlaceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn has_placeholder(&self) -> bool {
        self.image_url == PLACEHOLDER_IMAGE
    }

    /// Cards for a search result, in result order.
    pub fn from_outcome(outcome: &SearchOutcome<'a>) -> Vec<Self> {
        let kind = outcome.kind();
        outcome
            .places
            .iter()
            .map(|p| CardView::new(*p).with_kind(kind))
            .collect()
    }
}

/// The initial grid: every city, then every temple, then every beach.
pub fn cards_for_all(catalog: &Catalog) -> Vec<CardView<'_>> {
    catalog
        .places()
        .map(|(kind, p)| CardView::new(p).with_kind(kind))
        .collect()
}
