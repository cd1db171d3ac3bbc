// crates/travelbloom-core/src/model.rs
use crate::common::CatalogStats;
use crate::traits::NameMatch;
use serde::{Deserialize, Deserializer, Serialize};

/// A single displayable recommendation: a city, a temple or a beach.
///
/// Mirrors the leaf objects of the JSON document:
/// `{ "name": "...", "imageUrl": "...", "description": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Which collection a [`Place`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    City,
    Temple,
    Beach,
}

/// A country and its cities, in listed order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cities: Vec<Place>,
}

// A `null` collection reads the same as an absent one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The whole recommendation dataset.
///
/// Any of the three top-level collections may be missing from the source
/// document or `null`; it then loads as an empty list. A `Catalog` is never mutated
/// after loading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub countries: Vec<Country>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub temples: Vec<Place>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub beaches: Vec<Place>,
}

impl Catalog {
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn temples(&self) -> &[Place] {
        &self.temples
    }

    pub fn beaches(&self) -> &[Place] {
        &self.beaches
    }

    /// Every city of every country, country by country.
    pub fn cities(&self) -> impl Iterator<Item = &Place> {
        self.countries.iter().flat_map(|c| c.cities.iter())
    }

    /// Every record with its kind: all cities first, then temples, then
    /// beaches. This is the order of the initial "show everything" grid.
    ///
    /// # Example
    ///
    /// ```
    /// use travelbloom_core::{Catalog, PlaceKind};
    ///
    /// let catalog = Catalog::from_json_str(
    ///     r#"{"beaches":[{"name":"Bora Bora"}],
    ///         "countries":[{"name":"Japan","cities":[{"name":"Tokyo"}]}]}"#,
    /// ).unwrap();
    ///
    /// let kinds: Vec<_> = catalog.places().map(|(kind, _)| kind).collect();
    /// assert_eq!(kinds, [PlaceKind::City, PlaceKind::Beach]);
    /// ```
    pub fn places(&self) -> impl Iterator<Item = (PlaceKind, &Place)> {
        self.cities()
            .map(|p| (PlaceKind::City, p))
            .chain(self.temples.iter().map(|p| (PlaceKind::Temple, p)))
            .chain(self.beaches.iter().map(|p| (PlaceKind::Beach, p)))
    }

    /// First country whose name equals `name`, ignoring case.
    pub fn find_country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.is_named(name))
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            countries: self.countries.len(),
            cities: self.cities().count(),
            temples: self.temples.len(),
            beaches: self.beaches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.temples.is_empty() && self.beaches.is_empty()
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cities(&self) -> &[Place] {
        &self.cities
    }
}

impl Place {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The image URL, treating an empty string like a missing one.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Place {
    fn name_str(&self) -> &str {
        &self.name
    }
}
