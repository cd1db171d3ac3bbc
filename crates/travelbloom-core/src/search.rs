// crates/travelbloom-core/src/search.rs
use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Country, Place, PlaceKind};
use crate::text::{normalize_term, Folding};
use crate::traits::NameMatch;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Shown when the city substring scan finds nothing.
pub const NO_MATCH_ADVICE: &str = "No matches found. Try beach, temple, country, or city name.";

/// How many countries contribute a city to the `country` keyword preview.
pub const COUNTRY_PREVIEW_COUNT: usize = 2;

const BEACH_KEYWORDS: [&str; 2] = ["beach", "beaches"];
const TEMPLE_KEYWORDS: [&str; 2] = ["temple", "temples"];
const COUNTRY_KEYWORDS: [&str; 2] = ["country", "countries"];

/// A normalized (trimmed, lower-cased), non-empty search term.
///
/// ```
/// use travelbloom_core::{CatalogError, Query};
///
/// assert_eq!(Query::parse("  Beaches ").unwrap().as_str(), "beaches");
/// assert!(matches!(Query::parse(" \t"), Err(CatalogError::EmptyQuery)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self> {
        let term = normalize_term(raw);
        if term.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }
        Ok(Query(term))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Query {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Query::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The strategy that produced a [`SearchOutcome`], in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// `beach` / `beaches`: every beach.
    Beaches,
    /// `temple` / `temples`: every temple.
    Temples,
    /// `country` / `countries`: first city of the first two countries.
    CountryPreview,
    /// Exact country name: all of its cities.
    CountryName,
    /// Fallback: cities whose name contains the term.
    CitySubstring,
}

impl MatchRule {
    /// Kind of every record this rule can return.
    pub fn kind(self) -> PlaceKind {
        match self {
            MatchRule::Beaches => PlaceKind::Beach,
            MatchRule::Temples => PlaceKind::Temple,
            MatchRule::CountryPreview | MatchRule::CountryName | MatchRule::CitySubstring => {
                PlaceKind::City
            }
        }
    }
}

/// Knobs for [`Catalog::resolve_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Normalization applied to names and term for the country-name and
    /// city-substring rules. Category keywords always compare the term as is.
    pub folding: Folding,
}

impl SearchOptions {
    pub fn accent_insensitive() -> Self {
        SearchOptions {
            folding: Folding::Accents,
        }
    }
}

/// Ordered result of one search.
///
/// `places` keeps rule evaluation order and may contain duplicates if the
/// dataset does. `advisory` is only set by an empty city-substring scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    pub rule: MatchRule,
    pub places: Vec<&'a Place>,
    pub advisory: Option<&'static str>,
}

impl<'a> SearchOutcome<'a> {
    fn new(rule: MatchRule, places: Vec<&'a Place>) -> Self {
        let advisory =
            (rule == MatchRule::CitySubstring && places.is_empty()).then_some(NO_MATCH_ADVICE);
        SearchOutcome {
            rule,
            places,
            advisory,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn kind(&self) -> PlaceKind {
        self.rule.kind()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.places.iter().map(|p| p.name()).collect()
    }
}

enum Plan<'a> {
    Keyword(MatchRule),
    Country(&'a Country),
    Substring,
}

impl Catalog {
    /// Resolve a query with the default (lower-case only) matching.
    ///
    /// # Example
    ///
    /// ```
    /// use travelbloom_core::{Catalog, MatchRule, Query};
    ///
    /// let catalog = Catalog::from_json_str(r#"{
    ///     "countries": [{"name": "Japan", "cities": [{"name": "Tokyo"}, {"name": "Kyoto"}]}],
    ///     "beaches": [{"name": "Bora Bora"}],
    ///     "temples": [{"name": "Angkor Wat"}]
    /// }"#).unwrap();
    ///
    /// let hit = catalog.resolve(&Query::parse("JAPAN").unwrap());
    /// assert_eq!(hit.rule, MatchRule::CountryName);
    /// assert_eq!(hit.names(), ["Tokyo", "Kyoto"]);
    ///
    /// let miss = catalog.resolve(&Query::parse("xyz").unwrap());
    /// assert!(miss.is_empty());
    /// assert!(miss.advisory.is_some());
    /// ```
    pub fn resolve(&self, query: &Query) -> SearchOutcome<'_> {
        self.resolve_with(query, SearchOptions::default())
    }

    pub fn resolve_with(&self, query: &Query, options: SearchOptions) -> SearchOutcome<'_> {
        let term = query.as_str();
        let outcome = match self.plan(term, options.folding) {
            Plan::Keyword(MatchRule::Beaches) => {
                SearchOutcome::new(MatchRule::Beaches, self.beaches.iter().collect())
            }
            Plan::Keyword(MatchRule::Temples) => {
                SearchOutcome::new(MatchRule::Temples, self.temples.iter().collect())
            }
            Plan::Keyword(rule) => SearchOutcome::new(rule, self.country_preview()),
            Plan::Country(country) => {
                SearchOutcome::new(MatchRule::CountryName, country.cities.iter().collect())
            }
            Plan::Substring => {
                let places = self
                    .cities()
                    .filter(|city| city.name_contains_with(term, options.folding))
                    .collect();
                SearchOutcome::new(MatchRule::CitySubstring, places)
            }
        };
        tracing::debug!(
            term,
            rule = ?outcome.rule,
            matches = outcome.len(),
            "query resolved"
        );
        outcome
    }

    /// Which rule a query would be answered by, without collecting results.
    pub fn classify(&self, query: &Query) -> MatchRule {
        self.classify_with(query, SearchOptions::default())
    }

    pub fn classify_with(&self, query: &Query, options: SearchOptions) -> MatchRule {
        match self.plan(query.as_str(), options.folding) {
            Plan::Keyword(rule) => rule,
            Plan::Country(_) => MatchRule::CountryName,
            Plan::Substring => MatchRule::CitySubstring,
        }
    }

    fn plan(&self, term: &str, folding: Folding) -> Plan<'_> {
        if BEACH_KEYWORDS.contains(&term) {
            return Plan::Keyword(MatchRule::Beaches);
        }
        if TEMPLE_KEYWORDS.contains(&term) {
            return Plan::Keyword(MatchRule::Temples);
        }
        if COUNTRY_KEYWORDS.contains(&term) {
            return Plan::Keyword(MatchRule::CountryPreview);
        }
        match self.countries.iter().find(|c| c.is_named_with(term, folding)) {
            Some(country) => Plan::Country(country),
            None => Plan::Substring,
        }
    }

    // A teaser, not a listing: one city from each of the first two countries.
    fn country_preview(&self) -> Vec<&Place> {
        self.countries
            .iter()
            .take(COUNTRY_PREVIEW_COUNT)
            .filter_map(|c| c.cities.first())
            .collect()
    }
}
