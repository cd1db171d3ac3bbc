//! Query resolver integration harness.
//!
//! # What this covers
//!
//! - **Category keywords**: `beach(es)`, `temple(s)` return their whole
//!   collection in dataset order, whatever the input casing or padding.
//! - **Country preview**: `country`/`countries` returns at most two records,
//!   the first city of each of the first two countries.
//! - **Exact country name**: returns exactly that country's cities.
//! - **Substring fallback**: lower-cased containment over cities only, in
//!   country-then-city order, with an advisory when nothing matches.
//! - **Purity**: resolving twice gives identical output.
//!
//! # Running
//!
//! ```sh
//! cargo test -p travelbloom-core --test resolve_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use travelbloom_core::{MatchRule, Query, SearchOptions, NO_MATCH_ADVICE};

fn q(raw: &str) -> Query {
    Query::parse(raw).expect("non-empty query")
}

// ---------------------------------------------------------------------------
// Category keywords
// ---------------------------------------------------------------------------

#[rstest]
#[case("beach")]
#[case("beaches")]
#[case("  BEACHES  ")]
#[case("Beach")]
fn beach_keywords_return_every_beach(#[case] raw: &str) {
    let catalog = world_catalog();
    let outcome = catalog.resolve(&q(raw));
    assert_eq!(outcome.rule, MatchRule::Beaches);
    assert_eq!(names(&outcome.places), ["Bora Bora", "Copacabana"]);
    assert_eq!(outcome.advisory, None);
}

#[rstest]
#[case("temple")]
#[case("TEMPLES")]
fn temple_keywords_keep_duplicates(#[case] raw: &str) {
    let catalog = world_catalog();
    let outcome = catalog.resolve(&q(raw));
    assert_eq!(outcome.rule, MatchRule::Temples);
    assert_eq!(names(&outcome.places), ["Angkor Wat", "Taj Mahal", "Angkor Wat"]);
}

#[rstest]
#[case("beache")]
#[case("beachs")]
#[case("the beach")]
fn near_keywords_fall_back_to_substring(#[case] raw: &str) {
    let catalog = world_catalog();
    assert_eq!(catalog.classify(&q(raw)), MatchRule::CitySubstring);
}

// ---------------------------------------------------------------------------
// Country preview
// ---------------------------------------------------------------------------

#[rstest]
#[case("country")]
#[case("Countries")]
fn country_keyword_is_a_two_city_preview(#[case] raw: &str) {
    let catalog = world_catalog();
    let outcome = catalog.resolve(&q(raw));
    assert_eq!(outcome.rule, MatchRule::CountryPreview);
    assert_eq!(names(&outcome.places), ["Sydney", "Tokyo"]);
}

#[test]
fn country_preview_skips_countries_without_cities() {
    let catalog = travelbloom_core::Catalog {
        countries: vec![country("Nowhere", &[]), country("Peru", &["Lima", "Cusco"])],
        ..Default::default()
    };
    let outcome = catalog.resolve(&q("countries"));
    assert_eq!(names(&outcome.places), ["Lima"]);
}

#[test]
fn country_preview_on_empty_catalog_is_empty_without_advice() {
    let catalog = travelbloom_core::Catalog::default();
    let outcome = catalog.resolve(&q("country"));
    assert!(outcome.is_empty());
    assert_eq!(outcome.advisory, None);
}

// ---------------------------------------------------------------------------
// Exact country name
// ---------------------------------------------------------------------------

#[rstest]
#[case("australia", &["Sydney", "Melbourne"])]
#[case("BRAZIL", &["Rio de Janeiro", "São Paulo"])]
#[case("japan", &["Tokyo", "Kyōto", "Osaka"])]
fn country_name_returns_its_cities(#[case] raw: &str, #[case] expected: &[&str]) {
    let catalog = world_catalog();
    let outcome = catalog.resolve(&q(raw));
    assert_eq!(outcome.rule, MatchRule::CountryName);
    assert_eq!(names(&outcome.places), expected);
}

#[test]
fn country_without_cities_returns_empty_without_advice() {
    let catalog = world_catalog();
    let outcome = catalog.resolve(&q("empty isles"));
    assert_eq!(outcome.rule, MatchRule::CountryName);
    assert!(outcome.is_empty());
    assert_eq!(outcome.advisory, None);
}

// ---------------------------------------------------------------------------
// Substring fallback
// ---------------------------------------------------------------------------

#[test]
fn substring_scans_cities_in_dataset_order() {
    let catalog = world_catalog();
    let outcome = catalog.resolve(&q("o"));
    assert_eq!(outcome.rule, MatchRule::CitySubstring);
    assert_eq!(
        names(&outcome.places),
        ["Melbourne", "Tokyo", "Kyōto", "Osaka", "Rio de Janeiro", "São Paulo", "Second Tokyo"]
    );
}

#[test]
fn substring_ignores_temples_and_beaches() {
    let catalog = world_catalog();
    let outcome = catalog.resolve(&q("angkor"));
    assert!(outcome.is_empty());
    assert_eq!(outcome.advisory, Some(NO_MATCH_ADVICE));
}

#[test]
fn substring_is_case_insensitive() {
    let catalog = world_catalog();
    assert_eq!(names(&catalog.resolve(&q("JANEIRO")).places), ["Rio de Janeiro"]);
}

#[test]
fn accents_only_fold_when_asked() {
    let catalog = world_catalog();
    assert!(catalog.resolve(&q("kyoto")).is_empty());

    let folded = catalog.resolve_with(&q("kyoto"), SearchOptions::accent_insensitive());
    assert_eq!(names(&folded.places), ["Kyōto"]);

    let folded = catalog.resolve_with(&q("sao"), SearchOptions::accent_insensitive());
    assert_eq!(names(&folded.places), ["São Paulo"]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[rstest]
#[case("beach")]
#[case("countries")]
#[case("japan")]
#[case("to")]
#[case("xyz")]
fn resolving_is_idempotent(#[case] raw: &str) {
    let catalog = world_catalog();
    let query = q(raw);
    assert_eq!(catalog.resolve(&query), catalog.resolve(&query));
}

#[test]
fn worked_example_from_small_catalog() {
    let catalog = japan_catalog();
    assert_eq!(names(&catalog.resolve(&q("japan")).places), ["Tokyo", "Kyoto"]);
    assert_eq!(names(&catalog.resolve(&q("beaches")).places), ["Bora Bora"]);
    assert_eq!(names(&catalog.resolve(&q("to")).places), ["Tokyo"]);

    let miss = catalog.resolve(&q("xyz"));
    assert!(miss.is_empty());
    assert_eq!(miss.advisory, Some(NO_MATCH_ADVICE));
}
