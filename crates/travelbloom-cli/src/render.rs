//! Text and JSON rendering of cards and catalog summaries.

use serde::Serialize;
use std::fmt::Write;
use travelbloom_core::{CardView, Catalog, MatchRule, SearchOutcome};

/// JSON shape of one search answer.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub term: &'a str,
    pub rule: MatchRule,
    pub cards: Vec<CardView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<&'static str>,
}

impl<'a> SearchReport<'a> {
    pub fn new(term: &'a str, outcome: &SearchOutcome<'a>) -> Self {
        SearchReport {
            term,
            rule: outcome.rule,
            cards: CardView::from_outcome(outcome),
            advisory: outcome.advisory,
        }
    }
}

/// One card per block: name line, then indented description and image.
pub fn cards_text(cards: &[CardView<'_>]) -> String {
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "{}", card.name);
        if !card.description.is_empty() {
            let _ = writeln!(out, "    {}", card.description);
        }
        let _ = writeln!(out, "    {}", card.image_url);
    }
    out
}

pub fn stats_text(catalog: &Catalog) -> String {
    let stats = catalog.stats();
    format!(
        "Catalog statistics:\n  Countries: {}\n  Cities: {}\n  Temples: {}\n  Beaches: {}\n",
        stats.countries, stats.cities, stats.temples, stats.beaches
    )
}

/// JSON shape of one `countries` row.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CountrySummary<'a> {
    pub name: &'a str,
    pub cities: usize,
}

pub fn country_summaries(catalog: &Catalog) -> Vec<CountrySummary<'_>> {
    catalog
        .countries()
        .iter()
        .map(|c| CountrySummary {
            name: c.name(),
            cities: c.cities().len(),
        })
        .collect()
}

pub fn countries_text(catalog: &Catalog) -> String {
    let mut out = String::new();
    for c in country_summaries(catalog) {
        let _ = writeln!(out, "{} ({} cities)", c.name, c.cities);
    }
    out
}
