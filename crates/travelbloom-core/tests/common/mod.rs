#![allow(unused)]
//! Shared fixtures for the integration harnesses.

use travelbloom_core::{Catalog, Country, Place};

pub fn place(name: &str) -> Place {
    Place {
        name: name.to_string(),
        image_url: None,
        description: format!("About {name}"),
    }
}

pub fn country(name: &str, cities: &[&str]) -> Country {
    Country {
        name: name.to_string(),
        cities: cities.iter().map(|c| place(c)).collect(),
    }
}

/// The worked example: one country, one beach, one temple.
pub fn japan_catalog() -> Catalog {
    Catalog {
        countries: vec![country("Japan", &["Tokyo", "Kyoto"])],
        temples: vec![place("Angkor Wat")],
        beaches: vec![place("Bora Bora")],
    }
}

/// Several countries, overlapping city names and accented names.
pub fn world_catalog() -> Catalog {
    Catalog {
        countries: vec![
            country("Australia", &["Sydney", "Melbourne"]),
            country("Japan", &["Tokyo", "Kyōto", "Osaka"]),
            country("Brazil", &["Rio de Janeiro", "São Paulo"]),
            country("Empty Isles", &[]),
            country("Japan", &["Second Tokyo"]),
        ],
        temples: vec![place("Angkor Wat"), place("Taj Mahal"), place("Angkor Wat")],
        beaches: vec![place("Bora Bora"), place("Copacabana")],
    }
}

pub fn names(places: &[&Place]) -> Vec<String> {
    places.iter().map(|p| p.name.clone()).collect()
}

pub const SAMPLE_JSON: &str = r#"{
    "countries": [
        {"name": "Japan", "cities": [
            {"name": "Tokyo", "imageUrl": "tokyo.jpg", "description": "Capital"},
            {"name": "Kyoto", "description": "Temples"}
        ]}
    ],
    "temples": [{"name": "Angkor Wat", "imageUrl": "angkor.jpg", "description": "Cambodia"}],
    "beaches": [{"name": "Bora Bora", "imageUrl": "bora.jpg", "description": "Lagoon"}]
}"#;
