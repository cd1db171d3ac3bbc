//! Basic usage example for travelbloom
//!
//! This example demonstrates how to:
//! - Load the bundled recommendation catalog
//! - Walk countries, cities, temples and beaches
//! - Build the initial "show everything" card grid

use travelbloom_core::prelude::*;

fn main() -> Result<()> {
    println!("=== TravelBloom Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading recommendation catalog...");
    let catalog = Catalog::load_default()?;
    println!("✓ Catalog loaded successfully\n");

    // Example 1: Summary
    println!("--- Example 1: Catalog summary ---");
    let stats = catalog.stats();
    println!("Countries: {}", stats.countries);
    println!("Cities:    {}", stats.cities);
    println!("Temples:   {}", stats.temples);
    println!("Beaches:   {}", stats.beaches);
    println!();

    // Example 2: Countries and their cities
    println!("--- Example 2: Countries and cities ---");
    for country in catalog.countries() {
        println!("{}:", country.name());
        for city in country.cities() {
            println!("  - {}", city.name());
        }
    }
    println!();

    // Example 3: Find a country by name
    println!("--- Example 3: Find country by name ---");
    match catalog.find_country("JAPAN") {
        Some(country) => println!(
            "Found {} with {} cities",
            country.name(),
            country.cities().len()
        ),
        None => println!("Japan is not in this catalog"),
    }
    println!();

    // Example 4: The initial grid
    println!("--- Example 4: Every card, in grid order ---");
    for (i, card) in cards_for_all(&catalog).iter().enumerate() {
        let kind = card.kind.map(|k| format!("{k:?}")).unwrap_or_default();
        println!("{}. [{}] {} ({})", i + 1, kind, card.name, card.image_url);
    }

    Ok(())
}
