//! Keyword search example for travelbloom
//!
//! Runs one query per match rule against the bundled catalog and prints the
//! rule that answered it.

use travelbloom_core::prelude::*;

fn main() -> Result<()> {
    println!("=== TravelBloom Keyword Search Example ===\n");

    let session = Session::open(&Catalog::default_source());
    if let Some(msg) = session.failure() {
        eprintln!("✗ Failed to load catalog: {msg}");
        return Ok(());
    }

    for term in ["Beaches", "temple", "countries", "japan", "rio", "xyz"] {
        let outcome = session.search(term)?;
        println!("{term:>10} -> {:?}", outcome.rule);
        for card in CardView::from_outcome(&outcome) {
            println!("{:>12} {}", "-", card.name);
        }
        if let Some(advice) = outcome.advisory {
            println!("{:>12} {advice}", "!");
        }
    }

    println!("\n--- Accent-insensitive matching ---");
    let folded = session.clone().with_options(SearchOptions::accent_insensitive());
    for term in ["sao", "sao paulo, brazil"] {
        println!(
            "{term:>18}: plain {:?}, folded {:?}",
            session.search(term)?.names(),
            folded.search(term)?.names()
        );
    }

    Ok(())
}
