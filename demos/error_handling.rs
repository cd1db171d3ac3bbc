//! Error handling example for travelbloom
//!
//! This example demonstrates the error taxonomy and which errors a caller
//! can simply retry.

use travelbloom_core::prelude::*;

fn main() -> Result<()> {
    println!("=== TravelBloom Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a missing file ---");
    match Catalog::load(&Source::parse("does/not/exist.json")) {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  ✗ {e} (recoverable: {})", e.is_recoverable()),
    }
    println!();

    // Example 2: Malformed payloads
    println!("--- Example 2: Malformed payloads ---");
    for body in ["not json", r#"{"beaches": {}}"#, r#"{"temples": [{"description": "no name"}]}"#] {
        match Catalog::from_json_str(body) {
            Ok(_) => println!("  Parsed: {body}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: Missing collections are fine
    println!("--- Example 3: Missing collections load empty ---");
    let sparse = Catalog::from_json_str(r#"{"beaches": [{"name": "Bora Bora"}]}"#)?;
    println!("  {:?}", sparse.stats());
    println!();

    // Example 4: Searching before the catalog is ready, and blank queries
    println!("--- Example 4: Recoverable search errors ---");
    let mut session = Session::new();
    for term in ["beach", "   "] {
        match session.search(term) {
            Ok(outcome) => println!("  {term:?}: {} results", outcome.len()),
            Err(e) => println!("  {term:?}: {e} (recoverable: {})", e.is_recoverable()),
        }
    }

    session.finish_load(Ok(sparse));
    let outcome = session.search("beach")?;
    println!("  after load: {:?}", outcome.names());

    // Example 5: Nothing found is not an error
    println!("\n--- Example 5: Empty result with advice ---");
    let outcome = session.search("atlantis")?;
    println!("  {} results, advice: {:?}", outcome.len(), outcome.advisory);

    Ok(())
}
