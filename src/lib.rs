//! Umbrella crate for the TravelBloom workspace.
//!
//! Re-exports `travelbloom-core` so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the workspace root.

pub use travelbloom_core::*;
