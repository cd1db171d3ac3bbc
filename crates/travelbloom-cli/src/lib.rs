//! travelbloom-cli
//! ===============
//!
//! Command-line interface for the `travelbloom-core` recommendation catalog.
//!
//! The binary (`travelbloom`) is the primary deliverable; this library target
//! holds the output formatting so it can be tested without spawning a
//! process.
//!
//! Basic usage:
//!
//! ```text
//! travelbloom search beaches
//! travelbloom search japan
//! travelbloom --json search kyo
//! travelbloom --input https://example.org/travel_recommendation_api.json list
//! travelbloom stats
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod render;
