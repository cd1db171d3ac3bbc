//! travelbloom: Command-line interface for travelbloom-core
//!
//! Loads the recommendation catalog once and answers keyword searches the
//! same way the browser widget does.
//!
//! Usage examples
//! --------------
//!
//! - Whole categories
//!   $ travelbloom search beaches
//!   $ travelbloom search temple
//!
//! - A two-city teaser across countries
//!   $ travelbloom search countries
//!
//! - Every city of one country, or cities by partial name
//!   $ travelbloom search japan
//!   $ travelbloom search kyo
//!   $ travelbloom --fold search sao
//!
//! - Everything / summaries
//!   $ travelbloom list
//!   $ travelbloom stats
//!   $ travelbloom countries
//!
//! Data source
//! -----------
//!
//! By default the CLI reads the dataset bundled with `travelbloom-core`.
//! Use `--input <path|url>` to point at another `.json`, `.json.gz` or an
//! http(s) URL. The source is read once; a failed read is reported and not
//! retried.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use travelbloom_cli::render::{self, SearchReport};
use travelbloom_core::{cards_for_all, CardView, Catalog, Query, SearchOptions, Session};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let source = args.input.unwrap_or_else(Catalog::default_source);
    let options = if args.fold {
        SearchOptions::accent_insensitive()
    } else {
        SearchOptions::default()
    };

    let session = Session::open(&source).with_options(options);
    let catalog = match session.failure() {
        Some(msg) => anyhow::bail!("could not load catalog: {msg}"),
        None => session.catalog().context("catalog not loaded")?,
    };
    tracing::debug!(source = %source, fold = args.fold, "catalog ready");

    match args.command {
        Commands::Search { term } => {
            let query = Query::parse(&term.join(" "))?;
            let outcome = catalog.resolve_with(&query, session.options());
            if args.json {
                let report = SearchReport::new(query.as_str(), &outcome);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::cards_text(&CardView::from_outcome(&outcome)));
                if let Some(advice) = outcome.advisory {
                    eprintln!("{advice}");
                }
            }
        }

        Commands::List => {
            let cards = cards_for_all(catalog);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                print!("{}", render::cards_text(&cards));
            }
        }

        Commands::Stats => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&catalog.stats())?);
            } else {
                print!("{}", render::stats_text(catalog));
            }
        }

        Commands::Countries => {
            if args.json {
                let rows = render::country_summaries(catalog);
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render::countries_text(catalog));
            }
        }
    }

    Ok(())
}
