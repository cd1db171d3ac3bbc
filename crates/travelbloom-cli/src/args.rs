use clap::{ArgAction, Parser, Subcommand};
use travelbloom_core::Source;

/// CLI arguments for travelbloom
#[derive(Debug, Parser)]
#[command(
    name = "travelbloom",
    version,
    about = "Search the travel recommendation catalog from the terminal"
)]
pub struct CliArgs {
    /// Catalog to load: a .json / .json.gz path or an http(s) URL
    /// (default: the dataset bundled with travelbloom-core)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<Source>,

    /// Ignore accents when matching country and city names (kyoto ~ Kyōto)
    #[arg(long = "fold", global = true)]
    pub fold: bool,

    /// Print cards as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search by keyword: beach(es), temple(s), country/countries,
    /// a country name, or part of a city name
    Search {
        /// Search term; several words are joined with spaces
        #[arg(num_args = 0..)]
        term: Vec<String>,
    },

    /// List every recommendation (cities, then temples, then beaches)
    List,

    /// Show a summary of the catalog contents
    Stats,

    /// List countries with their number of cities
    Countries,
}
