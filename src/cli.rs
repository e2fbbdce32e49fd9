// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Every flag that is worth setting once per machine (log level, timeout)
// can also come from an environment variable, so CI jobs don't have to
// repeat them on each call.
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "web-analyser",
    version,
    about = "Analyse an HTML page: version, title, headings, links and forms",
    long_about = "web-analyser fetches a web page (or reads a local HTML file) and reports its \
                  HTML version, title, heading counts, internal/external links and whether it \
                  contains a form."
)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "WEB_ANALYSER_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse one or more pages
    ///
    /// Example: web-analyser analyse https://www.rust-lang.org
    Analyse {
        /// URLs or HTML file paths to analyse
        #[arg(required = true)]
        sources: Vec<String>,

        /// URL to compare links against instead of the source itself
        ///
        /// Needed when analysing local files, which have no URL of their own.
        #[arg(long)]
        origin: Option<String>,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// HTTP timeout in seconds
        #[arg(long, env = "WEB_ANALYSER_TIMEOUT", default_value_t = 10)]
        timeout: u64,

        /// How many sources to fetch at the same time
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
        concurrency: u16,
    },

    /// Show how a single link would be classified
    ///
    /// Example: web-analyser link /docs --origin https://example.com
    Link {
        /// The href value, exactly as it would appear in the page
        href: String,

        /// URL of the page the link appears on
        #[arg(long)]
        origin: String,
    },
}
