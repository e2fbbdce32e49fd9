// src/main.rs
// =============================================================================
// This is the entry point of the web-analyser CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so JSON on stdout stays clean)
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the results as a table or JSON
// 5. Exit with proper code (0 = success, 1 = a source failed, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use web_analyser::{analyse, classify_link, AnalysisReport, FetchConfig, Fetcher, Source};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every source was analysed
//   Ok(1) = at least one source could not be fetched
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Analyse {
            sources,
            origin,
            json,
            timeout,
            concurrency,
        } => {
            let config = FetchConfig {
                timeout: Duration::from_secs(timeout),
                ..FetchConfig::default()
            };
            handle_analyse(sources, origin, json, &config, usize::from(concurrency)).await
        }
        Commands::Link { href, origin } => handle_link(&href, &origin),
    }
}

// RUST_LOG wins when set, otherwise the --log-level flag / WEB_ANALYSER_LOG
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

// One entry of the output, either a report or the reason there isn't one
#[derive(Debug, Serialize)]
struct SourceResult {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

// Handles the 'analyse' subcommand
//
// Sources are fetched concurrently (at most `concurrency` at a time) but
// results come back in the order the sources were given.
async fn handle_analyse(
    sources: Vec<String>,
    origin: Option<String>,
    json: bool,
    config: &FetchConfig,
    concurrency: usize,
) -> Result<i32> {
    let fetcher = Fetcher::new(config).context("failed to create HTTP client")?;

    if !json {
        println!("🔍 Analysing {} source(s)...\n", sources.len());
    }

    let fetcher = &fetcher;
    let origin = origin.as_deref();
    let results: Vec<SourceResult> = stream::iter(sources)
        .map(|raw| async move {
            match analyse_source(fetcher, &raw, origin).await {
                Ok(report) => SourceResult {
                    source: raw,
                    report: Some(report),
                    error: None,
                },
                Err(e) => {
                    warn!(source = %raw, error = %format!("{:#}", e), "failed to analyse source");
                    SourceResult {
                        source: raw,
                        report: None,
                        error: Some(format!("{:#}", e)),
                    }
                }
            }
        })
        .buffered(concurrency)
        .collect()
        .await;

    print_results(&results, json)?;

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    Ok(if failed > 0 { 1 } else { 0 })
}

async fn analyse_source(fetcher: &Fetcher, raw: &str, origin: Option<&str>) -> Result<AnalysisReport> {
    let source = Source::parse(raw)?;

    let origin = match origin {
        Some(origin) => origin.to_string(),
        // Links are compared with the host as the user typed it, not the
        // normalised form the url crate keeps
        None => match source {
            Source::Url(_) => raw.trim().to_string(),
            Source::File(_) => {
                warn!(source = %source, "no origin for a local file, absolute links will be recorded as inaccessible");
                String::new()
            }
        },
    };

    let document = fetcher
        .fetch(&source)
        .await
        .with_context(|| format!("could not retrieve {}", source))?;

    let report = analyse(&document, &origin);
    info!(
        source = %source,
        version = report.html_version(),
        headings = report.heading_counts().total(),
        links = report.accessible_internal_links().count()
            + report.inaccessible_internal_links().count()
            + report.external_links().count(),
        "analysis complete"
    );

    Ok(report)
}

// Handles the 'link' subcommand
fn handle_link(href: &str, origin: &str) -> Result<i32> {
    let link = classify_link(href, origin)?;

    let category = if link.is_external {
        "external"
    } else if link.is_accessible {
        "accessible internal"
    } else {
        "inaccessible internal"
    };

    println!("{:<14} {}", "href:", link.href);
    println!("{:<14} {}", "accessible:", link.is_accessible);
    println!("{:<14} {}", "external:", link.is_external);
    println!("{:<14} {}", "category:", category);

    Ok(0)
}

fn print_results(results: &[SourceResult], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        for result in results {
            print_table(result);
        }
    }
    Ok(())
}

// Prints one source's report as a human-readable table
fn print_table(result: &SourceResult) {
    println!("📄 {}", result.source);
    println!("{}", "=".repeat(72));

    let report = match (&result.report, &result.error) {
        (Some(report), _) => report,
        (None, error) => {
            println!("❌ {}\n", error.as_deref().unwrap_or("unknown error"));
            return;
        }
    };

    for (name, value) in report.rows() {
        let value = if value.is_empty() { "-".to_string() } else { value };
        println!("{:<32} {}", name, value);
    }

    let lists = [
        ("Accessible internal links", report.accessible_internal_links()),
        ("Inaccessible internal links", report.inaccessible_internal_links()),
        ("External links", report.external_links()),
    ];
    for (heading, list) in lists {
        if list.count() == 0 {
            continue;
        }
        println!("\n{} ({}):", heading, list.count());
        for link in list.links() {
            println!("   {}", link);
        }
    }

    println!();
}
