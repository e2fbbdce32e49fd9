// src/lib.rs
// =============================================================================
// web-analyser: summarises a single HTML page.
//
// For one document it reports:
// - the declared HTML version (from the doctype)
// - the page title
// - how many h1..h6 headings there are
// - every link, split into accessible internal, inaccessible internal
//   and external
// - whether the page has a form
//
// Typical use:
//   let fetcher = Fetcher::new(&FetchConfig::default())?;
//   let document = fetcher.fetch_str("https://example.com").await?;
//   let report = analyse(&document, "https://example.com");
//
// Modules:
// - dom: the arena tree the analyser reads
// - analyser: the analysis itself (pure, synchronous)
// - fetch: getting a Document from a URL or a file
// =============================================================================

pub mod analyser;
pub mod dom;
pub mod fetch;

pub use analyser::{analyse, classify_doctype, classify_link, AnalysisReport, ClassifyError, Link};
pub use dom::{parse_document, Document};
pub use fetch::{FetchConfig, FetchError, Fetcher, Source};
