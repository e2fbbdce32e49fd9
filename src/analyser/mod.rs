// src/analyser/mod.rs
// =============================================================================
// The document analysis engine.
//
// Submodules:
// - doctype: maps a doctype declaration to an HTML version label
// - link: decides whether a link is accessible and whether it is external
// - report: the AnalysisReport produced for each document
// - walker: walks the tree once and fills in the report
//
// Everything in here is synchronous and free of I/O. The same document can
// be analysed from several threads at once, and separate calls never share
// any state.
// =============================================================================

mod doctype;
mod link;
mod report;
mod walker;

pub use doctype::{classify_doctype, HtmlVersion};
pub use link::{classify_link, ClassifyError, Link};
pub use report::{AnalysisReport, HeadingCounts, HeadingLevel, LinkList};
pub use walker::{analyse, Tag};
