// src/dom/mod.rs
// =============================================================================
// The document tree the analyser walks over.
//
// Submodules:
// - tree: the arena Document, its nodes and attributes
// - parse: builds a Document from raw HTML using scraper
// =============================================================================

mod parse;
mod tree;

pub use parse::parse_document;
pub use tree::{Attribute, Document, Element, Node, NodeId, NodeKind};
