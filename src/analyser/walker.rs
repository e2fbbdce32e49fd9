// src/analyser/walker.rs
// =============================================================================
// Walks a document once and builds its AnalysisReport.
//
// How it works:
// 1. Start with the root node on a stack
// 2. Pop a node, look at what kind it is and update the report
// 3. Push its children (reversed, so they pop in document order)
// 4. Repeat until the stack is empty
//
// Every node's children are visited no matter what the node itself was, so
// a <title> nested in a <div> or an <h2> inside an <a> is still found.
// Using our own stack instead of recursion means very deep documents can't
// overflow the call stack.
// =============================================================================

use tracing::{debug, warn};

use super::doctype::classify_doctype;
use super::link::{classify_link, Link};
use super::report::{AnalysisReport, HeadingLevel};
use crate::dom::{Document, Element, NodeId, NodeKind};

/// Element names the analyser reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Anchor,
    Form,
    Title,
    Heading(HeadingLevel),
    /// Anything else: nothing to record, children are still walked
    Other,
}

impl Tag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "a" => Tag::Anchor,
            "form" => Tag::Form,
            "title" => Tag::Title,
            _ => HeadingLevel::from_tag(name).map_or(Tag::Other, Tag::Heading),
        }
    }
}

// Analyses a parsed document
//
// Parameters:
//   document: the parsed tree, only read
//   origin: URL the document came from, used to tell internal links
//           from external ones
//
// Returns: a fresh report. This never fails; anything odd about a single
// node (an anchor without href, an origin that isn't a URL) is logged and
// the walk carries on.
pub fn analyse(document: &Document, origin: &str) -> AnalysisReport {
    let mut report = AnalysisReport::default();
    // A title can legitimately be "", so emptiness can't mark "unset"
    let mut title_seen = false;
    let mut stack = vec![document.root()];

    while let Some(id) = stack.pop() {
        match document.kind(id) {
            NodeKind::Doctype(attributes) => {
                // Last doctype wins, though real documents have at most one
                report.html_version = classify_doctype(attributes).to_string();
                debug!(version = %report.html_version, "doctype found");
            }
            NodeKind::Element(element) => {
                visit_element(document, id, element, origin, &mut report, &mut title_seen)
            }
            NodeKind::Document | NodeKind::Text(_) | NodeKind::Comment(_) => {}
        }

        stack.extend(document.children(id).iter().rev().copied());
    }

    report
}

fn visit_element(
    document: &Document,
    id: NodeId,
    element: &Element,
    origin: &str,
    report: &mut AnalysisReport,
    title_seen: &mut bool,
) {
    match Tag::from_name(&element.name) {
        Tag::Anchor => {
            let Some(href) = element.attr("href") else {
                debug!("skipping anchor without href attribute");
                return;
            };
            record_link(report, href, origin);
        }
        Tag::Form => report.contains_form = true,
        Tag::Title => {
            if *title_seen {
                return;
            }
            // Only a text first child counts; a <title> without one leaves
            // the slot open for a later one
            if let Some(NodeKind::Text(text)) = document.first_child(id).map(|child| document.kind(child)) {
                report.page_title = text.clone();
                *title_seen = true;
            }
        }
        Tag::Heading(level) => report.heading_counts.increment(level),
        Tag::Other => {}
    }
}

// Puts the href into exactly one of the three link lists
fn record_link(report: &mut AnalysisReport, href: &str, origin: &str) {
    let link = match classify_link(href, origin) {
        Ok(link) => link,
        Err(e) => {
            // Only this link is affected; it can't be judged without an origin
            warn!(href, error = %e, "failed to classify link, recording it as inaccessible");
            Link {
                href: href.to_string(),
                is_accessible: false,
                is_external: false,
            }
        }
    };

    if link.is_external {
        report.external_links.push(link.href);
    } else if link.is_accessible {
        report.accessible_internal_links.push(link.href);
    } else {
        report.inaccessible_internal_links.push(link.href);
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Vec as a stack?
//    - push() and pop() both work on the end of a Vec, so it is a stack
//    - Popping the last pushed node first gives depth-first order
//    - Children are pushed reversed so the first child is popped first
//
// 2. What is let-else?
//    - let Some(href) = element.attr("href") else { ... };
//    - Binds href if the pattern matches, otherwise runs the else block,
//      which must leave the function (return, continue, panic, ...)
//
// 3. Why does analyse() take &Document?
//    - It only reads the tree, so a shared borrow is enough
//    - Several threads can analyse the same Document at once
// -----------------------------------------------------------------------------
