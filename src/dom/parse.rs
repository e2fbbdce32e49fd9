// src/dom/parse.rs
// =============================================================================
// Turns raw HTML into our arena Document.
//
// We let `scraper` (html5ever underneath) do the actual parsing, since it
// follows the HTML5 parsing algorithm and copes with broken markup. Its tree
// is then copied node by node into a Document, which owns plain Strings and
// so can be sent across threads and kept after the scraper tree is dropped.
// =============================================================================

use scraper::{Html, Node as ScraperNode};

use super::tree::{Attribute, Document, Element, NodeId, NodeKind};

// Parses a complete HTML document
//
// Example:
//   parse_document("<!DOCTYPE html><title>Hi</title>")
//   -> Document > Doctype, html > head > title > "Hi", body
pub fn parse_document(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let mut document = Document::new();

    // Explicit stack of (scraper node, parent in our tree) pairs.
    // Children are pushed in reverse so they pop off in document order,
    // which means siblings are appended to their parent in the right order.
    let mut stack: Vec<_> = parsed
        .tree
        .root()
        .children()
        .rev()
        .map(|child| (child, NodeId::ROOT))
        .collect();

    while let Some((node, parent)) = stack.pop() {
        let kind = match node.value() {
            ScraperNode::Doctype(doctype) => NodeKind::Doctype(doctype_attributes(
                html,
                doctype.public_id(),
                doctype.system_id(),
            )),
            ScraperNode::Element(element) => NodeKind::Element(Element {
                name: element.name().to_string(),
                attributes: element
                    .attrs()
                    .map(|(key, value)| Attribute::new(key, value))
                    .collect(),
            }),
            ScraperNode::Text(text) => {
                let content: &str = text;
                NodeKind::Text(content.to_string())
            }
            ScraperNode::Comment(comment) => {
                let content: &str = comment;
                NodeKind::Comment(content.to_string())
            }
            // Nested documents and processing instructions carry nothing
            // the analyser looks at
            _ => continue,
        };

        let id = document.append(parent, kind);
        stack.extend(node.children().rev().map(|child| (child, id)));
    }

    document
}

// A doctype gets a `public` or `system` attribute for every keyword that is
// followed by a quoted identifier, even an empty one, so `<!DOCTYPE html>`
// has none while `<!DOCTYPE html PUBLIC "">` has `public=""`.
//
// scraper reports a missing identifier and an empty one both as "", so the
// declaration is read back from the source. If what was read doesn't agree
// with what scraper parsed, only the non-empty identifiers are kept.
fn doctype_attributes(html: &str, public_id: &str, system_id: &str) -> Vec<Attribute> {
    if let Some(declared) = declared_identifiers(html) {
        let agrees = [("public", public_id), ("system", system_id)]
            .iter()
            .all(|&(key, parsed)| {
                let written = declared
                    .iter()
                    .find(|attribute| attribute.key == key)
                    .map_or("", |attribute| attribute.value.as_str());
                written == parsed
            });
        if agrees {
            return declared;
        }
    }

    let mut attributes = Vec::new();
    if !public_id.is_empty() {
        attributes.push(Attribute::new("public", public_id));
    }
    if !system_id.is_empty() {
        attributes.push(Attribute::new("system", system_id));
    }
    attributes
}

// Reads the identifiers of the first `<!DOCTYPE ...>` in the source
//
// After the name comes an optional PUBLIC or SYSTEM keyword (any case).
// Each quoted string after it becomes an attribute: a public identifier
// may be followed by a system one, a system identifier ends the list.
// An unterminated quote runs to the end of the declaration.
//
// Returns None when the source has no doctype declaration.
fn declared_identifiers(html: &str) -> Option<Vec<Attribute>> {
    const OPEN: &str = "<!doctype";

    // ASCII lowercasing keeps byte offsets, so they index into `html` too
    let start = html.to_ascii_lowercase().find(OPEN)? + OPEN.len();
    let rest = &html[start..];
    let declaration = &rest[..rest.find('>').unwrap_or(rest.len())];

    let declaration = declaration.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let name_end = declaration
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(declaration.len());
    let mut remaining = declaration[name_end..].trim_start_matches(|c: char| c.is_ascii_whitespace());

    let mut attributes = Vec::new();
    let Some(keyword) = remaining.get(..6) else {
        return Some(attributes);
    };
    let mut key = match keyword.to_ascii_lowercase().as_str() {
        "public" => Some("public"),
        "system" => Some("system"),
        _ => None,
    };
    remaining = &remaining[6..];

    while let Some(current) = key {
        remaining = remaining.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let quote = match remaining.chars().next() {
            Some(quote @ ('"' | '\'')) => quote,
            _ => break,
        };
        remaining = &remaining[1..];

        let (id, after) = match remaining.find(quote) {
            Some(end) => (&remaining[..end], &remaining[end + 1..]),
            None => (remaining, ""),
        };
        attributes.push(Attribute::new(current, id));
        remaining = after;

        key = (current == "public").then_some("system");
    }

    Some(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_element(doc: &Document, name: &str) -> Option<NodeId> {
        let mut stack = vec![doc.root()];
        while let Some(id) = stack.pop() {
            if let NodeKind::Element(element) = doc.kind(id) {
                if element.name == name {
                    return Some(id);
                }
            }
            stack.extend(doc.children(id).iter().rev());
        }
        None
    }

    #[test]
    fn test_html5_doctype_has_no_attributes() {
        let doc = parse_document("<!DOCTYPE html><html><head></head><body></body></html>");
        let first = doc.first_child(doc.root()).unwrap();
        assert_eq!(doc.kind(first), &NodeKind::Doctype(vec![]));
    }

    #[test]
    fn test_legacy_doctype_keeps_identifiers() {
        let doc = parse_document(
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd"><html></html>"#,
        );
        let first = doc.first_child(doc.root()).unwrap();
        assert_eq!(
            doc.kind(first),
            &NodeKind::Doctype(vec![
                Attribute::new("public", "-//W3C//DTD HTML 4.01//EN"),
                Attribute::new("system", "http://www.w3.org/TR/html4/strict.dtd"),
            ])
        );
    }

    #[test]
    fn test_empty_public_identifier_is_kept() {
        let doc = parse_document(r#"<!DOCTYPE html PUBLIC ""><html></html>"#);
        let first = doc.first_child(doc.root()).unwrap();
        assert_eq!(doc.kind(first), &NodeKind::Doctype(vec![Attribute::new("public", "")]));
    }

    #[test]
    fn test_empty_system_identifier_is_kept() {
        let doc = parse_document("<!doctype html system ''><html></html>");
        let first = doc.first_child(doc.root()).unwrap();
        assert_eq!(doc.kind(first), &NodeKind::Doctype(vec![Attribute::new("system", "")]));
    }

    #[test]
    fn test_declared_identifiers() {
        assert_eq!(declared_identifiers("<html></html>"), None);
        assert_eq!(declared_identifiers("<!DOCTYPE html>"), Some(vec![]));
        assert_eq!(declared_identifiers("<!DOCTYPE html PUBLIC>"), Some(vec![]));
        assert_eq!(
            declared_identifiers(r#"<!DocType html Public "a" 'b'>"#),
            Some(vec![Attribute::new("public", "a"), Attribute::new("system", "b")])
        );
        // A system identifier ends the list
        assert_eq!(
            declared_identifiers(r#"<!DOCTYPE html SYSTEM "a" "b">"#),
            Some(vec![Attribute::new("system", "a")])
        );
        // An unterminated quote runs to the end of the declaration
        assert_eq!(
            declared_identifiers(r#"<!DOCTYPE html PUBLIC "abc>"#),
            Some(vec![Attribute::new("public", "abc")])
        );
    }

    #[test]
    fn test_title_text_is_first_child() {
        let doc = parse_document("<html><head><title>Test Page</title></head></html>");
        let title = find_element(&doc, "title").unwrap();
        let text = doc.first_child(title).unwrap();
        assert_eq!(doc.kind(text), &NodeKind::Text("Test Page".to_string()));
    }

    #[test]
    fn test_children_keep_document_order() {
        let doc = parse_document("<body><h1>a</h1><h2>b</h2><h3>c</h3></body>");
        let body = find_element(&doc, "body").unwrap();
        let names: Vec<_> = doc
            .children(body)
            .iter()
            .filter_map(|&id| match doc.kind(id) {
                NodeKind::Element(element) => Some(element.name.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["h1", "h2", "h3"]);
    }

    #[test]
    fn test_anchor_attributes_are_copied() {
        let doc = parse_document(r#"<a href="/docs">Docs</a>"#);
        let anchor = find_element(&doc, "a").unwrap();
        match doc.kind(anchor) {
            NodeKind::Element(element) => assert_eq!(element.attr("href"), Some("/docs")),
            other => panic!("expected element, got {:?}", other),
        }
    }
}
