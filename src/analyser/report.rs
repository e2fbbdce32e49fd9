// src/analyser/report.rs
// =============================================================================
// The result of analysing one document.
//
// A report is filled in during a single tree walk and handed back to the
// caller. Nothing outside this crate can change it afterwards: the fields
// are read through accessor methods, and the link lists only grow through
// crate-private methods.
// =============================================================================

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Heading levels h1 through h6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    // Maps a tag name like "h3" to its level
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }
}

/// Number of headings seen at each level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingCounts {
    pub fn get(&self, level: HeadingLevel) -> usize {
        match level {
            HeadingLevel::H1 => self.h1,
            HeadingLevel::H2 => self.h2,
            HeadingLevel::H3 => self.h3,
            HeadingLevel::H4 => self.h4,
            HeadingLevel::H5 => self.h5,
            HeadingLevel::H6 => self.h6,
        }
    }

    pub(crate) fn increment(&mut self, level: HeadingLevel) {
        let counter = match level {
            HeadingLevel::H1 => &mut self.h1,
            HeadingLevel::H2 => &mut self.h2,
            HeadingLevel::H3 => &mut self.h3,
            HeadingLevel::H4 => &mut self.h4,
            HeadingLevel::H5 => &mut self.h5,
            HeadingLevel::H6 => &mut self.h6,
        };
        *counter += 1;
    }

    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }
}

/// Ordered hrefs of one link category.
///
/// The count is always the length of the list, so the two can never
/// disagree. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList {
    links: Vec<String>,
}

impl LinkList {
    pub fn count(&self) -> usize {
        self.links.len()
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub(crate) fn push(&mut self, href: String) {
        self.links.push(href);
    }
}

// Serialized as { "count": N, "links": [...] } so JSON consumers get the
// count without computing it
impl Serialize for LinkList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LinkList", 2)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("links", &self.links)?;
        state.end()
    }
}

/// Everything the analyser found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub(crate) html_version: String,
    pub(crate) page_title: String,
    pub(crate) heading_counts: HeadingCounts,
    pub(crate) accessible_internal_links: LinkList,
    pub(crate) inaccessible_internal_links: LinkList,
    pub(crate) external_links: LinkList,
    pub(crate) contains_form: bool,
}

impl AnalysisReport {
    /// Declared HTML version, empty when it could not be determined
    pub fn html_version(&self) -> &str {
        &self.html_version
    }

    /// Text of the first `<title>`, empty when there is none
    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn heading_counts(&self) -> &HeadingCounts {
        &self.heading_counts
    }

    pub fn accessible_internal_links(&self) -> &LinkList {
        &self.accessible_internal_links
    }

    pub fn inaccessible_internal_links(&self) -> &LinkList {
        &self.inaccessible_internal_links
    }

    pub fn external_links(&self) -> &LinkList {
        &self.external_links
    }

    pub fn contains_form(&self) -> bool {
        self.contains_form
    }

    // Flattens the report into (name, value) rows for display
    //
    // The names are the ones a template would bind to, e.g. "h1Count".
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let headings = &self.heading_counts;
        vec![
            ("htmlVersion", self.html_version.clone()),
            ("pageTitle", self.page_title.clone()),
            ("h1Count", headings.h1.to_string()),
            ("h2Count", headings.h2.to_string()),
            ("h3Count", headings.h3.to_string()),
            ("h4Count", headings.h4.to_string()),
            ("h5Count", headings.h5.to_string()),
            ("h6Count", headings.h6.to_string()),
            (
                "accessibleInternalLinkCount",
                self.accessible_internal_links.count().to_string(),
            ),
            // Spelled the way existing templates already bind it
            (
                "unaccessibleInternalLinkCount",
                self.inaccessible_internal_links.count().to_string(),
            ),
            ("externalLinkCount", self.external_links.count().to_string()),
            ("containsForm", self.contains_form.to_string()),
        ]
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does pub(crate) mean?
//    - The item is visible everywhere inside this crate, but not to users
//      of the library
//    - The walker can push links and bump counters, callers can only read
//
// 2. Why implement Serialize by hand for LinkList?
//    - #[derive(Serialize)] would only write the fields that exist
//    - count isn't stored (it's links.len()), so we add it ourselves
//    - serialize_struct + serialize_field is what the derive generates anyway
//
// 3. What does #[serde(rename_all = "camelCase")] do?
//    - Field page_title is written to JSON as "pageTitle"
//    - The Rust names stay snake_case
//
// 4. Why &'static str in rows()?
//    - The row names are string literals baked into the binary
//    - They live for the whole program, so no allocation is needed
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_from_tag() {
        assert_eq!(HeadingLevel::from_tag("h1"), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_tag("h6"), Some(HeadingLevel::H6));
        assert_eq!(HeadingLevel::from_tag("h7"), None);
        assert_eq!(HeadingLevel::from_tag("header"), None);
    }

    #[test]
    fn test_heading_counts_increment() {
        let mut counts = HeadingCounts::default();
        counts.increment(HeadingLevel::H2);
        counts.increment(HeadingLevel::H2);
        counts.increment(HeadingLevel::H5);

        assert_eq!(counts.get(HeadingLevel::H1), 0);
        assert_eq!(counts.get(HeadingLevel::H2), 2);
        assert_eq!(counts.get(HeadingLevel::H5), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_link_list_count_follows_links() {
        let mut list = LinkList::default();
        list.push("/a".to_string());
        list.push("/a".to_string());
        assert_eq!(list.count(), 2);
        assert_eq!(list.links(), &["/a".to_string(), "/a".to_string()]);
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = AnalysisReport::default();
        report.html_version = "HTML 5".to_string();
        report.external_links.push("https://example.org".to_string());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["htmlVersion"], "HTML 5");
        assert_eq!(json["externalLinks"]["count"], 1);
        assert_eq!(json["externalLinks"]["links"][0], "https://example.org");
        assert_eq!(json["headingCounts"]["h1"], 0);
        assert_eq!(json["containsForm"], false);
    }

    #[test]
    fn test_rows_use_template_names() {
        let report = AnalysisReport::default();
        let rows = report.rows();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0], ("htmlVersion", String::new()));
        assert!(rows.contains(&("externalLinkCount", "0".to_string())));
        assert!(rows.contains(&("containsForm", "false".to_string())));
    }

    #[test]
    fn test_rows_keep_template_spelling_for_inaccessible_links() {
        let mut report = AnalysisReport::default();
        report.inaccessible_internal_links.push("#top".to_string());

        let rows = report.rows();
        assert_eq!(rows[9], ("unaccessibleInternalLinkCount", "1".to_string()));
        assert!(!rows.iter().any(|(name, _)| *name == "inaccessibleInternalLinkCount"));
    }
}
