// src/analyser/doctype.rs
// =============================================================================
// Works out which HTML version a document declares.
//
// HTML 5 documents use a bare `<!DOCTYPE html>` with no identifiers. Older
// documents name their DTD through a public identifier, and there are seven
// well-known ones. Anything else is reported as an empty string: we simply
// don't know the version, which is not an error.
// =============================================================================

use crate::dom::Attribute;

/// HTML versions recognised from a doctype declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlVersion {
    Html5,
    Html401Strict,
    Html401Transitional,
    Html401Frameset,
    Xhtml10Strict,
    Xhtml10Transitional,
    Xhtml10Frameset,
    Xhtml11,
}

// Public identifier -> version, for every pre-HTML5 version we know
const PUBLIC_IDENTIFIERS: [(&str, HtmlVersion); 7] = [
    ("-//W3C//DTD HTML 4.01//EN", HtmlVersion::Html401Strict),
    ("-//W3C//DTD HTML 4.01 Transitional//EN", HtmlVersion::Html401Transitional),
    ("-//W3C//DTD HTML 4.01 Frameset//EN", HtmlVersion::Html401Frameset),
    ("-//W3C//DTD XHTML 1.0 Strict//EN", HtmlVersion::Xhtml10Strict),
    ("-//W3C//DTD XHTML 1.0 Transitional//EN", HtmlVersion::Xhtml10Transitional),
    ("-//W3C//DTD XHTML 1.0 Frameset//EN", HtmlVersion::Xhtml10Frameset),
    ("-//W3C//DTD XHTML 1.1//EN", HtmlVersion::Xhtml11),
];

impl HtmlVersion {
    /// Human-readable name shown in reports
    pub fn label(self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "HTML 5",
            HtmlVersion::Html401Strict => "HTML v4.01 Strict",
            HtmlVersion::Html401Transitional => "HTML v4.01 Transitional",
            HtmlVersion::Html401Frameset => "HTML v4.01 Frameset",
            HtmlVersion::Xhtml10Strict => "XHTML v1 Strict",
            HtmlVersion::Xhtml10Transitional => "XHTML v1 Transitional",
            HtmlVersion::Xhtml10Frameset => "XHTML v1 Frameset",
            HtmlVersion::Xhtml11 => "XHTML v1.1",
        }
    }

    // Looks up a public identifier, exact match only
    pub fn from_public_identifier(identifier: &str) -> Option<Self> {
        PUBLIC_IDENTIFIERS
            .iter()
            .find(|(known, _)| *known == identifier)
            .map(|(_, version)| *version)
    }

    // Determines the version from doctype attributes
    //
    // Only the first `public` attribute is considered.
    pub fn detect(attributes: &[Attribute]) -> Option<Self> {
        if attributes.is_empty() {
            return Some(HtmlVersion::Html5);
        }

        attributes
            .iter()
            .find(|a| a.key == "public")
            .and_then(|a| Self::from_public_identifier(&a.value))
    }
}

// Returns the version label for a doctype, or "" when undetermined
//
// Examples:
//   []                                               -> "HTML 5"
//   [public = "-//W3C//DTD HTML 4.01//EN"]           -> "HTML v4.01 Strict"
//   [system = "about:legacy-compat"]                 -> ""
pub fn classify_doctype(attributes: &[Attribute]) -> &'static str {
    HtmlVersion::detect(attributes).map_or("", HtmlVersion::label)
}
