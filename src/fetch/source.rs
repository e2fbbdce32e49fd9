// src/fetch/source.rs
// =============================================================================
// Where a document comes from: a web page or a file on disk.
//
// The user types a single string. If it is an http(s) URL with a host we
// download it, otherwise we treat it as a path. Strings that clearly try to
// be URLs but can't be fetched (ftp://, https:// with no host, ...) are
// rejected up front with a helpful message rather than looked up on disk.
// =============================================================================

use std::fmt;
use std::path::PathBuf;

use url::Url;

use super::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An absolute http or https URL
    Url(Url),
    /// A local HTML file
    File(PathBuf),
}

impl Source {
    // Parses user input into a Source
    //
    // Examples:
    //   "https://example.com"  -> Source::Url
    //   "pages/index.html"     -> Source::File
    //   "file:///tmp/a.html"   -> Source::File("/tmp/a.html")
    //   "ftp://example.com"    -> Err(InvalidSource)
    //   ""                     -> Err(InvalidSource)
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FetchError::InvalidSource("source must not be empty".to_string()));
        }

        let url = match Url::parse(raw) {
            Ok(url) => url,
            // No scheme at all, so it's a path
            Err(url::ParseError::RelativeUrlWithoutBase) => return Ok(Source::File(PathBuf::from(raw))),
            Err(e) => {
                return Err(FetchError::InvalidSource(format!(
                    "'{}' is not a valid URL ({}), please enter a valid host and scheme",
                    raw, e
                )))
            }
        };

        match url.scheme() {
            "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(Source::Url(url)),
            "file" => url.to_file_path().map(Source::File).map_err(|_| {
                FetchError::InvalidSource(format!("'{}' is not a usable file URL", raw))
            }),
            // A single letter "scheme" is a Windows drive, e.g. C:\pages\a.html
            scheme if scheme.len() == 1 => Ok(Source::File(PathBuf::from(raw))),
            _ => Err(FetchError::InvalidSource(format!(
                "'{}' is not a valid URL, please enter a valid host and scheme",
                raw
            ))),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an enum for Source?
//    - A source is either a URL or a file, never both
//    - match forces every caller to handle both cases
//    - Each variant carries the data that case needs (a Url or a PathBuf)
//
// 2. What is a match guard?
//    - "http" | "https" if url.host_str()... only matches when the
//      condition after `if` is also true
//    - Otherwise matching falls through to the next arm
//
// 3. Why implement fmt::Display?
//    - It lets us write format!("{}", source) and %source in log fields
//    - path.display() is needed because paths aren't always valid UTF-8
//
// 4. Why does parse() trim the input?
//    - Copy-pasted URLs often carry a stray space or newline
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url() {
        let source = Source::parse("https://www.google.com").unwrap();
        assert!(matches!(source, Source::Url(ref url) if url.host_str() == Some("www.google.com")));
    }

    #[test]
    fn test_parse_relative_path() {
        let source = Source::parse("res/test.html").unwrap();
        assert_eq!(source, Source::File(PathBuf::from("res/test.html")));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let source = Source::parse("  ./index.html \n").unwrap();
        assert_eq!(source, Source::File(PathBuf::from("./index.html")));
    }

    #[test]
    fn test_parse_empty_is_rejected() {
        assert!(matches!(Source::parse("   "), Err(FetchError::InvalidSource(_))));
    }

    #[test]
    fn test_parse_unsupported_scheme_is_rejected() {
        assert!(matches!(Source::parse("ftp://example.com/a.html"), Err(FetchError::InvalidSource(_))));
        assert!(matches!(Source::parse("mailto:someone@example.com"), Err(FetchError::InvalidSource(_))));
        assert!(matches!(Source::parse("https://"), Err(FetchError::InvalidSource(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_file_url() {
        let source = Source::parse("file:///tmp/page.html").unwrap();
        assert_eq!(source, Source::File(PathBuf::from("/tmp/page.html")));
    }
}
