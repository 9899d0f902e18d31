//! Syntactic URL checks.
//!
//! Decides whether a submitted string is an absolute `http`/`https` URL and
//! whether its host needs a resolution check. The submitted string is kept
//! verbatim; the registry deduplicates on exact text, so nothing here rewrites
//! the URL.

use url::{Host, Url};

/// Errors that can occur while parsing a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlParseError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// A submitted URL that passed the syntactic checks.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    original: String,
    url: Url,
}

impl ParsedUrl {
    /// The string exactly as it was submitted.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The host that must resolve before the URL is accepted.
    ///
    /// `None` for `localhost` and IP literals, which are accepted as-is.
    pub fn host_to_resolve(&self) -> Option<&str> {
        match self.url.host()? {
            Host::Domain(domain) if domain.eq_ignore_ascii_case("localhost") => None,
            Host::Domain(domain) => Some(domain),
            Host::Ipv4(_) | Host::Ipv6(_) => None,
        }
    }
}

/// Parses `input` as an absolute HTTP or HTTPS URL.
///
/// # Errors
///
/// Returns [`UrlParseError::Empty`] for empty or whitespace-only input.
/// Returns [`UrlParseError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlParseError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// let parsed = parse_http_url("https://www.freecodecamp.org").unwrap();
/// assert_eq!(parsed.as_str(), "https://www.freecodecamp.org");
/// assert_eq!(parsed.host_to_resolve(), Some("www.freecodecamp.org"));
///
/// assert!(parse_http_url("ftp://example.com").is_err());
/// ```
pub fn parse_http_url(input: &str) -> Result<ParsedUrl, UrlParseError> {
    if input.trim().is_empty() {
        return Err(UrlParseError::Empty);
    }

    let url = Url::parse(input)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlParseError::UnsupportedProtocol),
    }

    Ok(ParsedUrl {
        original: input.to_owned(),
        url,
    })
}
