//! Validation and normalization of user-submitted URLs.
//!
//! Input is accepted if it parses as an absolute `http`/`https` URL whose host
//! is a single label followed by an alphabetic top-level domain, with no
//! explicit port. Input that fails is retried once with `https://` prepended,
//! so bare `example.com/path` is accepted as `https://example.com/path`.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Accepted host shape: one label, a dot, and a TLD of at least two letters.
static HOST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+\.[a-zA-Z]{2,}$").unwrap());

/// Scheme assumed when the input has none.
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Reasons a URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUrlError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL: {0}")]
    Malformed(String),
}

/// Validates `input` and returns its normalized form.
///
/// The returned string is the parser's serialization, not the input bytes:
/// the host is lowercased and an empty path becomes `/`. Any explicit port,
/// including the scheme's default, makes the input unacceptable.
///
/// # Errors
///
/// Returns [`InvalidUrlError::Empty`] for empty or whitespace-only input.
/// Returns [`InvalidUrlError::Malformed`] if neither `input` nor
/// `https://{input}` is acceptable.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("http://example.com").unwrap(), "http://example.com/");
/// assert_eq!(validate_url("example.com/a?b=c").unwrap(), "https://example.com/a?b=c");
/// assert!(validate_url("ex-a-mple").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<String, InvalidUrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InvalidUrlError::Empty);
    }

    parse_acceptable(input)
        .or_else(|| parse_acceptable(&format!("{DEFAULT_SCHEME_PREFIX}{input}")))
        .map(String::from)
        .ok_or_else(|| InvalidUrlError::Malformed(input.to_string()))
}

fn parse_acceptable(candidate: &str) -> Option<Url> {
    let url = Url::parse(candidate).ok()?;

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    // The parser forgets default ports, so the raw authority is checked too.
    if url.port().is_some() || has_explicit_port(candidate) {
        return None;
    }

    let host = url.host_str().filter(|host| !host.is_empty())?;
    HOST_PATTERN.is_match(host).then_some(url)
}

fn has_explicit_port(candidate: &str) -> bool {
    let Some((_, rest)) = candidate.split_once("://") else {
        return false;
    };

    let authority = rest.split(['/', '\\', '?', '#']).next().unwrap_or_default();
    let host_and_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    host_and_port.contains(':')
}
