//! Line patterns shared by the locator functions.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#` immediately followed by a word character, e.g. `#project`.
static LEGACY_METADATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\w").expect("valid legacy metadata regex"));
/// Heading levels 1-5 followed by whitespace.
static PREPEND_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,5}\s").expect("valid heading regex"));
static METADATA_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:project|metadata):").expect("valid metadata key regex"));
static REVIEW_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@review(?:ed)?\(.+\)").expect("valid review mention regex"));

/// Lines that begin with a hashtag, used for metadata before frontmatter.
pub fn is_legacy_metadata(line: &str) -> bool {
    LEGACY_METADATA_RE.is_match(line)
}

pub fn is_prepend_heading(line: &str) -> bool {
    PREPEND_HEADING_RE.is_match(line)
}

/// `project:` / `metadata:` keys, a leading hashtag, or a review mention.
pub fn is_metadata_line(line: &str) -> bool {
    METADATA_KEY_RE.is_match(line)
        || LEGACY_METADATA_RE.is_match(line)
        || REVIEW_MENTION_RE.is_match(line)
}
