//! XML entity handling for part payloads.
//!
//! Generated parts escape every text and attribute write; the reader
//! unescapes attribute values and run text on the way in. Both directions
//! run over lazily built Aho-Corasick automatons so repeated slide writes
//! never rebuild the pattern tables.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

/// The five standard entities, character form and entity form, index-aligned.
const CHARS: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

static ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(CHARS).expect("escape automaton"));

// LeftmostLongest so the full entity wins over the bare & it starts with
static UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ENTITIES)
        .expect("unescape automaton")
});

/// Escape the five standard XML entities in `s`.
///
/// # Examples
///
/// ```
/// use pitaya::common::escape_xml;
/// assert_eq!(escape_xml("Plan & Actual"), "Plan &amp; Actual");
/// assert_eq!(escape_xml("x < 'y'"), "x &lt; &apos;y&apos;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    ESCAPER.replace_all(s, &ENTITIES)
}

/// Replace the five standard XML entities in `s` with their characters.
///
/// Anything that is not one of the five, including malformed or exotic
/// entities, passes through untouched.
///
/// # Examples
///
/// ```
/// use pitaya::common::unescape_xml;
/// assert_eq!(unescape_xml("Q1 &amp; Q2"), "Q1 & Q2");
/// assert_eq!(unescape_xml("&#169; &nbsp;"), "&#169; &nbsp;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    UNESCAPER.replace_all(s, &CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_then_unescape_is_identity() {
        let original = r#"<tbl name="Q1 & Q2">'s</tbl>"#;
        assert_eq!(unescape_xml(&escape_xml(original)), original);
    }

    #[test]
    fn plain_text_passes_through_both_ways() {
        assert_eq!(escape_xml("plain text 123"), "plain text 123");
        assert_eq!(unescape_xml("plain text 123"), "plain text 123");
    }

    #[test]
    fn double_escaped_input_unescapes_one_level() {
        // &amp;lt; is the escaped form of &lt;, not of <
        assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
    }
}
