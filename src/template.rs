//! Template-tag parsing: locating `{{...}}` constructs in a line and
//! decomposing them into positional and named arguments.
//!
//! Tag extraction is deliberately non-recursive: the non-greedy pattern
//! stops at the first `}}`, so a nested template yields a truncated
//! outer tag. Nested templates are rare in the sections we read and the
//! malformed-tag policy (missing slots default to empty) absorbs them.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"\{\{(.*?)\}\}").unwrap();
    // The translation-tag family: t, t+, tt, tt+.
    static ref TRANSLATION_TAG: Regex = Regex::new(r"\{\{(t.*?)\}\}").unwrap();
}

/// A decomposed template tag.
///
/// An argument is named iff its raw text contains '='. A named token
/// still consumes its ordinal position: in `{{a|b|c=d|e}}` the argument
/// `e` sits at slot 3, not slot 2. Headword templates rely on this
/// numbering, so it is preserved exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    positional: HashMap<usize, String>,
    named: HashMap<String, String>,
}

impl Tag {
    /// Parse the interior of a tag. Surrounding braces are tolerated so
    /// whole `{{...}}` matches and bare interiors both work.
    pub fn parse(raw: &str) -> Tag {
        let mut tag = Tag::default();
        let interior = raw.trim_matches(|c| c == '{' || c == '}');
        for (index, token) in interior.split('|').enumerate() {
            match token.split_once('=') {
                Some((key, value)) => {
                    tag.named.insert(key.to_string(), value.to_string());
                }
                None => {
                    tag.positional.insert(index, token.to_string());
                }
            }
        }
        tag
    }

    /// The tag name (slot 0), or "" for a degenerate tag.
    pub fn name(&self) -> &str {
        self.slot(0).unwrap_or("")
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.positional.get(&index).map(String::as_str)
    }

    pub fn named(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    pub fn has_named(&self, key: &str) -> bool {
        self.named.contains_key(key)
    }

    /// Slot value or "" when absent; unexpected arity never fails.
    pub fn slot_or_empty(&self, index: usize) -> String {
        self.slot(index).unwrap_or("").to_string()
    }
}

/// All non-nested template tags on a line, in order.
pub fn all_tags(line: &str) -> Vec<Tag> {
    TAG.captures_iter(line)
        .map(|cap| Tag::parse(&cap[1]))
        .collect()
}

/// The first translation-family tag on the line: `{{t|..}}`,
/// `{{t+|..}}`, `{{tt|..}}` or `{{tt+|..}}`.
pub fn translation_tag(line: &str) -> Option<Tag> {
    let cap = TRANSLATION_TAG.captures(line)?;
    Some(Tag::parse(&cap[1]))
}
