//! The typed lexical-entry model built up by the section handlers.
//!
//! Field order and JSON names follow the output format consumed by the
//! downstream tooling (`lang`, `lang-code`, `etym`, `pron`, `trans`, ...).
//! All lists are append-only during extraction: "current etymology" and
//! "current part of speech" always mean the last element of the matching
//! list, never a separately tracked pointer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Helper function for serde skip_serializing_if
fn is_false(b: &bool) -> bool {
    !*b
}

/// How a linked word relates to the entry word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// A reconstructed root form, usually in a proto-language.
    Root,
    /// An ancestor by unbroken transmission (also covers the borrowed,
    /// calque, semantic-loan and derived template variants, which are
    /// recorded through the modifier flags).
    Inherited,
    /// A word in another language sharing a common ancestor.
    Cognate,
    /// A word in another language descended from the entry word.
    Descendant,
}

/// One word-to-word relationship edge extracted from an etymology or
/// descendants section. Edges are one hop only; they are never resolved
/// into a connected tree here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedWord {
    #[serde(rename = "type")]
    pub relationship: Relationship,
    #[serde(rename = "lang")]
    pub language: String,
    pub word: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub meaning: String,
    #[serde(rename = "translit", default, skip_serializing_if = "String::is_empty")]
    pub transliteration: String,

    // Independent modifier flags, orthogonal to the relationship.
    #[serde(default, skip_serializing_if = "is_false")]
    pub borrowed: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub calque: bool,
    #[serde(rename = "semantic-loan", default, skip_serializing_if = "is_false")]
    pub semantic_loan: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub derived: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub unclear: bool,
}

impl LinkedWord {
    pub fn new(relationship: Relationship) -> Self {
        LinkedWord {
            relationship,
            language: String::new(),
            word: String::new(),
            meaning: String::new(),
            transliteration: String::new(),
            borrowed: false,
            calque: false,
            semantic_loan: false,
            derived: false,
            unclear: false,
        }
    }

    /// A link is only worth keeping if it has a real target word.
    /// Wiktionary uses "-" as a placeholder for an unattested form.
    pub fn has_target(&self) -> bool {
        !self.word.is_empty() && self.word != "-"
    }
}

/// One translation of a sense into another language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedWord {
    #[serde(rename = "lang")]
    pub language: String,
    pub word: String,
    #[serde(rename = "translit", default, skip_serializing_if = "String::is_empty")]
    pub transliteration: String,
}

/// One part-of-speech section: headword, grammatical attributes,
/// meanings and translations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeech {
    pub name: String,
    #[serde(rename = "head", default, skip_serializing_if = "String::is_empty")]
    pub headword: String,
    #[serde(rename = "attrs", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meanings: Vec<String>,
    #[serde(rename = "trans", default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<TranslatedWord>,
    #[serde(rename = "syn", default, skip_serializing_if = "String::is_empty")]
    pub synonyms: String,
    #[serde(rename = "ant", default, skip_serializing_if = "String::is_empty")]
    pub antonyms: String,
}

impl PartOfSpeech {
    pub fn new(name: &str) -> Self {
        PartOfSpeech {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Insert a grammatical attribute, keeping earlier values on collision.
    /// Two table cells can map to the same grammatical slot (spelling
    /// variants); the later one gets an incrementing "|altN" suffix.
    pub fn add_attribute(&mut self, label: &str, value: String) {
        if !self.attributes.contains_key(label) {
            self.attributes.insert(label.to_string(), value);
            return;
        }
        let mut version = 2;
        loop {
            let alt_label = format!("{}|alt{}", label, version);
            if !self.attributes.contains_key(&alt_label) {
                self.attributes.insert(alt_label, value);
                return;
            }
            version += 1;
        }
    }
}

/// One etymology section: the origin narrative, relationship edges and
/// the part-of-speech sections that fall under it. Homographs split into
/// several of these per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etymology {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<LinkedWord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<PartOfSpeech>,
    #[serde(rename = "pron", default, skip_serializing_if = "Vec::is_empty")]
    pub pronunciations: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipa: String,
    #[serde(rename = "alts", default, skip_serializing_if = "String::is_empty")]
    pub alternative_forms: String,
}

/// A fully extracted entry for one word/language pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageWord {
    pub word: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub meaning: String,
    #[serde(rename = "lang")]
    pub language_name: String,
    #[serde(rename = "lang-code")]
    pub language_code: String,
    // Entry-level pronunciation, used only when the entry has no
    // per-etymology split at the time the Pronunciation section appears.
    #[serde(rename = "pron", default, skip_serializing_if = "Vec::is_empty")]
    pub pronunciations: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipa: String,
    #[serde(rename = "etym", default, skip_serializing_if = "Vec::is_empty")]
    pub etymologies: Vec<Etymology>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub anagrams: String,
}

impl LanguageWord {
    pub fn current_etymology_mut(&mut self) -> Option<&mut Etymology> {
        self.etymologies.last_mut()
    }

    pub fn current_part_mut(&mut self) -> Option<&mut PartOfSpeech> {
        self.etymologies.last_mut()?.parts.last_mut()
    }

    /// The last etymology, creating a placeholder if none exists yet.
    /// Some entries open with a part-of-speech section directly; the part
    /// must never be orphaned.
    pub fn ensure_etymology(&mut self) -> &mut Etymology {
        if self.etymologies.is_empty() {
            self.etymologies.push(Etymology {
                name: "Etymology".to_string(),
                ..Default::default()
            });
        }
        self.etymologies.last_mut().expect("just pushed")
    }
}
