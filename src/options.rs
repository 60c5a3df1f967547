//! Per-request selection of which sections to extract.
//!
//! Every toggle gates its handler at the dispatch level: an unset
//! category is skipped outright, it is not computed and then hidden.

use std::collections::HashSet;

/// Which translation languages to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationLanguages {
    /// Keep every translation regardless of language.
    All,
    /// Keep only translations whose language code is in the set.
    Only(HashSet<String>),
}

impl TranslationLanguages {
    pub fn allows(&self, lang_code: &str) -> bool {
        match self {
            TranslationLanguages::All => true,
            TranslationLanguages::Only(codes) => codes.contains(lang_code),
        }
    }

    /// Convenience constructor from explicit codes.
    pub fn only<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TranslationLanguages::Only(codes.into_iter().map(Into::into).collect())
    }
}

/// Feature toggles for one extraction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiktionaryOptions {
    /// Accumulate the rendered etymology narrative.
    pub etymology_text: bool,
    /// Extract relationship edges (root/inherited/cognate/descendant).
    pub etymology_links: bool,
    /// Record the primary phonetic transcription.
    pub ipa: bool,
    /// Record the full rendered pronunciation list.
    pub pronunciations: bool,
    /// Extract part-of-speech sections at all.
    pub parts: bool,
    /// Extract grammatical attributes from the headword.
    pub part_attributes: bool,
    /// Extract extended inflection tables (declension/conjugation).
    pub extended_forms: bool,
    /// Extract meaning glosses.
    pub meanings: bool,
    /// Extract the translations block.
    pub translations: bool,
    pub synonyms: bool,
    pub antonyms: bool,
    pub anagrams: bool,
    pub alternative_forms: bool,
    /// Allow-list applied to extracted translations.
    pub translation_languages: TranslationLanguages,
}

impl WiktionaryOptions {
    /// Everything on, all translation languages kept.
    pub fn all() -> Self {
        WiktionaryOptions {
            etymology_text: true,
            etymology_links: true,
            ipa: true,
            pronunciations: true,
            parts: true,
            part_attributes: true,
            extended_forms: true,
            meanings: true,
            translations: true,
            synonyms: true,
            antonyms: true,
            anagrams: true,
            alternative_forms: true,
            translation_languages: TranslationLanguages::All,
        }
    }

    /// Everything off; callers switch on what they need.
    pub fn none() -> Self {
        WiktionaryOptions {
            etymology_text: false,
            etymology_links: false,
            ipa: false,
            pronunciations: false,
            parts: false,
            part_attributes: false,
            extended_forms: false,
            meanings: false,
            translations: false,
            synonyms: false,
            antonyms: false,
            anagrams: false,
            alternative_forms: false,
            translation_languages: TranslationLanguages::All,
        }
    }
}

impl Default for WiktionaryOptions {
    fn default() -> Self {
        WiktionaryOptions::all()
    }
}
