//! Error taxonomy for the extraction pipeline.
//!
//! Only two conditions abort an extraction: the page does not exist at
//! all, or it exists but has no section for the requested language.
//! Render failures and malformed tags are absorbed where they occur,
//! because community markup is inconsistent and a partial entry beats
//! no entry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WiktionaryError {
    /// Wiktionary has no page for the requested word.
    #[error("no Wiktionary page for word '{word}'")]
    PageNotFound { word: String },

    /// The page exists but carries no section for the requested language.
    #[error("word '{word}' exists on Wiktionary, but not for {language}")]
    LanguageSectionNotFound { word: String, language: String },

    /// HTTP transport failure talking to the Wiktionary API.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a payload we could not decode.
    #[error("unexpected response payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The API answered with JSON missing an expected field.
    #[error("unexpected response shape: missing {0}")]
    MissingField(&'static str),
}
