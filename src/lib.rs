//! Structured lexical-entry extraction from Wiktionary wikitext.
//!
//! For one word/language pair, the pipeline fetches the page's wikitext,
//! isolates the requested language's sections, and rebuilds the
//! community markup into a typed [`LanguageWord`]: etymology narrative
//! and word relationships, pronunciations, part-of-speech attributes,
//! meanings, translations and descendant edges.
//!
//! ```no_run
//! use wiktionary_word::get_word;
//!
//! let entry = get_word("red", "en").unwrap();
//! println!("{}: {}", entry.word, entry.meaning);
//! ```
//!
//! Extraction is single-threaded and single-pass over the page. The two
//! external collaborators (page source and renderer) sit behind traits,
//! so the pipeline also runs against canned data; see
//! [`client::NullRenderer`] and [`process_word`].

pub mod client;
pub mod error;
pub mod languages;
pub mod model;
pub mod options;
pub mod output;
pub mod parse;
pub mod segment;
pub mod template;

mod etymology;
mod inflection;
mod pos;
mod translations;

pub use client::{NullRenderer, PageSource, Renderer, WiktionaryClient};
pub use error::WiktionaryError;
pub use model::{
    Etymology, LanguageWord, LinkedWord, PartOfSpeech, Relationship, TranslatedWord,
};
pub use options::{TranslationLanguages, WiktionaryOptions};

/// Run the extraction pipeline with explicit collaborators.
pub fn process_word<S, R>(
    word: &str,
    lang_code: &str,
    source: &S,
    renderer: &R,
    options: &WiktionaryOptions,
) -> Result<LanguageWord, WiktionaryError>
where
    S: PageSource,
    R: Renderer,
{
    let wikitext = source.fetch_wikitext(word, lang_code)?;
    let sections = segment::process_wikitext(&wikitext);
    let language_sections = segment::extract_language_sections(word, lang_code, &sections)?;
    Ok(parse::parse_sections(
        word,
        lang_code,
        language_sections,
        renderer,
        options,
    ))
}

/// Extract a full entry from en.wiktionary with everything enabled.
pub fn get_word(word: &str, lang_code: &str) -> Result<LanguageWord, WiktionaryError> {
    get_word_with_options(word, lang_code, &WiktionaryOptions::all())
}

/// Extract an entry from en.wiktionary with an explicit feature set.
pub fn get_word_with_options(
    word: &str,
    lang_code: &str,
    options: &WiktionaryOptions,
) -> Result<LanguageWord, WiktionaryError> {
    let client = WiktionaryClient::new();
    process_word(word, lang_code, &client, &client, options)
}

/// Fetch only the primary meaning of a word: the first gloss of the
/// first part of speech of the first etymology.
pub fn get_meaning(word: &str, lang_code: &str) -> Result<String, WiktionaryError> {
    let mut options = WiktionaryOptions::none();
    options.parts = true;
    options.meanings = true;
    let lw = get_word_with_options(word, lang_code, &options)?;
    Ok(lw.meaning)
}

/// The direct ancestors recorded on an entry: the inherited links of its
/// first etymology. One hop only; links are never followed recursively.
pub fn ancestors(lw: &LanguageWord) -> Vec<&LinkedWord> {
    let Some(etym) = lw.etymologies.first() else {
        return Vec::new();
    };
    etym.words
        .iter()
        .filter(|link| link.relationship == Relationship::Inherited)
        .collect()
}
