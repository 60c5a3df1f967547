//! Full-pipeline tests against canned wikitext with in-memory
//! collaborators standing in for the Wiktionary API.

use std::collections::HashMap;
use wiktionary_word::{
    ancestors, process_word, PageSource, Relationship, Renderer, TranslationLanguages,
    WiktionaryError, WiktionaryOptions,
};

/// Serves canned wikitext keyed by word.
struct CannedSource {
    pages: HashMap<String, String>,
}

impl CannedSource {
    fn single(word: &str, wikitext: &str) -> Self {
        let mut pages = HashMap::new();
        pages.insert(word.to_string(), wikitext.to_string());
        CannedSource { pages }
    }
}

impl PageSource for CannedSource {
    fn fetch_wikitext(&self, word: &str, _lang_code: &str) -> Result<String, WiktionaryError> {
        self.pages
            .get(word)
            .cloned()
            .ok_or_else(|| WiktionaryError::PageNotFound {
                word: word.to_string(),
            })
    }
}

/// Renders a known set of fragments; everything else degrades to the
/// raw input, exactly like a failed render call.
struct CannedRenderer {
    rendered: HashMap<String, String>,
}

impl CannedRenderer {
    fn new(pairs: &[(&str, &str)]) -> Self {
        CannedRenderer {
            rendered: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Renderer for CannedRenderer {
    fn render(&self, text: &str, _word: &str, _lang_code: &str) -> String {
        self.rendered
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

const RED_PAGE: &str = "\
{{also|Red}}
==English==
{{wikipedia}}

===Pronunciation===
* enPR: rĕd, IPA(key): /ɹɛd/
* Rhymes: -ɛd

===Etymology 1===
From {{inh|en|enm|red}}, {{inh|en|ang|rēad}}, from {{root|en|ine-pro|*h₁rewdʰ-}}.
Cognate with {{cog|fy|read}} and {{cog|grc|ἐρυθρός}}.

====Adjective====
{{en-adj|redder}}
# Having red as its color.
# (of hair) Orange-brown.

====Noun====
{{en-noun|~}}
# The color of blood.

=====Translations=====
{{trans-top|color}}
* German: {{t+|de|rot}}
* Japanese: {{t+|ja|赤い|tr=akai}}
{{trans-bottom}}
{{trans-top|a socialist}}
* German: {{t|de|Kommunist}}
{{trans-bottom}}

====Descendants====
* Scots: {{desc|sco|reid}}

===Etymology 2===
From {{m|en|redistribution}}.

====Noun====
{{en-noun}}
# A redistribution.

===Anagrams===
* {{anagrams|en|a=der|der}}

==Finnish==

===Noun===
# something else entirely
";

const RENDERS: &[(&str, &str)] = &[
    (
        "From {{inh|en|enm|red}}, {{inh|en|ang|rēad}}, from {{root|en|ine-pro|*h₁rewdʰ-}}.",
        "From Middle English red, Old English rēad, from Proto-Indo-European *h₁rewdʰ-.",
    ),
    (
        "Cognate with {{cog|fy|read}} and {{cog|grc|ἐρυθρός}}.",
        "Cognate with West Frisian read and Ancient Greek ἐρυθρός (eruthrós).",
    ),
    ("{{en-adj|redder}}", "red (comparative redder, superlative reddest)"),
    ("{{en-noun|~}}", "red (countable and uncountable, plural reds)"),
    ("Having red as its color.", "Having red as its color."),
];

fn red_source() -> CannedSource {
    CannedSource::single("red", RED_PAGE)
}

fn red_renderer() -> CannedRenderer {
    CannedRenderer::new(RENDERS)
}

#[test]
fn full_extraction_builds_the_complete_entry() {
    let lw = process_word(
        "red",
        "en",
        &red_source(),
        &red_renderer(),
        &WiktionaryOptions::all(),
    )
    .unwrap();

    assert_eq!(lw.word, "red");
    assert_eq!(lw.language_name, "English");
    assert_eq!(lw.language_code, "en");
    assert_eq!(lw.meaning, "Having red as its color.");
    assert_eq!(lw.ipa, "/ɹɛd/");
    assert_eq!(lw.pronunciations.len(), 2);

    assert_eq!(lw.etymologies.len(), 2);
    let first = &lw.etymologies[0];
    assert!(first.text.starts_with("From Middle English red"));

    // Two inherited, one root, two cognates, one descendant.
    assert_eq!(first.words.len(), 6);
    assert_eq!(first.words[0].relationship, Relationship::Inherited);
    assert_eq!(first.words[0].language, "enm");
    assert_eq!(first.words[2].relationship, Relationship::Root);
    assert_eq!(first.words[2].word, "*h₁rewdʰ-");
    // Non-Latin cognate picked its transliteration from the narrative.
    assert_eq!(first.words[4].word, "ἐρυθρός");
    assert_eq!(first.words[4].transliteration, "eruthrós");
    assert_eq!(first.words[5].relationship, Relationship::Descendant);
    assert_eq!(first.words[5].language, "sco");

    assert_eq!(first.parts.len(), 2);
    let adjective = &first.parts[0];
    assert_eq!(adjective.name, "Adjective");
    assert_eq!(
        adjective.attributes.get("comparative").map(String::as_str),
        Some("redder")
    );
    let noun = &first.parts[1];
    assert_eq!(
        noun.attributes.get("count").map(String::as_str),
        Some("countable and uncountable")
    );
    // Only the first translation block is read.
    assert_eq!(noun.translations.len(), 2);
    assert_eq!(noun.translations[1].transliteration, "akai");

    // The {{m}} mention in Etymology 2 is not genealogical.
    assert!(lw.etymologies[1].words.is_empty());

    assert!(!lw.anagrams.is_empty());
}

#[test]
fn feature_selection_skips_unrequested_categories() {
    let mut options = WiktionaryOptions::none();
    options.etymology_text = true;
    options.etymology_links = true;
    options.ipa = true;
    options.parts = true;
    options.meanings = true;

    let lw = process_word("red", "en", &red_source(), &red_renderer(), &options).unwrap();

    assert_eq!(lw.meaning, "Having red as its color.");
    assert_eq!(lw.ipa, "/ɹɛd/");
    // Pronunciation list was not requested, transcription was.
    assert!(lw.pronunciations.is_empty());
    for etym in &lw.etymologies {
        for part in &etym.parts {
            assert!(part.translations.is_empty());
            assert!(part.attributes.is_empty());
        }
    }
    assert!(lw.anagrams.is_empty());
}

#[test]
fn translation_allow_list_limits_languages() {
    let mut options = WiktionaryOptions::all();
    options.translation_languages = TranslationLanguages::only(["de"]);
    let lw = process_word("red", "en", &red_source(), &red_renderer(), &options).unwrap();
    let noun = &lw.etymologies[0].parts[1];
    assert_eq!(noun.translations.len(), 1);
    assert_eq!(noun.translations[0].language, "de");
}

#[test]
fn extraction_is_idempotent() {
    let options = WiktionaryOptions::all();
    let first = process_word("red", "en", &red_source(), &red_renderer(), &options).unwrap();
    let second = process_word("red", "en", &red_source(), &red_renderer(), &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_page_aborts_with_page_not_found() {
    let err = process_word(
        "blue",
        "en",
        &red_source(),
        &red_renderer(),
        &WiktionaryOptions::all(),
    )
    .unwrap_err();
    assert!(matches!(err, WiktionaryError::PageNotFound { .. }));
}

#[test]
fn missing_language_section_aborts() {
    let err = process_word(
        "red",
        "fr",
        &red_source(),
        &red_renderer(),
        &WiktionaryOptions::all(),
    )
    .unwrap_err();
    match err {
        WiktionaryError::LanguageSectionNotFound { word, language } => {
            assert_eq!(word, "red");
            assert_eq!(language, "French");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn other_language_sections_stay_isolated() {
    let lw = process_word(
        "red",
        "fi",
        &red_source(),
        &red_renderer(),
        &WiktionaryOptions::all(),
    )
    .unwrap();
    assert_eq!(lw.language_name, "Finnish");
    assert_eq!(lw.etymologies.len(), 1);
    assert_eq!(lw.etymologies[0].parts[0].name, "Noun");
    assert!(lw.etymologies[0].parts[0].headword.is_empty());
}

#[test]
fn ancestors_are_one_hop_inherited_links() {
    let lw = process_word(
        "red",
        "en",
        &red_source(),
        &red_renderer(),
        &WiktionaryOptions::all(),
    )
    .unwrap();
    let found = ancestors(&lw);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].language, "enm");
    assert_eq!(found[1].language, "ang");
}
