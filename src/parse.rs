//! The section dispatcher: classifies each section by its heading and
//! routes it to a handler, gated by the requested feature set, then
//! derives the entry's primary meaning.

use crate::client::Renderer;
use crate::etymology::parse_etymology_section;
use crate::inflection::parse_inflection_section;
use crate::languages::language_name;
use crate::model::LanguageWord;
use crate::options::WiktionaryOptions;
use crate::pos::parse_part_of_speech_section;
use crate::segment::Section;
use crate::translations::{
    parse_descendants_section, parse_side_list_section, parse_translation_section, SideList,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // First /.../ span in a rendered pronunciation line. The leading
    // greedy prefix deliberately skips enPR and similar notations that
    // precede the IPA transcription.
    static ref IPA_SPAN: Regex = Regex::new(r".*(/.*?/)").unwrap();
}

/// Build a LanguageWord from one language's sections. The first section
/// is the language banner and is never handed to a handler.
pub fn parse_sections<R: Renderer>(
    word: &str,
    lang_code: &str,
    sections: &[Section],
    renderer: &R,
    options: &WiktionaryOptions,
) -> LanguageWord {
    let mut lw = LanguageWord {
        word: word.to_string(),
        language_code: lang_code.to_string(),
        language_name: language_name(lang_code).to_string(),
        ..Default::default()
    };

    for section in sections.iter().skip(1) {
        parse_section(&mut lw, section, renderer, options);
    }

    // The primary meaning is the first gloss of the first part of the
    // first etymology, when all three exist.
    if let Some(meaning) = lw
        .etymologies
        .first()
        .and_then(|etym| etym.parts.first())
        .and_then(|part| part.meanings.first())
    {
        lw.meaning = meaning.clone();
    }

    lw
}

fn parse_section<R: Renderer>(
    lw: &mut LanguageWord,
    section: &Section,
    renderer: &R,
    options: &WiktionaryOptions,
) {
    let section_type = section.header.trim_matches('=').to_string();

    // Etymology headings carry an ordinal ("Etymology 2") when the entry
    // has homographs, so prefix-match rather than equality.
    if section_type.starts_with("Etymology") {
        if options.etymology_text || options.etymology_links {
            parse_etymology_section(lw, section, renderer, options);
        }
        return;
    }

    match section_type.as_str() {
        "Pronunciation" => {
            if options.pronunciations || options.ipa {
                parse_pronunciation_section(lw, section, renderer, options);
            }
        }
        "Noun" | "Proper noun" | "Verb" | "Adjective" | "Adverb" | "Pronoun" | "Preposition"
        | "Conjunction" | "Interjection" | "Determiner" | "Article" | "Particle" | "Numeral" => {
            if options.parts {
                parse_part_of_speech_section(lw, section, renderer, options);
            }
        }
        "Declension" | "Conjugation" | "Inflection" => {
            if options.extended_forms {
                parse_inflection_section(lw, section, renderer);
            }
        }
        "Translations" => {
            if options.translations {
                parse_translation_section(lw, section, options);
            }
        }
        "Descendants" => {
            if options.etymology_links {
                parse_descendants_section(lw, section);
            }
        }
        "Synonyms" => {
            if options.synonyms {
                parse_side_list_section(lw, section, renderer, SideList::Synonyms);
            }
        }
        "Antonyms" => {
            if options.antonyms {
                parse_side_list_section(lw, section, renderer, SideList::Antonyms);
            }
        }
        "Anagrams" => {
            if options.anagrams {
                parse_side_list_section(lw, section, renderer, SideList::Anagrams);
            }
        }
        "Alternative forms" => {
            if options.alternative_forms {
                parse_side_list_section(lw, section, renderer, SideList::AlternativeForms);
            }
        }
        other => {
            debug!(section = other, "unhandled section type, ignored");
        }
    }
}

/// Pronunciation attaches to the entry itself unless the entry has
/// already split into etymologies (homographs can be pronounced
/// differently), in which case it belongs to the latest one.
fn parse_pronunciation_section<R: Renderer>(
    lw: &mut LanguageWord,
    section: &Section,
    renderer: &R,
    options: &WiktionaryOptions,
) {
    let word = lw.word.clone();
    let lang_code = lw.language_code.clone();
    let mut pronunciations = Vec::new();
    let mut ipa = String::new();

    for line in &section.lines {
        let Some(rest) = line.strip_prefix('*') else {
            continue;
        };
        // Some languages generate the IPA inside the template, so the
        // rendered text is the reliable source, not the tag arguments.
        let text = renderer.render(rest.trim_start(), &word, &lang_code);
        if text.is_empty() {
            continue;
        }
        if options.ipa && ipa.is_empty() {
            if let Some(cap) = IPA_SPAN.captures(&text) {
                ipa = cap[1].to_string();
            }
        }
        if options.pronunciations {
            pronunciations.push(text);
        }
    }

    match lw.etymologies.last_mut() {
        None => {
            lw.pronunciations = pronunciations;
            lw.ipa = ipa;
        }
        Some(etym) => {
            etym.pronunciations = pronunciations;
            etym.ipa = ipa;
        }
    }
}
