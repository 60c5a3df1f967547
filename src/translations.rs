//! Translation blocks, descendant lists and the free-text side lists
//! (synonyms, antonyms, anagrams, alternative forms).

use crate::client::Renderer;
use crate::etymology::link_from_tag;
use crate::model::{LanguageWord, Relationship, TranslatedWord};
use crate::options::WiktionaryOptions;
use crate::segment::Section;
use crate::template::{all_tags, translation_tag};
use tracing::trace;

/// Only the first translation block is read: it translates the principal
/// meaning. Later blocks translate colloquial senses and are discarded.
pub(crate) fn parse_translation_section(
    lw: &mut LanguageWord,
    section: &Section,
    options: &WiktionaryOptions,
) {
    let mut translations = Vec::new();

    for line in &section.lines {
        if line.starts_with("{{trans-bottom") {
            break;
        }
        if !line.starts_with('*') {
            continue;
        }
        let Some(tag) = translation_tag(line) else {
            continue;
        };
        let Some(language) = tag.slot(1) else {
            continue;
        };
        if !options.translation_languages.allows(language) {
            trace!(language, "translation language not in allow-list");
            continue;
        }
        let Some(word) = tag.slot(2) else {
            continue;
        };
        translations.push(TranslatedWord {
            language: language.to_string(),
            word: word.to_string(),
            transliteration: tag.named("tr").unwrap_or("").to_string(),
        });
    }

    // An empty result leaves any earlier list untouched.
    if translations.is_empty() {
        return;
    }
    if let Some(part) = lw.current_part_mut() {
        part.translations = translations;
    }
}

/// Each list line's descendant-family tag yields one descendant edge on
/// the current etymology.
pub(crate) fn parse_descendants_section(lw: &mut LanguageWord, section: &Section) {
    let Some(etym) = lw.etymologies.last_mut() else {
        return;
    };
    for line in &section.lines {
        if !line.starts_with('*') {
            continue;
        }
        for tag in all_tags(line) {
            let Some(link) = link_from_tag(&tag) else {
                continue;
            };
            if link.relationship == Relationship::Descendant && link.has_target() {
                etym.words.push(link);
            }
        }
    }
}

/// Which side list a free-text section feeds, and thereby where the
/// joined text attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SideList {
    Synonyms,
    Antonyms,
    Anagrams,
    AlternativeForms,
}

/// Render each list line and join with newlines. Anagrams attach to the
/// entry, alternative forms to the current etymology, synonym/antonym
/// text to the current part of speech; a missing parent is a silent
/// no-op.
pub(crate) fn parse_side_list_section<R: Renderer>(
    lw: &mut LanguageWord,
    section: &Section,
    renderer: &R,
    kind: SideList,
) {
    let word = lw.word.clone();
    let lang_code = lw.language_code.clone();

    let mut text = String::new();
    for line in &section.lines {
        let Some(rest) = line.strip_prefix('*') else {
            continue;
        };
        let rendered = renderer.render(rest.trim_start(), &word, &lang_code);
        if rendered.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&rendered);
    }

    match kind {
        SideList::Anagrams => lw.anagrams = text,
        SideList::AlternativeForms => {
            if let Some(etym) = lw.current_etymology_mut() {
                etym.alternative_forms = text;
            }
        }
        SideList::Synonyms => {
            if let Some(part) = lw.current_part_mut() {
                part.synonyms = text;
            }
        }
        SideList::Antonyms => {
            if let Some(part) = lw.current_part_mut() {
                part.antonyms = text;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::NullRenderer;
    use crate::model::{Etymology, PartOfSpeech};
    use crate::options::TranslationLanguages;

    fn section(header: &str, lines: &[&str]) -> Section {
        Section {
            header: header.to_string(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn entry_with_part() -> LanguageWord {
        let mut lw = LanguageWord {
            word: "red".to_string(),
            language_code: "en".to_string(),
            ..Default::default()
        };
        lw.ensure_etymology().parts.push(PartOfSpeech::new("Noun"));
        lw
    }

    #[test]
    fn first_block_only() {
        let mut lw = entry_with_part();
        parse_translation_section(
            &mut lw,
            &section(
                "====Translations====",
                &[
                    "{{trans-top|red color}}",
                    "* German: {{t+|de|rot}}",
                    "* French: {{t+|fr|rouge|tr=ruzh}}",
                    "{{trans-bottom}}",
                    "{{trans-top|colloquial sense}}",
                    "* German: {{t|de|Kommunist}}",
                    "{{trans-bottom}}",
                ],
            ),
            &WiktionaryOptions::all(),
        );
        let translations = &lw.etymologies[0].parts[0].translations;
        assert_eq!(translations.len(), 2);
        assert_eq!(translations[0].language, "de");
        assert_eq!(translations[0].word, "rot");
        assert_eq!(translations[1].transliteration, "ruzh");
    }

    #[test]
    fn allow_list_filters_languages() {
        let lines = ["* German: {{t+|de|rot}}", "{{trans-bottom}}"];

        let mut options = WiktionaryOptions::all();
        options.translation_languages = TranslationLanguages::only(["fr"]);
        let mut lw = entry_with_part();
        parse_translation_section(&mut lw, &section("====Translations====", &lines), &options);
        assert!(lw.etymologies[0].parts[0].translations.is_empty());

        options.translation_languages = TranslationLanguages::only(["de"]);
        let mut lw = entry_with_part();
        parse_translation_section(&mut lw, &section("====Translations====", &lines), &options);
        let translations = &lw.etymologies[0].parts[0].translations;
        assert_eq!(translations.len(), 1);
        assert_eq!(translations[0].language, "de");
    }

    #[test]
    fn empty_result_leaves_prior_list_untouched() {
        let mut lw = entry_with_part();
        lw.current_part_mut().unwrap().translations.push(TranslatedWord {
            language: "de".to_string(),
            word: "rot".to_string(),
            transliteration: String::new(),
        });
        parse_translation_section(
            &mut lw,
            &section("====Translations====", &["{{trans-top|x}}", "{{trans-bottom}}"]),
            &WiktionaryOptions::all(),
        );
        assert_eq!(lw.etymologies[0].parts[0].translations.len(), 1);
    }

    #[test]
    fn descendants_append_to_current_etymology() {
        let mut lw = LanguageWord::default();
        lw.etymologies.push(Etymology::default());
        parse_descendants_section(
            &mut lw,
            &section(
                "====Descendants====",
                &["* Scots: {{desc|sco|reid}}", "* {{desc|gml|rôt|bor=1}}"],
            ),
        );
        let words = &lw.etymologies[0].words;
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].relationship, Relationship::Descendant);
        assert_eq!(words[0].language, "sco");
        assert_eq!(words[0].word, "reid");
        assert!(words[1].borrowed);
    }

    #[test]
    fn descendants_without_etymology_is_a_no_op() {
        let mut lw = LanguageWord::default();
        parse_descendants_section(
            &mut lw,
            &section("====Descendants====", &["* {{desc|sco|reid}}"]),
        );
        assert!(lw.etymologies.is_empty());
    }

    #[test]
    fn side_lists_attach_at_the_right_level() {
        let mut lw = entry_with_part();
        parse_side_list_section(
            &mut lw,
            &section("====Synonyms====", &["* ruddy", "* crimson"]),
            &NullRenderer,
            SideList::Synonyms,
        );
        parse_side_list_section(
            &mut lw,
            &section("===Anagrams===", &["* der"]),
            &NullRenderer,
            SideList::Anagrams,
        );
        parse_side_list_section(
            &mut lw,
            &section("===Alternative forms===", &["* redd"]),
            &NullRenderer,
            SideList::AlternativeForms,
        );
        assert_eq!(lw.etymologies[0].parts[0].synonyms, "ruddy\ncrimson");
        assert_eq!(lw.anagrams, "der");
        assert_eq!(lw.etymologies[0].alternative_forms, "redd");
    }

    #[test]
    fn synonyms_without_part_is_a_no_op() {
        let mut lw = LanguageWord::default();
        parse_side_list_section(
            &mut lw,
            &section("====Synonyms====", &["* ruddy"]),
            &NullRenderer,
            SideList::Synonyms,
        );
        assert!(lw.etymologies.is_empty());
    }
}
