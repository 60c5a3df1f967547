//! Etymology sections: the origin narrative and the typed word
//! relationships encoded in its templates.

use crate::client::Renderer;
use crate::model::{Etymology, LanguageWord, LinkedWord, Relationship};
use crate::options::WiktionaryOptions;
use crate::segment::Section;
use crate::template::{all_tags, Tag};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref LATIN_LETTER: Regex = Regex::new(r"\p{Latin}").unwrap();
}

/// Classify one template tag into a relationship edge, or None for tags
/// that are not genealogical.
///
/// Slot conventions differ per family and a couple of documented
/// inconsistencies are preserved: the inherited-family gloss should sit
/// at one slot but editors sometimes push it one further, so the next
/// slot is read as a fallback.
pub(crate) fn link_from_tag(tag: &Tag) -> Option<LinkedWord> {
    // {{m}} is a plain mention: it marks a word as mentioned, not as an
    // ancestor or relative, so it is ambiguous and skipped.
    let name = tag.name();
    if name == "m" || name == "mention" {
        return None;
    }

    let mut link = match name {
        "root" => {
            let mut link = LinkedWord::new(Relationship::Root);
            link.language = tag.slot_or_empty(2);
            link.word = tag.slot_or_empty(3);
            link
        }
        "inh" | "inherited" | "bor" | "borrowed" | "bor+" | "cal" | "calque" | "clq" | "sl"
        | "der" | "derived" => {
            let mut link = LinkedWord::new(Relationship::Inherited);
            link.language = tag.slot_or_empty(2);
            link.word = tag.slot_or_empty(3);
            link.meaning = tag.slot_or_empty(5);
            if link.meaning.is_empty() {
                link.meaning = tag.slot_or_empty(6);
            }
            match name {
                "bor" | "borrowed" | "bor+" => link.borrowed = true,
                "cal" | "calque" | "clq" => link.calque = true,
                "sl" => link.semantic_loan = true,
                "der" | "derived" => link.derived = true,
                _ => {}
            }
            link
        }
        "cog" | "cognate" => {
            let mut link = LinkedWord::new(Relationship::Cognate);
            link.language = tag.slot_or_empty(1);
            link.word = tag.slot_or_empty(2);
            link.meaning = tag.slot_or_empty(4);
            if link.meaning.is_empty() {
                link.meaning = tag.slot_or_empty(5);
            }
            link
        }
        "desc" | "desctree" => {
            let mut link = LinkedWord::new(Relationship::Descendant);
            link.language = tag.slot_or_empty(1);
            link.word = tag.slot_or_empty(2);
            if let Some(gloss) = tag.named("t") {
                link.meaning = gloss.to_string();
            }
            link
        }
        _ => return None,
    };

    if let Some(tr) = tag.named("tr") {
        link.transliteration = tr.to_string();
    }

    // Modifier keys appear on any family, independent of the
    // relationship itself, e.g. {{desc|gml|rôt|bor=1}}.
    if tag.has_named("bor") {
        link.borrowed = true;
    }
    if tag.has_named("cal") || tag.has_named("calque") || tag.has_named("clq") {
        link.calque = true;
    }
    if tag.has_named("sl") {
        link.semantic_loan = true;
    }
    if tag.has_named("der") {
        link.derived = true;
    }
    if tag.has_named("unc") || tag.has_named("unclear") {
        link.unclear = true;
    }

    Some(link)
}

/// Scan rendered narrative text for a parenthesized transliteration
/// immediately following the target word. Used when the word has no
/// Latin characters and the tag carried no explicit tr= argument; the
/// rendered text usually spells the romanization out.
fn transliteration_from_text(word: &str, text: &str) -> Option<String> {
    let pattern = [&regex::escape(word), r" *\((.*?)[\),]"].concat();
    let re = Regex::new(&pattern).ok()?;
    let cap = re.captures(text)?;
    Some(cap[1].to_string())
}

pub(crate) fn parse_etymology_section<R: Renderer>(
    lw: &mut LanguageWord,
    section: &Section,
    renderer: &R,
    options: &WiktionaryOptions,
) {
    let word = lw.word.clone();
    let lang_code = lw.language_code.clone();

    let mut etym = Etymology {
        name: section.header.trim_matches('=').to_string(),
        ..Default::default()
    };

    for line in &section.lines {
        // The narrative may span several paragraphs; rendered lines are
        // newline-joined. The rendered text is also the source for the
        // transliteration fallback below.
        let text = if options.etymology_text || options.etymology_links {
            renderer.render(line, &word, &lang_code)
        } else {
            String::new()
        };
        if options.etymology_text && !text.is_empty() {
            etym.text.push_str(&text);
            etym.text.push('\n');
        }

        if !options.etymology_links {
            continue;
        }
        for tag in all_tags(line) {
            let Some(mut link) = link_from_tag(&tag) else {
                trace!(name = tag.name(), "tag is not genealogical, skipped");
                continue;
            };
            if !link.word.is_empty()
                && link.transliteration.is_empty()
                && !LATIN_LETTER.is_match(&link.word)
            {
                if let Some(tr) = transliteration_from_text(&link.word, &text) {
                    link.transliteration = tr;
                }
            }
            if link.has_target() {
                etym.words.push(link);
            }
        }
    }

    lw.etymologies.push(etym);
}
