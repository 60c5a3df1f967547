//! Part-of-speech sections: headword, meanings and the grammatical
//! attributes encoded partly in the headword template arguments and
//! partly in its rendered text.

use crate::client::Renderer;
use crate::model::{LanguageWord, PartOfSpeech};
use crate::options::WiktionaryOptions;
use crate::segment::Section;
use crate::template::{all_tags, Tag};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// One scannable label phrase in a rendered headword, e.g.
/// "red (comparative redder, superlative reddest)". Entries in the same
/// mutual-exclusion group short-circuit: once a specific label matched,
/// the generic alternative is not scanned.
struct FormEntry {
    label: &'static str,
    group: Option<&'static str>,
    generic: bool,
    re: Regex,
}

impl FormEntry {
    fn new(label: &'static str, group: Option<&'static str>, generic: bool) -> Self {
        // Capture from the label up to the next closing delimiter.
        let pattern = [&regex::escape(label), r" *(.*?)[\),]"].concat();
        FormEntry {
            label,
            group,
            generic,
            re: Regex::new(&pattern).unwrap(),
        }
    }
}

lazy_static! {
    static ref NOUN_FORMS: Vec<FormEntry> = vec![
        FormEntry::new("singular definite", None, false),
        FormEntry::new("singular indefinite", None, false),
        FormEntry::new("plural definite", Some("plural"), false),
        FormEntry::new("plural indefinite", Some("plural"), false),
        FormEntry::new("plural", Some("plural"), true),
        FormEntry::new("genitive", None, false),
        FormEntry::new("diminutive", None, false),
    ];
    static ref ADJECTIVE_FORMS: Vec<FormEntry> = vec![
        FormEntry::new("feminine singular", Some("plural"), false),
        FormEntry::new("masculine singular", Some("plural"), false),
        FormEntry::new("feminine plural", Some("plural"), false),
        FormEntry::new("masculine plural", Some("plural"), false),
        FormEntry::new("plural", Some("plural"), true),
        FormEntry::new("comparative", None, false),
        FormEntry::new("superlative", None, false),
    ];
    static ref VERB_FORMS: Vec<FormEntry> = vec![
        FormEntry::new("simple past and past participle", Some("past"), false),
        FormEntry::new("simple past", Some("past"), true),
        FormEntry::new("past participle", Some("past"), true),
        FormEntry::new("third-person singular simple present", Some("present"), false),
        FormEntry::new("third-person singular present", Some("present"), false),
        FormEntry::new("first-person singular present", Some("present"), false),
        FormEntry::new("present tense", Some("present"), false),
        FormEntry::new("present", Some("present"), true),
        FormEntry::new("first-person singular preterite", Some("preterite"), false),
        FormEntry::new("preterite", Some("preterite"), true),
        FormEntry::new("present participle", None, false),
        FormEntry::new("past tense", None, false),
        FormEntry::new("past subjunctive", None, false),
        FormEntry::new("perfect tense", None, false),
        FormEntry::new("imperative", None, false),
        FormEntry::new("infinitive", None, false),
        FormEntry::new("auxiliary", None, false),
        // French verbs carry auxiliary/defective markers under "type".
        FormEntry::new("type", None, false),
    ];
}

// Gender values accepted as the first positional argument of a gendered
// noun template.
const VALID_GENDERS: [&str; 13] = [
    "m", "f", "n", "c", "p", "m-p", "f-p", "n-p", "c-p", "mf", "m-f", "m-f-p", "mfp",
];

/// Scan the rendered headword against an ordered label table, writing
/// matches into the attribute map keyed by label.
fn scan_headword_forms(part: &mut PartOfSpeech, table: &[FormEntry]) {
    let mut matched_groups: HashSet<&str> = HashSet::new();
    for entry in table {
        if entry.generic && entry.group.map_or(false, |g| matched_groups.contains(g)) {
            continue;
        }
        let value = entry
            .re
            .captures(&part.headword)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string());
        if let Some(value) = value {
            if value.is_empty() {
                continue;
            }
            part.attributes.insert(entry.label.to_string(), value);
            if !entry.generic {
                if let Some(group) = entry.group {
                    matched_groups.insert(group);
                }
            }
        }
    }
}

/// Take the parenthesized portion of the headword, split on commas and
/// record one item by index. German verb headwords lead with the verb
/// type this way.
fn headword_item(part: &mut PartOfSpeech, label: &str, index: usize) {
    lazy_static! {
        static ref PAREN_TAIL: Regex = Regex::new(r".*\((.*?)\)$").unwrap();
    }
    let item = PAREN_TAIL
        .captures(&part.headword)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().split(',').nth(index))
        .map(str::to_string);
    if let Some(item) = item {
        if !item.is_empty() {
            part.attributes.insert(label.to_string(), item);
        }
    }
}

pub(crate) fn parse_noun(part: &mut PartOfSpeech, tag: &Tag) {
    let mut gendered = false;

    // Gender, if present, is the first positional argument.
    if let Some(val) = tag.slot(1) {
        if VALID_GENDERS.contains(&val) {
            gendered = true;
            part.attributes.insert("gender".to_string(), val.to_string());
        }
    }
    // An explicit g= argument wins over the positional form.
    if let Some(val) = tag.named("g") {
        gendered = true;
        part.attributes.insert("gender".to_string(), val.to_string());
    }
    // Danish noun templates encode gender through the article instead:
    // en/n mark common gender, et/t mark neuter.
    if tag.name() == "da-noun" {
        if let Some(val) = tag.slot(1) {
            match val {
                "en" | "n" => {
                    part.attributes.insert("gender".to_string(), "c".to_string());
                }
                "et" | "t" => {
                    part.attributes.insert("gender".to_string(), "n".to_string());
                }
                _ => {}
            }
            gendered = true;
        }
    }

    if let Some(val) = tag.named("f") {
        part.attributes
            .insert("feminine-form".to_string(), val.to_string());
    }
    if let Some(val) = tag.named("m") {
        part.attributes
            .insert("masculine-form".to_string(), val.to_string());
    }

    // Countability sits in the slot after the gender (or first when the
    // language is ungendered): + countable, - uncountable, ~ both.
    // "s"/"es" are the English plural shorthands and imply countable;
    // "-|+" means usually uncountable.
    let (first, second) = if gendered { (2, 3) } else { (1, 2) };
    match tag.slot(first) {
        Some("+") | Some("s") | Some("es") => {
            part.attributes
                .insert("count".to_string(), "countable".to_string());
        }
        Some("-") => {
            let count = if tag.slot(second) == Some("+") {
                "usually uncountable"
            } else {
                "uncountable"
            };
            part.attributes
                .insert("count".to_string(), count.to_string());
        }
        Some("~") => {
            part.attributes
                .insert("count".to_string(), "countable and uncountable".to_string());
        }
        _ => {}
    }

    scan_headword_forms(part, &NOUN_FORMS);
}

// Adverbs are largely treated the same as adjectives.
pub(crate) fn parse_adjective(part: &mut PartOfSpeech) {
    scan_headword_forms(part, &ADJECTIVE_FORMS);
}

pub(crate) fn parse_verb(part: &mut PartOfSpeech, tag: &Tag) {
    scan_headword_forms(part, &VERB_FORMS);
    // German verb headwords put the verb type first in the parentheses.
    if tag.name() == "de-verb" {
        headword_item(part, "type", 0);
    }
}

pub(crate) fn parse_part_of_speech_section<R: Renderer>(
    lw: &mut LanguageWord,
    section: &Section,
    renderer: &R,
    options: &WiktionaryOptions,
) {
    let word = lw.word.clone();
    let lang_code = lw.language_code.clone();

    let mut part = PartOfSpeech::new(section.header.trim_matches('='));
    let mut head_tag: Option<Tag> = None;

    for line in &section.lines {
        // The first template-opening line is the headword line.
        if line.starts_with("{{") && part.headword.is_empty() {
            part.headword = renderer.render(line, &word, &lang_code);
            head_tag = all_tags(line).into_iter().next();
        }
        // Definition lines carry one gloss each. Quotation and
        // sub-definition lines (#*, ##) are not glosses.
        if options.meanings && line.starts_with("# ") {
            part.meanings.push(renderer.render(&line[2..], &word, &lang_code));
        }
    }

    if options.part_attributes {
        let tag = head_tag.unwrap_or_default();
        match part.name.as_str() {
            "Noun" | "Proper noun" => parse_noun(&mut part, &tag),
            "Adjective" | "Adverb" => parse_adjective(&mut part),
            "Verb" => parse_verb(&mut part, &tag),
            // Other categories (conjunctions, interjections, ...) have
            // no structured attributes; the headword text stands alone.
            _ => {}
        }
    }

    lw.ensure_etymology().parts.push(part);
}
