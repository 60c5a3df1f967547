//! Wikitext segmentation: raw markup to headed sections, and isolation
//! of the sections belonging to one language.

use crate::error::WiktionaryError;
use crate::languages::language_name;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A top-level (language-banner) heading: exactly two '=' on each side.
    static ref LANGUAGE_HEADER: Regex = Regex::new(r"^==[^=]+==$").unwrap();
}

/// One headed block of wikitext. The header keeps its '=' markers so the
/// dispatcher can tell nesting levels apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub lines: Vec<String>,
}

/// Split raw wikitext into sections on heading lines.
///
/// Separator rules ('----'), HTML comments, category links and blank
/// lines carry no lexical content and are dropped; everything else is
/// kept verbatim. Content before the first heading lands in a leading
/// headerless section.
pub fn process_wikitext(wikitext: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::default();

    for line in wikitext.lines() {
        if line.starts_with("==") {
            sections.push(current);
            current = Section {
                header: line.trim().to_string(),
                lines: Vec::new(),
            };
        } else if !line.starts_with("----")
            && !line.starts_with("<!--")
            && !line.starts_with("[[Category")
            && !line.is_empty()
        {
            current.lines.push(line.to_string());
        }
    }
    sections.push(current);
    sections
}

/// Find the contiguous run of sections for one language: from the
/// section headed `==<LanguageName>==` up to (not including) the next
/// top-level heading, or the end of the page.
pub fn extract_language_sections<'a>(
    word: &str,
    lang_code: &str,
    sections: &'a [Section],
) -> Result<&'a [Section], WiktionaryError> {
    let language = language_name(lang_code);
    let banner = format!("=={}==", language);

    let start = sections
        .iter()
        .position(|section| section.header == banner)
        .ok_or_else(|| WiktionaryError::LanguageSectionNotFound {
            word: word.to_string(),
            language: language.to_string(),
        })?;

    let end = sections[start + 1..]
        .iter()
        .position(|section| LANGUAGE_HEADER.is_match(&section.header))
        .map(|offset| start + 1 + offset)
        .unwrap_or(sections.len());

    Ok(&sections[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "\
{{also|Red}}
==English==

===Etymology 1===
From {{inh|en|enm|red}}.
----
<!-- an editor note -->
[[Category:en:Colors]]

====Noun====
{{en-noun|~}}
# The color red.

==Finnish==

===Noun===
{{fi-noun}}
";

    #[test]
    fn splits_on_headings_and_keeps_order() {
        let sections = process_wikitext(PAGE);
        let headers: Vec<&str> = sections.iter().map(|s| s.header.as_str()).collect();
        assert_eq!(
            headers,
            vec![
                "",
                "==English==",
                "===Etymology 1===",
                "====Noun====",
                "==Finnish==",
                "===Noun==="
            ]
        );
    }

    #[test]
    fn drops_separators_comments_categories_and_blanks() {
        let sections = process_wikitext(PAGE);
        assert_eq!(sections[2].lines, vec!["From {{inh|en|enm|red}}."]);
        assert_eq!(sections[3].lines, vec!["{{en-noun|~}}", "# The color red."]);
    }

    #[test]
    fn retained_lines_reproduce_input_minus_dropped_lines() {
        let sections = process_wikitext(PAGE);
        let mut reconstructed = Vec::new();
        for section in &sections {
            if !section.header.is_empty() {
                reconstructed.push(section.header.clone());
            }
            reconstructed.extend(section.lines.iter().cloned());
        }
        let expected: Vec<String> = PAGE
            .lines()
            .filter(|line| {
                !line.is_empty()
                    && !line.starts_with("----")
                    && !line.starts_with("<!--")
                    && !line.starts_with("[[Category")
            })
            .map(str::to_string)
            .collect();
        assert_eq!(reconstructed, expected);
    }

    #[test]
    fn language_slice_ends_before_next_language() {
        let sections = process_wikitext(PAGE);
        let english = extract_language_sections("red", "en", &sections).unwrap();
        assert_eq!(english.len(), 3);
        assert_eq!(english[0].header, "==English==");
        assert_eq!(english[2].header, "====Noun====");
    }

    #[test]
    fn language_slice_runs_to_end_when_last() {
        let sections = process_wikitext(PAGE);
        let finnish = extract_language_sections("red", "fi", &sections).unwrap();
        assert_eq!(finnish.len(), 2);
        assert_eq!(finnish[1].header, "===Noun===");
    }

    #[test]
    fn missing_language_is_an_error() {
        let sections = process_wikitext(PAGE);
        let err = extract_language_sections("red", "fr", &sections).unwrap_err();
        assert!(matches!(
            err,
            WiktionaryError::LanguageSectionNotFound { .. }
        ));
    }
}
