//! Extended inflection tables (declension/conjugation sections).
//!
//! The table template renders to an HTML fragment in which every cell
//! holding an inflected form carries an attribute key like
//! `1|s|pres|act|ind-form-of` (with the pipes arriving as `&#124;`).
//! The key names the grammatical slot; the cell text is the form.

use crate::client::Renderer;
use crate::model::LanguageWord;
use crate::segment::Section;
use scraper::{ElementRef, Html};

const FORM_MARKER: &str = "form-of";

pub(crate) fn parse_inflection_section<R: Renderer>(
    lw: &mut LanguageWord,
    section: &Section,
    renderer: &R,
) {
    let word = lw.word.clone();
    let lang_code = lw.language_code.clone();

    // Extended forms extend the most recent part of speech; without one
    // there is nothing to attach to.
    let Some(etym) = lw.etymologies.last_mut() else {
        return;
    };
    let Some(part) = etym.parts.last_mut() else {
        return;
    };

    for line in &section.lines {
        if !line.starts_with("{{") {
            continue;
        }
        // The display rendering strips every tag; the form-of keys only
        // survive in the raw HTML rendering.
        let html = renderer.render_html(line, &word, &lang_code);
        let fragment = Html::parse_fragment(&html);

        for node in fragment.tree.nodes() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            for (key, _value) in element.value().attrs() {
                if !key.contains(FORM_MARKER) || key.len() <= FORM_MARKER.len() + 1 {
                    continue;
                }
                let decoded = key.replace("&#124;", "|");
                let Some(label) = decoded.strip_suffix("-form-of") else {
                    continue;
                };
                let form: String = element.text().collect();
                part.add_attribute(label, form);
            }
        }
    }
}
