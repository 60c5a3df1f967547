//! Static language-code lookup and page-title naming.
//!
//! The code table ships with the crate as YAML and is parsed once on
//! first use. It is never mutated during extraction.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LANGUAGE_CODES: Lazy<HashMap<String, String>> = Lazy::new(|| {
    serde_yaml::from_str(include_str!("../data/languages.yaml"))
        .expect("embedded language table is valid YAML")
});

/// The Wiktionary section-heading name for a language code, e.g.
/// "en" -> "English". Falls back to the code itself for unknown codes
/// so the caller still gets a usable heading to search for.
pub fn language_name(code: &str) -> &str {
    LANGUAGE_CODES
        .get(code)
        .map(|name| name.as_str())
        .unwrap_or(code)
}

/// True if the code is in the shipped table.
pub fn known_language(code: &str) -> bool {
    LANGUAGE_CODES.contains_key(code)
}

/// The page title to request for a word. Reconstructed roots are marked
/// with a leading asterisk and live under a per-language namespace, e.g.
/// "*h₁rewdʰ-" in ine-pro -> "Reconstruction:Proto-Indo-European/h₁rewdʰ-".
pub fn page_title(word: &str, lang_code: &str) -> String {
    match word.strip_prefix('*') {
        Some(rest) => format!("Reconstruction:{}/{}", language_name(lang_code), rest),
        None => word.to_string(),
    }
}
