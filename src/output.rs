//! Writing extraction results to disk.

use crate::model::LanguageWord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Serialize an entry to `<lang-code>-<word>.json` under `dir` and
/// return the path written.
pub fn write_json(lw: &LanguageWord, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}-{}.json", lw.language_code, lw.word));
    let bytes = serde_json::to_vec(lw)?;
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Dump the raw wikitext next to the JSON for debugging.
pub fn write_wikitext(word: &str, lang_code: &str, wikitext: &str, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}-{}.wikitext", lang_code, word));
    fs::write(&path, wikitext)?;
    Ok(path)
}
