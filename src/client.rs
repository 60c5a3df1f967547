//! External collaborators: the markup source and the text renderer.
//!
//! Both are behind traits so the pipeline can run against canned data.
//! `WiktionaryClient` is the real implementation over the en.wiktionary
//! action API, using a blocking HTTP client. Rendering is best-effort:
//! any failure degrades to returning the fragment unchanged, never an
//! error, because a raw template is still more useful than an aborted
//! extraction.

use crate::error::WiktionaryError;
use crate::languages::page_title;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

const DEFAULT_API_URL: &str = "https://en.wiktionary.org/w/api.php";

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Supplies raw wikitext for a page.
pub trait PageSource {
    fn fetch_wikitext(&self, word: &str, lang_code: &str) -> Result<String, WiktionaryError>;
}

/// Renders a wikitext fragment. Must not fail: on any problem the
/// original fragment comes back unchanged.
pub trait Renderer {
    /// Render to display text.
    fn render(&self, text: &str, word: &str, lang_code: &str) -> String;

    /// Render to raw HTML, for handlers that read the markup itself
    /// (inflection tables carry their data in attribute keys, which
    /// display rendering strips away). Renderers that do not
    /// distinguish fall back to the display rendering.
    fn render_html(&self, text: &str, word: &str, lang_code: &str) -> String {
        self.render(text, word, lang_code)
    }
}

/// A renderer that performs no rendering at all. Useful offline and in
/// tests; every fragment passes through unchanged, exactly as if every
/// render call had degraded.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, text: &str, _word: &str, _lang_code: &str) -> String {
        text.to_string()
    }
}

/// Blocking client for the Wiktionary action API.
pub struct WiktionaryClient {
    http: reqwest::blocking::Client,
    api_url: String,
}

impl WiktionaryClient {
    pub fn new() -> Self {
        WiktionaryClient::with_api_url(DEFAULT_API_URL)
    }

    /// Point the client at a different MediaWiki instance (or a local
    /// test server).
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        WiktionaryClient {
            http: reqwest::blocking::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// The raw rendered HTML for a fragment, before any stripping.
    fn rendered_html(
        &self,
        text: &str,
        word: &str,
        lang_code: &str,
    ) -> Result<String, WiktionaryError> {
        let title = page_title(word, lang_code);
        let response: serde_json::Value = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "parse"),
                ("text", text),
                ("prop", "text"),
                ("title", &title),
                ("formatversion", "2"),
                ("format", "json"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        response["parse"]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or(WiktionaryError::MissingField("parse.text"))
    }

    fn render_inner(
        &self,
        text: &str,
        word: &str,
        lang_code: &str,
    ) -> Result<String, WiktionaryError> {
        let html = self.rendered_html(text, word, lang_code)?;

        // Keep only the first rendered paragraph; the rest is the
        // MediaWiki report comment and category plumbing.
        let paragraph = match html.find("</p") {
            Some(end) => &html[..end],
            None => html.as_str(),
        };

        let stripped = HTML_TAG.replace_all(paragraph, "");
        let cleaned = stripped
            .replace("&#32;", " ")
            .replace("&nbsp;", " ")
            .replace("&#160;", " ")
            .replace("&#8206;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
            .trim_matches('\n')
            .to_string();
        Ok(cleaned)
    }
}

impl Default for WiktionaryClient {
    fn default() -> Self {
        WiktionaryClient::new()
    }
}

impl PageSource for WiktionaryClient {
    fn fetch_wikitext(&self, word: &str, lang_code: &str) -> Result<String, WiktionaryError> {
        let title = page_title(word, lang_code);
        let response: serde_json::Value = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "parse"),
                ("page", title.as_str()),
                ("prop", "wikitext"),
                ("format", "json"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        // A missing page answers 200 with an error object instead of a
        // parse object.
        let wikitext = response["parse"]["wikitext"]["*"]
            .as_str()
            .ok_or_else(|| WiktionaryError::PageNotFound {
                word: word.to_string(),
            })?;

        // Some scripts arrive in decomposed form; normalize once here so
        // every downstream comparison sees NFC.
        Ok(wikitext.nfc().collect())
    }
}

impl Renderer for WiktionaryClient {
    fn render(&self, text: &str, word: &str, lang_code: &str) -> String {
        match self.render_inner(text, word, lang_code) {
            Ok(rendered) => rendered,
            Err(err) => {
                debug!(error = %err, "render degraded, passing raw text through");
                text.to_string()
            }
        }
    }

    fn render_html(&self, text: &str, word: &str, lang_code: &str) -> String {
        match self.rendered_html(text, word, lang_code) {
            Ok(html) => html,
            Err(err) => {
                debug!(error = %err, "html render degraded, passing raw text through");
                text.to_string()
            }
        }
    }
}
