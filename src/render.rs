use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

use crate::data_models::AiOverview;

const INDEX_TEMPLATE: &str = "index.html";

/// Stands in for a URL whose scheme is not allowed in a link.
pub const UNSAFE_URL: &str = "#ZgotmplZ";

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Everything the index page needs.
#[derive(Serialize, Debug, Clone, Default)]
pub struct PageView {
    pub query: String,
    pub overview: Option<AiOverview>,
    pub error: Option<String>,
}

impl PageView {
    pub fn new(query: impl Into<String>) -> Self {
        PageView {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Compiled page templates. Built once at startup and shared by all requests.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> tera::Result<Renderer> {
        let mut tera = Tera::default();
        tera.register_filter("safe_url", safe_url_filter);
        tera.register_filter("title_words", title_words_filter);
        // `.html` names are autoescaped by tera
        tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Renderer { tera })
    }

    pub fn render(&self, view: &PageView) -> tera::Result<String> {
        let context = Context::from_serialize(view)?;
        self.tera.render(INDEX_TEMPLATE, &context)
    }
}

/// Keeps relative URLs and the http, https and mailto schemes; anything else
/// becomes [`UNSAFE_URL`].
pub fn safe_url(url: &str) -> &str {
    match url.find(':') {
        Some(i) if !url[..i].contains('/') => {
            let scheme = url[..i].to_ascii_lowercase();
            if SAFE_SCHEMES.contains(&scheme.as_str()) {
                url
            } else {
                UNSAFE_URL
            }
        }
        _ => url,
    }
}

/// Uppercases the first letter of every word and leaves the rest untouched.
pub fn title_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

fn safe_url_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let url = tera::try_get_value!("safe_url", "value", String, value);
    Ok(Value::String(safe_url(&url).to_string()))
}

fn title_words_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = tera::try_get_value!("title_words", "value", String, value);
    Ok(Value::String(title_words(&text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_url_allows_web_and_relative_links() {
        for url in [
            "https://example.com/a?b=c",
            "http://example.com",
            "HTTPS://EXAMPLE.COM",
            "mailto:someone@example.com",
            "/relative/path",
            "page.html#frag",
            "/search?q=a:b",
            "",
        ] {
            assert_eq!(safe_url(url), url);
        }
    }

    #[test]
    fn test_safe_url_blocks_other_schemes() {
        for url in [
            "javascript:alert(document.cookie)",
            "JavaScript:alert(1)",
            "data:text/html,<script>alert(1)</script>",
            "vbscript:msgbox",
            " javascript:alert(1)",
        ] {
            assert_eq!(safe_url(url), UNSAFE_URL);
        }
    }

    #[test]
    fn test_title_words_keeps_inner_case() {
        assert_eq!(title_words("paragraph"), "Paragraph");
        assert_eq!(title_words("AI summary"), "AI Summary");
        assert_eq!(title_words("list-item eBay"), "List-Item EBay");
        assert_eq!(title_words("snake_case word"), "Snake_case Word");
        assert_eq!(title_words(""), "");
    }
}
