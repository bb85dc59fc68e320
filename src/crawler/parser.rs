//! Attribute scanner for extracting candidate links from HTML
//!
//! Link values are taken from `href=` and `src=` attributes with a
//! case-insensitive token scan rather than a DOM parse, so malformed markup
//! still yields its links. A value starts after an optional quote and runs
//! until the first `<`, `>`, `"` or `'`.

use regex::Regex;
use std::sync::LazyLock;

static HREF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\shref\s*=\s*["']?([^<>"']+)"#).expect("href pattern must compile")
});

static SRC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\ssrc\s*=\s*["']?([^<>"']+)"#).expect("src pattern must compile")
});

/// Attribute families to scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Href,
    Src,
}

impl Attribute {
    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Href => &HREF_PATTERN,
            Self::Src => &SRC_PATTERN,
        }
    }
}

/// Extracts raw attribute values for the enabled attribute families
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    attributes: Vec<Attribute>,
}

impl LinkExtractor {
    /// Creates an extractor scanning `href` and/or `src` attributes
    pub fn new(watch_href: bool, watch_src: bool) -> Self {
        let mut attributes = Vec::with_capacity(2);
        if watch_href {
            attributes.push(Attribute::Href);
        }
        if watch_src {
            attributes.push(Attribute::Src);
        }
        Self { attributes }
    }

    /// Returns the raw, undecoded values found in `html`
    ///
    /// All `href` values come first, then all `src` values. Values are
    /// trimmed; empty values are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use ripple_check::crawler::LinkExtractor;
    ///
    /// let extractor = LinkExtractor::new(true, true);
    /// let html = r#"<a href="/page">x</a><img src='/logo.png'>"#;
    /// assert_eq!(extractor.extract(html), vec!["/page", "/logo.png"]);
    /// ```
    pub fn extract<'a>(&self, html: &'a str) -> Vec<&'a str> {
        let mut values = Vec::new();
        for attribute in &self.attributes {
            for captures in attribute.pattern().captures_iter(html) {
                if let Some(value) = captures.get(1) {
                    let value = value.as_str().trim();
                    if !value.is_empty() {
                        values.push(value);
                    }
                }
            }
        }
        values
    }
}
