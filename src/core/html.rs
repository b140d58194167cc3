// src/core/html.rs
//! Thin accessor over a parsed `scraper` document.
//!
//! Extractors only ever need: first match, all matches, text, attribute.
//! Keeping those here means no spec touches `scraper` internals directly.

use std::error::Error;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// One parsed detail page. Read-only once built.
pub struct Page {
    doc: Html,
}

impl Page {
    /// Parse raw markup. Broken markup is fine; input with no markup at all is not.
    pub fn parse(markup: &str) -> Result<Self, Box<dyn Error>> {
        if !looks_like_markup(markup) {
            return Err("input is not an HTML document".into());
        }
        Ok(Self { doc: Html::parse_document(markup) })
    }

    pub fn first(&self, sel: &Selector) -> Option<ElementRef<'_>> {
        self.doc.select(sel).next()
    }

    pub fn all<'a>(&'a self, sel: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.doc.select(sel)
    }
}

fn looks_like_markup(s: &str) -> bool {
    let t = s.trim();
    !t.is_empty() && t.contains('<') && t.contains('>')
}

/// Compile a selector from a constant. Only called from `LazyLock` statics.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// All descendant text, concatenated as-is and trimmed.
pub fn text(el: ElementRef<'_>) -> String {
    s!(el.text().collect::<String>().trim())
}

/// Each text node trimmed, empty ones dropped, joined by single spaces.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    let parts: Vec<&str> = el.text().map(str::trim).filter(|t| !t.is_empty()).collect();
    normalize_ws(&parts.join(" "))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
