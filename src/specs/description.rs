// src/specs/description.rs
//! The `itemprop="description"` block.
//!
//! Two readings of the same container, kept apart on purpose:
//! - **bold labels**: the `<b>` fragments, in document order. The first is the
//!   perfume name, the second the house.
//! - **prose**: the first `<p>`, markup stripped, whitespace collapsed. Every
//!   natural-language field is derived from this text.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::consts::{SEL_BOLD, SEL_DESCRIPTION, SEL_PARAGRAPH};
use crate::core::html::{self, Page};

static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_DESCRIPTION));
static BOLD: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_BOLD));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_PARAGRAPH));

const NAME_AT: usize = 0;
const HOUSE_AT: usize = 1;

fn container(page: &Page) -> Option<ElementRef<'_>> {
    page.first(&DESCRIPTION)
}

/// Trimmed text of every `<b>` inside the description, in document order.
pub fn bold_labels(page: &Page) -> Vec<String> {
    container(page)
        .map(|div| div.select(&BOLD).map(html::text).collect::<Vec<_>>())
        .unwrap_or_default()
}

fn bold_at(page: &Page, at: usize) -> Option<String> {
    bold_labels(page).into_iter().nth(at).filter(|s| !s.is_empty())
}

/// First bold label.
pub fn name(page: &Page) -> Option<String> {
    bold_at(page, NAME_AT)
}

/// Second bold label; absent when the description has only one.
pub fn house(page: &Page) -> Option<String> {
    bold_at(page, HOUSE_AT)
}

/// Plain text of the first paragraph in the description.
pub fn prose(page: &Page) -> Option<String> {
    let p = container(page)?.select(&PARAGRAPH).next()?;
    Some(html::stripped_text(p)).filter(|t| !t.is_empty())
}
