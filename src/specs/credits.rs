// src/specs/credits.rs

use std::sync::LazyLock;

use scraper::Selector;

use crate::config::consts::{CREATOR_PLACEHOLDERS, SEL_NOSE_LINK};
use crate::core::html::{self, Page};
use crate::core::sanitize::normalize_ws;

static NOSE_LINK: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_NOSE_LINK));

fn is_placeholder(label: &str) -> bool {
    CREATOR_PLACEHOLDERS.iter().any(|p| p.eq_ignore_ascii_case(label))
}

/// Perfumer names from every link to a `/noses/` profile on the page.
/// Unique, first-seen order; section labels ("Perfumers", "Nose") are not names.
/// Never absent: no credits is an empty list.
pub fn creators(page: &Page) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for link in page.all(&NOSE_LINK) {
        let name = normalize_ws(&html::text(link));
        if is_placeholder(&name) || names.contains(&name) {
            continue;
        }
        names.push(name);
    }
    names
}
