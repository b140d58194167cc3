// src/specs/accords.rs

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::config::consts::SEL_ACCORD_BAR;
use crate::core::html::{self, Page};
use crate::core::sanitize::{capitalize, normalize_ws};

static ACCORD_BAR: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_ACCORD_BAR));
static BAR_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"width:\s*([\d.]+)%").expect("static width pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accord {
    pub name: String,
    /// Relative strength, 0..=100.
    pub weight: u8,
}

/// "width: 97.6%;" → 98. Ties round to even.
fn bar_weight(style: &str) -> Option<u8> {
    let caps = BAR_WIDTH.captures(style)?;
    let pct: f64 = caps[1].parse().ok()?;
    Some(pct.clamp(0.0, 100.0).round_ties_even() as u8)
}

/// Accord bars in page order (the site already sorts them by strength).
/// A bar without a readable width is left out rather than given weight 0.
/// The label is taken as-is, even when empty.
pub fn accords(page: &Page) -> Vec<Accord> {
    page.all(&ACCORD_BAR)
        .filter_map(|bar| {
            let weight = bar_weight(html::attr(bar, "style")?)?;
            let name = capitalize(&normalize_ws(&html::text(bar)));
            Some(Accord { name, weight })
        })
        .collect()
}
