// src/specs/reviews.rs
//! Community reception: average rating, number of ratings, longevity votes.

use std::sync::LazyLock;

use scraper::Selector;

use crate::config::consts::{
    SEL_RATING_COUNT, SEL_RATING_VALUE, SEL_VOTE_LEGEND, SEL_VOTE_NAME, SEL_VOTE_SECTION,
};
use crate::core::html::{self, Page};
use crate::core::sanitize::{normalize_ws, parse_decimal};

static RATING_VALUE: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_RATING_VALUE));
static RATING_COUNT: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_RATING_COUNT));
static VOTE_SECTION: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_VOTE_SECTION));
static VOTE_NAME: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_VOTE_NAME));
static VOTE_LEGEND: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_VOTE_LEGEND));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenacityVote {
    /// Lower-cased modality label ("faible", "longue durée", …).
    pub modality: String,
    pub votes: u32,
}

/// Average rating out of 5. "4,4" and "4.4" both read as 4.4.
pub fn rating(page: &Page) -> Option<f64> {
    parse_decimal(&html::text(page.first(&RATING_VALUE)?))
}

/// Number of ratings, from the `content` attribute only. The visible text is
/// rounded ("1,2k") and is never read.
pub fn rating_count(page: &Page) -> Option<u32> {
    let content = html::attr(page.first(&RATING_COUNT)?, "content")?;
    content.trim().parse::<u32>().ok()
}

/// One `(modality, votes)` pair per vote row, in page order. A row missing its
/// label or its counter, or whose counter is not a number, is skipped whole.
pub fn tenacity(page: &Page) -> Vec<TenacityVote> {
    let mut out = Vec::new();
    for section in page.all(&VOTE_SECTION) {
        let name = section.select(&VOTE_NAME).next();
        let legend = section.select(&VOTE_LEGEND).next();
        let (Some(name), Some(legend)) = (name, legend) else {
            continue;
        };
        let Ok(votes) = html::text(legend).parse::<u32>() else {
            continue;
        };
        let modality = normalize_ws(&html::text(name)).to_lowercase();
        out.push(TenacityVote { modality, votes });
    }
    out
}
