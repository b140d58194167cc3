// src/specs/prose.rs
//! Fields read out of the description prose with the locale's phrase table.
//!
//! Every function takes the prose as produced by
//! [`description::prose`](super::description::prose), already computed once for
//! the page, and returns nothing when either the prose or the phrase is missing.

use crate::config::locale::Locale;
use crate::core::sanitize::capitalize;

use super::notes::{split_notes, NoteTiers, Tier};

/// "… a été lancé en 2003." → "2003"
pub fn launch_year(prose: Option<&str>, locale: Locale) -> Option<String> {
    let caps = locale.patterns().launch_year.captures(prose?)?;
    Some(s!(&caps[1]))
}

/// "… est un parfum boisé épicé pour homme." → "Boisé épicé"
pub fn family(prose: Option<&str>, locale: Locale) -> Option<String> {
    let caps = locale.patterns().family.captures(prose?)?;
    Some(caps[1].trim()).filter(|f| !f.is_empty()).map(capitalize)
}

/// Top, heart and base notes from "Les notes de tête sont …; …".
/// Each tier is searched independently; missing tiers stay empty.
pub fn note_tiers(prose: Option<&str>, locale: Locale) -> NoteTiers {
    let mut tiers = NoteTiers::default();
    let Some(text) = prose else {
        return tiers;
    };
    let patterns = locale.patterns();
    for tier in Tier::ALL {
        if let Some(caps) = patterns.tier(tier).captures(text) {
            tiers.set(tier, split_notes(&caps[1], patterns.conjunction));
        }
    }
    tiers
}
