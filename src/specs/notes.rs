// src/specs/notes.rs
//! Note pyramid types and the enumeration splitter shared by all three tiers.

use crate::core::sanitize::capitalize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Top,
    Heart,
    Base,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Top, Tier::Heart, Tier::Base];

    pub fn key(self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::Heart => "heart",
            Tier::Base => "base",
        }
    }
}

/// Top, heart and base notes. All three tiers always exist; a tier the
/// description does not mention is simply empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteTiers {
    pub top: Vec<String>,
    pub heart: Vec<String>,
    pub base: Vec<String>,
}

impl NoteTiers {
    pub fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Top => &self.top,
            Tier::Heart => &self.heart,
            Tier::Base => &self.base,
        }
    }

    pub fn set(&mut self, tier: Tier, notes: Vec<String>) {
        match tier {
            Tier::Top => self.top = notes,
            Tier::Heart => self.heart = notes,
            Tier::Base => self.base = notes,
        }
    }

    pub fn is_empty(&self) -> bool {
        Tier::ALL.iter().all(|&t| self.get(t).is_empty())
    }

    /// `(key, notes)` for every tier, top first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        Tier::ALL.into_iter().map(move |t| (t.key(), self.get(t)))
    }
}

fn push_note(out: &mut Vec<String>, raw: &str) {
    let note = raw.trim();
    if !note.is_empty() {
        out.push(capitalize(note));
    }
}

/// "Ambre, Vanille et Cuir" → ["Ambre", "Vanille", "Cuir"]
///
/// Only the *last* conjunction splits, so a note that contains the
/// conjunction word earlier in the list stays whole. Everything before it is
/// comma-separated; everything after it is one note. Empty fragments are dropped.
/// `conjunction` includes its surrounding spaces (" et ").
pub fn split_notes(text: &str, conjunction: &str) -> Vec<String> {
    let text = text.trim();
    let mut notes = Vec::new();
    match text.rsplit_once(conjunction) {
        Some((head, last)) => {
            for part in head.split(',') {
                push_note(&mut notes, part);
            }
            push_note(&mut notes, last);
        }
        None => {
            for part in text.split(',') {
                push_note(&mut notes, part);
            }
        }
    }
    notes
}
