// src/config/locale.rs
//! Phrase tables for the description prose.
//!
//! The site writes the same sentences for every perfume, only the values
//! change. Each locale is one `PhraseTable` of regex sources; capture group 1
//! is always the value. A new edition of the site is a new table plus a new
//! `Locale` variant, never new extraction code.
//!
//! Locales are selected explicitly by the caller. Nothing here sniffs the page.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::specs::notes::Tier;

/// Raw phrase templates for one locale.
pub struct PhraseTable {
    pub launch_year: &'static str,
    pub family: &'static str,
    pub top: &'static str,
    pub heart: &'static str,
    pub base: &'static str,
    /// Final conjunction of an enumeration, with its surrounding spaces.
    pub conjunction: &'static str,
}

/// fragrantica.fr
pub const FR: PhraseTable = PhraseTable {
    launch_year: r"a été lancé en (\d{4})\b",
    family: r"(?i)est un parfum (.+?) pour",
    // "tête" may arrive precomposed or as e + combining circumflex
    top: r"(?i)(?:la|les) notes? de t(?:ê|e\x{302})te (?:est|sont) (.+?)(?:[;.]|$)",
    heart: r"(?i)(?:la|les) notes? de c(?:œ|oe)ur (?:est|sont) (.+?)(?:[;.]|$)",
    base: r"(?i)(?:la|les) notes? de fond (?:est|sont) (.+?)(?:[;.]|$)",
    conjunction: " et ",
};

/// fragrantica.com
pub const EN: PhraseTable = PhraseTable {
    launch_year: r"was launched in (\d{4})\b",
    family: r"(?i)is an? (.+?) fragrance for",
    top: r"(?i)top notes? (?:is|are) (.+?)(?:[;.]|$)",
    heart: r"(?i)(?:middle|heart) notes? (?:is|are) (.+?)(?:[;.]|$)",
    base: r"(?i)base notes? (?:is|are) (.+?)(?:[;.]|$)",
    conjunction: " and ",
};

/// A phrase table compiled into regexes.
pub struct PatternSet {
    pub launch_year: Regex,
    pub family: Regex,
    top: Regex,
    heart: Regex,
    base: Regex,
    pub conjunction: &'static str,
}

impl PatternSet {
    fn compile(table: &PhraseTable) -> Self {
        let re = |src: &str| Regex::new(src).expect("phrase table pattern must compile");
        Self {
            launch_year: re(table.launch_year),
            family: re(table.family),
            top: re(table.top),
            heart: re(table.heart),
            base: re(table.base),
            conjunction: table.conjunction,
        }
    }

    pub fn tier(&self, tier: Tier) -> &Regex {
        match tier {
            Tier::Top => &self.top,
            Tier::Heart => &self.heart,
            Tier::Base => &self.base,
        }
    }
}

static FR_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(Locale::Fr.table()));
static EN_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(Locale::En.table()));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    pub fn table(self) -> &'static PhraseTable {
        match self {
            Locale::Fr => &FR,
            Locale::En => &EN,
        }
    }

    pub fn patterns(self) -> &'static PatternSet {
        match self {
            Locale::Fr => &FR_PATTERNS,
            Locale::En => &EN_PATTERNS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            other => Err(format!("Unknown locale: {other}")),
        }
    }
}
