// src/config/options.rs
use super::locale::Locale;

/// Runtime knobs for one extraction pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub locale: Locale,
}

impl ExtractOptions {
    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }
}
