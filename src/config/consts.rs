// src/config/consts.rs

// Detail page markup
pub const SEL_DESCRIPTION: &str = r#"div[itemprop="description"]"#;
pub const SEL_BOLD: &str = "b";
pub const SEL_PARAGRAPH: &str = "p";
pub const SEL_NOSE_LINK: &str = r#"a[href*="/noses/"]"#;
pub const SEL_PERFUME_IMAGE: &str = r#"img[src*="mdimg/perfume/"]"#;
pub const SEL_ACCORD_BAR: &str = "div.accord-bar";
pub const SEL_RATING_VALUE: &str = r#"span[itemprop="ratingValue"]"#;
pub const SEL_RATING_COUNT: &str = r#"span[itemprop="ratingCount"]"#;
// Exact class attribute; wrappers carry extra classes and must not match.
pub const SEL_VOTE_SECTION: &str = r#"div[class="grid-x grid-margin-x"]"#;
pub const SEL_VOTE_NAME: &str = "span.vote-button-name";
pub const SEL_VOTE_LEGEND: &str = "span.vote-button-legend";

// Link labels that sit next to nose links but are not names
pub const CREATOR_PLACEHOLDERS: &[&str] = &["Perfumers", "Perfumer", "Nose", ""];

// Local log
pub const LOG_FILE: &str = ".store/debug.log";

// Batch extraction
pub const WORKERS: usize = 4;
