// src/specs/identity.rs

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::config::consts::SEL_PERFUME_IMAGE;
use crate::core::html::{self, Page};

static ID_IN_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d+)\.html$").expect("static id pattern"));
static PERFUME_IMAGE: LazyLock<Selector> = LazyLock::new(|| html::selector(SEL_PERFUME_IMAGE));

/// ".../Tom-Ford/Soleil-Blanc-34893.html" → "34893"
/// The digits are returned verbatim, never coerced to a number.
pub fn perfume_id(url: &str) -> Option<String> {
    ID_IN_URL.captures(url).map(|c| s!(&c[1]))
}

/// `src` of the first perfume picture (the large bottle shot).
pub fn image_url(page: &Page) -> Option<String> {
    page.first(&PERFUME_IMAGE)
        .and_then(|img| html::attr(img, "src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_from_detail_url() {
        let url = "https://www.fragrantica.fr/parfum/Tom-Ford/Soleil-Blanc-34893.html";
        assert_eq!(perfume_id(url).as_deref(), Some("34893"));
        assert_eq!(perfume_id("/perfume/X/Y-007.html").as_deref(), Some("007"));
    }

    #[test]
    fn id_absent_for_other_shapes() {
        assert_eq!(perfume_id(""), None);
        assert_eq!(perfume_id("https://www.fragrantica.fr/designers/Dior.html"), None);
        assert_eq!(perfume_id("https://x/Soleil-Blanc-34893.html?lang=fr"), None);
        assert_eq!(perfume_id("https://x/Soleil-Blanc-34893.htm"), None);
        assert_eq!(perfume_id("https://x/Soleil-Blanc-.html"), None);
    }

    #[test]
    fn image_picks_perfume_picture_only() {
        let page = Page::parse(r#"
            <img src="https://fimgs.net/logo.png">
            <img src="https://fimgs.net/mdimg/perfume/375x500.34893.jpg" alt="Soleil Blanc">
            <img src="https://fimgs.net/mdimg/perfume/o.1.jpg">
        "#).unwrap();
        assert_eq!(
            image_url(&page).as_deref(),
            Some("https://fimgs.net/mdimg/perfume/375x500.34893.jpg")
        );
    }

    #[test]
    fn image_absent_without_match() {
        let page = Page::parse(r#"<img src="https://fimgs.net/logo.png">"#).unwrap();
        assert_eq!(image_url(&page), None);
    }
}
