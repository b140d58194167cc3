// tests/extract_fixture.rs
//
// End-to-end extraction against captured detail pages.
//
use std::path::PathBuf;

use parfum_scrape::specs::accords::Accord;
use parfum_scrape::specs::reviews::TenacityVote;
use parfum_scrape::{extract, ExtractOptions, Locale, Page};

const URL_FR: &str = "https://www.fragrantica.fr/parfum/Tom-Ford/Soleil-Blanc-34893.html";
const URL_EN: &str = "https://www.fragrantica.com/perfume/Tom-Ford/Soleil-Blanc-34893.html";

fn fixture(name: &str) -> String {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests/fixtures");
    p.push(name);
    std::fs::read_to_string(&p).unwrap()
}

fn accord(name: &str, weight: u8) -> Accord {
    Accord { name: name.to_string(), weight }
}

fn vote(modality: &str, votes: u32) -> TenacityVote {
    TenacityVote { modality: modality.to_string(), votes }
}

#[test]
fn french_page_full_record() {
    let page = Page::parse(&fixture("soleil_blanc_fr.html")).unwrap();
    let rec = extract(&page, Some(URL_FR), &ExtractOptions::with_locale(Locale::Fr));

    assert_eq!(rec.id.as_deref(), Some("34893"));
    assert_eq!(rec.name.as_deref(), Some("Soleil Blanc"));
    assert_eq!(rec.house.as_deref(), Some("Tom Ford"));
    assert_eq!(rec.creators, vec!["Yann Vasnier"]);
    assert_eq!(
        rec.image_url.as_deref(),
        Some("https://fimgs.net/mdimg/perfume/375x500.34893.jpg")
    );
    assert_eq!(rec.launch_year.as_deref(), Some("2016"));
    assert_eq!(rec.family.as_deref(), Some("Ambre floral"));

    let desc = rec.description.as_deref().unwrap();
    assert!(desc.starts_with("Soleil Blanc de Tom Ford est un parfum ambre floral pour femme et homme."));
    assert!(!desc.contains("English"), "only the first paragraph is prose");
    assert!(!desc.contains('\n'));

    assert_eq!(
        rec.accords,
        vec![
            accord("Ambré", 100),
            accord("Floral blanc", 84),
            accord("Noix de coco", 62),
            accord("Balsamique", 47),
        ]
    );

    assert_eq!(rec.notes.top, ["Pistache", "Bergamote", "Cardamome", "Poivre rose"]);
    assert_eq!(rec.notes.heart, ["Tubéreuse", "Jasmin", "Ylang-ylang", "Fleur d'oranger"]);
    assert_eq!(rec.notes.base, ["Noix de coco", "Ambre", "Benjoin", "Fève tonka"]);

    assert_eq!(rec.rating, Some(4.04));
    assert_eq!(rec.rating_count, Some(6421));
    assert_eq!(
        rec.tenacity,
        vec![
            vote("très faible", 187),
            vote("faible", 354),
            vote("modérée", 1265),
            vote("longue durée", 1148),
            vote("éternelle", 392),
        ]
    );
    assert_eq!(rec.missing_fields(), 0);
}

#[test]
fn english_page_with_english_phrases() {
    let page = Page::parse(&fixture("soleil_blanc_en.html")).unwrap();
    let rec = extract(&page, Some(URL_EN), &ExtractOptions::with_locale(Locale::En));

    assert_eq!(rec.id.as_deref(), Some("34893"));
    assert_eq!(rec.name.as_deref(), Some("Soleil Blanc"));
    assert_eq!(rec.house.as_deref(), Some("Tom Ford"));
    assert_eq!(rec.launch_year.as_deref(), Some("2016"));
    assert_eq!(rec.family.as_deref(), Some("Amber floral"));
    assert_eq!(rec.notes.top, ["Pistachio", "Bergamot", "Cardamom", "Pink pepper"]);
    assert_eq!(rec.notes.heart, ["Tuberose", "Jasmine", "Ylang-ylang", "Orange blossom"]);
    assert_eq!(rec.notes.base, ["Coconut", "Amber", "Benzoin", "Tonka bean"]);
    assert_eq!(rec.accords, vec![accord("Amber", 100), accord("White floral", 84)]);
    assert_eq!(rec.rating, Some(4.04));
    assert_eq!(rec.rating_count, Some(6421));
    assert_eq!(rec.tenacity, vec![vote("very weak", 187)]);
}

#[test]
fn wrong_locale_only_loses_prose_fields() {
    let page = Page::parse(&fixture("soleil_blanc_en.html")).unwrap();
    let rec = extract(&page, None, &ExtractOptions::with_locale(Locale::Fr));

    assert_eq!(rec.id, None);
    assert_eq!(rec.launch_year, None);
    assert_eq!(rec.family, None);
    assert!(rec.notes.is_empty());
    // Markup-driven fields do not care about the locale.
    assert_eq!(rec.name.as_deref(), Some("Soleil Blanc"));
    assert_eq!(rec.rating_count, Some(6421));
    assert_eq!(rec.accords.len(), 2);
}

#[test]
fn extraction_is_repeatable() {
    let page = Page::parse(&fixture("soleil_blanc_fr.html")).unwrap();
    let opts = ExtractOptions::default();
    assert_eq!(extract(&page, Some(URL_FR), &opts), extract(&page, Some(URL_FR), &opts));
}
