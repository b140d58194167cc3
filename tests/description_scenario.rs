// tests/description_scenario.rs
//
// A minimal page where every prose field comes from one sentence block.
//
use parfum_scrape::{extract, ExtractOptions, Page};

const PAGE: &str = r#"
<html><body>
  <div itemprop="description">
    <p><b>X</b> de <b>Maison Y</b> est un parfum floral pour femme. Un classique.
       Les notes de tête sont Bergamote et Citron; Les notes de cœur sont Jasmin, Rose et Ylang;
       La note de fond est Musc blanc. <b>X</b> a été lancé en 2003.</p>
  </div>
</body></html>
"#;

#[test]
fn family_year_and_pyramid_from_prose() {
    let page = Page::parse(PAGE).unwrap();
    let rec = extract(&page, None, &ExtractOptions::default());

    assert_eq!(rec.family.as_deref(), Some("Floral"));
    assert_eq!(rec.launch_year.as_deref(), Some("2003"));
    assert_eq!(rec.notes.top, ["Bergamote", "Citron"]);
    assert_eq!(rec.notes.heart, ["Jasmin", "Rose", "Ylang"]);
    assert_eq!(rec.notes.base, ["Musc blanc"]);
}

#[test]
fn markup_only_fields_stay_absent() {
    let page = Page::parse(PAGE).unwrap();
    let rec = extract(&page, Some("https://www.fragrantica.fr/parfum/Y/X.html"), &ExtractOptions::default());

    assert_eq!(rec.name.as_deref(), Some("X"));
    assert_eq!(rec.house.as_deref(), Some("Maison Y"));
    assert_eq!(rec.id, None);
    assert_eq!(rec.image_url, None);
    assert_eq!(rec.rating, None);
    assert_eq!(rec.rating_count, None);
    assert!(rec.creators.is_empty());
    assert!(rec.accords.is_empty());
    assert!(rec.tenacity.is_empty());
}
