// src/record.rs
use crate::config::options::ExtractOptions;
use crate::core::Page;
use crate::specs::accords::{self, Accord};
use crate::specs::notes::NoteTiers;
use crate::specs::reviews::{self, TenacityVote};
use crate::specs::{credits, description, identity, prose};

/// Everything derivable from one detail page. Each field stands alone:
/// one being absent says nothing about the others.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfumeRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub house: Option<String>,
    pub creators: Vec<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub launch_year: Option<String>,
    pub family: Option<String>,
    pub accords: Vec<Accord>,
    pub notes: NoteTiers,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub tenacity: Vec<TenacityVote>,
}

impl PerfumeRecord {
    /// Count of scalar fields that came out empty.
    pub fn missing_fields(&self) -> usize {
        [
            self.id.is_none(),
            self.name.is_none(),
            self.house.is_none(),
            self.image_url.is_none(),
            self.description.is_none(),
            self.launch_year.is_none(),
            self.family.is_none(),
            self.rating.is_none(),
            self.rating_count.is_none(),
        ]
        .into_iter()
        .filter(|&missing| missing)
        .count()
    }

    /// "Name (House)" when known, for progress lines.
    pub fn label(&self) -> String {
        match (&self.name, &self.house) {
            (Some(n), Some(h)) => format!("{n} ({h})"),
            (Some(n), None) => n.clone(),
            _ => self.id.clone().unwrap_or_else(|| s!("?")),
        }
    }
}

/// Run every extractor over one page. Never fails; missing pieces stay empty.
/// `url` is only used for the perfume id.
pub fn extract(page: &Page, url: Option<&str>, opts: &ExtractOptions) -> PerfumeRecord {
    let locale = opts.locale;
    // Computed once, shared by every prose field.
    let text = description::prose(page);
    let prose_ref = text.as_deref();

    PerfumeRecord {
        id: url.and_then(identity::perfume_id),
        name: description::name(page),
        house: description::house(page),
        creators: credits::creators(page),
        image_url: identity::image_url(page),
        launch_year: prose::launch_year(prose_ref, locale),
        family: prose::family(prose_ref, locale),
        accords: accords::accords(page),
        notes: prose::note_tiers(prose_ref, locale),
        rating: reviews::rating(page),
        rating_count: reviews::rating_count(page),
        tenacity: reviews::tenacity(page),
        description: text,
    }
}
