// src/specs/mod.rs
//! # Field extraction "specs"
//!
//! One module per group of fields on a perfume detail page. Each spec encodes
//! *where the value lives in the markup* and *how to read it tolerantly*.
//!
//! ## Conventions & invariants
//! - Every extractor is a free function over a borrowed [`Page`](crate::core::Page)
//!   (or over the already-extracted description prose). No state, no I/O.
//! - **Fail soft.** A missing container or an unparsable value yields `None`
//!   (or an empty `Vec`) for that field only. Nothing here returns `Result`.
//! - Extractors never call each other, with one exception: the prose-based
//!   fields in [`prose`] consume the text produced by [`description::prose`].
//!   Compute it once per page and pass it along.
//! - Selectors are compiled once per process.
//! - No logging here either. An absent field is just `None`; `scrape` decides
//!   what is worth writing to the debug log.
//!
//! ## Current specs
//! - `identity` – perfume id from the page URL, main image.
//! - `description` – the `itemprop="description"` block: bold labels (name,
//!   house) and the first paragraph as plain prose.
//! - `credits` – perfumers (nose links).
//! - `prose` – launch year, olfactory family, note pyramid from the prose.
//! - `notes` – note tiers and the enumeration splitter they share.
//! - `accords` – weighted accord bars.
//! - `reviews` – average rating, rating count, longevity votes.
//!
//! In short: **`specs` knows how to read the page.** Assembly lives in
//! `record`, batching in `scrape`.
pub mod accords;
pub mod credits;
pub mod description;
pub mod identity;
pub mod notes;
pub mod prose;
pub mod reviews;
