// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod progress;
pub mod record;
pub mod scrape;

pub use crate::config::locale::Locale;
pub use crate::config::options::ExtractOptions;
pub use crate::core::Page;
pub use crate::record::{extract, PerfumeRecord};
