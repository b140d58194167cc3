// src/config/mod.rs
pub mod consts;
pub mod locale;
pub mod options;
