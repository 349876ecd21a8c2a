// src/fuzzy/mod.rs
pub mod distance;
pub mod symspell;
