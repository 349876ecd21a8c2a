// src/core/mod.rs
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod types;
