// src/lib.rs

pub mod core;
pub mod corpus;
pub mod definitions;
pub mod error;
pub mod fuzzy;

pub use crate::core::config::EngineConfig;
pub use crate::core::engine::SpellEngine;
pub use crate::core::types::{CorpusStats, SuggestionResult, Verbosity};
pub use crate::error::{Result, SpellError};
