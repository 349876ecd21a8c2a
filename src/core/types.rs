// src/core/types.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of a definition text inside the `DefinitionStore`.
pub type DefinitionId = u64;

/// One slot of the dictionary store. The key is either a real corpus term or
/// a delete-variant of one (or both).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Set once the key has been ingested as a real term; `None` for pure
    /// delete-variants.
    pub term: Option<String>,
    /// Number of times `term` was ingested.
    pub count: u64,
    /// Longer terms this key is a delete-variant of, with the deletion
    /// distance recorded when that term was first expanded.
    pub suggestions: IndexMap<String, usize>,
    pub definitions: BTreeSet<DefinitionId>,
}

impl Entry {
    pub fn is_term(&self) -> bool {
        self.term.is_some()
    }
}

/// A single lookup hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub term: String,
    pub count: u64,
    /// Verified edit distance from the query.
    pub distance: usize,
    pub definitions: Vec<String>,
}

/// Controls which suggestions `SpellEngine::suggest` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// The single best suggestion.
    Top,
    /// Every suggestion at the smallest distance found.
    Closest,
    /// Every suggestion within the maximum edit distance.
    #[default]
    All,
}

/// Summary of a corpus ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Distinct terms seen for the first time.
    pub words: usize,
    /// Dictionary size (terms and delete-variants) afterwards.
    pub entries: usize,
}
