// File: src/core/dictionary.rs
use crate::core::types::{DefinitionId, Entry};
use crate::error::{Result, SpellError};
use crate::fuzzy::symspell::expand;
use std::collections::HashMap;

/// Maps every known term and every delete-variant of a known term to its
/// `Entry`. Entries are created lazily and never removed.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashMap<String, Entry>,
    max_edit_distance: usize,
}

impl Dictionary {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_edit_distance,
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Number of entries, terms and delete-variants alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that are real terms.
    pub fn term_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_term()).count()
    }

    /// Records one occurrence of `term`, returning whether it was new.
    ///
    /// The delete index for a term is built exactly once, on its first
    /// occurrence, even if the key already existed as a delete-variant of
    /// another term. Later occurrences only bump the count and merge
    /// definitions.
    pub fn insert_term<I>(&mut self, term: &str, definitions: I) -> Result<bool>
    where
        I: IntoIterator<Item = DefinitionId>,
    {
        if term.is_empty() {
            return Err(SpellError::invalid_input("empty string can't be a term"));
        }

        let entry = self.entries.entry(term.to_string()).or_default();
        entry.count += 1;
        entry.definitions.extend(definitions);

        if entry.is_term() {
            return Ok(false);
        }
        entry.term = Some(term.to_string());

        let variants = expand(term, 0, self.max_edit_distance, true);
        log::debug!(
            "new term '{}': indexing {} delete-variants",
            term,
            variants.len()
        );
        for (variant, distance) in variants {
            // First write wins: an existing (variant, term) pair is never overwritten.
            self.entries
                .entry(variant)
                .or_default()
                .suggestions
                .entry(term.to_string())
                .or_insert(distance);
        }
        Ok(true)
    }
}
