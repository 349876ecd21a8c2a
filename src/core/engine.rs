// File: src/core/engine.rs
use crate::core::config::EngineConfig;
use crate::core::dictionary::Dictionary;
use crate::core::types::{CorpusStats, Entry, SuggestionResult, Verbosity};
use crate::corpus::parse_words;
use crate::definitions::DefinitionStore;
use crate::error::{Result, SpellError};
use crate::fuzzy::symspell;
use parking_lot::RwLock;
use std::io::BufRead;

/// The spelling engine: owns the dictionary and definition stores.
///
/// Writers (`ingest`) take the dictionary lock exclusively for the whole call,
/// readers (`lookup`, `suggest`) share it, so a lookup never observes a term
/// halfway through its delete expansion. Share it across threads behind an
/// `Arc`.
pub struct SpellEngine {
    config: EngineConfig,
    dictionary: RwLock<Dictionary>,
    definitions: DefinitionStore,
}

impl Default for SpellEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellEngine {
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            config,
            dictionary: RwLock::new(Dictionary::new(config.max_edit_distance)),
            definitions: DefinitionStore::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn max_edit_distance(&self) -> usize {
        self.config.max_edit_distance
    }

    /// Adds one occurrence of `term` with its definitions.
    /// Returns `true` the first time the term is seen.
    pub fn ingest<S: AsRef<str>>(&self, term: &str, definitions: &[S]) -> Result<bool> {
        if term.is_empty() {
            return Err(SpellError::invalid_input("empty string can't be a term"));
        }

        let mut dictionary = self.dictionary.write();
        let ids: Vec<u64> = definitions
            .iter()
            .map(|def| self.definitions.add(def.as_ref()))
            .collect();
        dictionary.insert_term(term, ids)
    }

    /// Ingests every word of `text` (see `parse_words`) without definitions.
    pub fn ingest_corpus(&self, text: &str) -> Result<CorpusStats> {
        let words = self.ingest_words(parse_words(text))?;
        Ok(self.corpus_stats(words))
    }

    /// Like `ingest_corpus`, reading the corpus line by line.
    pub fn ingest_reader<R: BufRead>(&self, reader: R) -> Result<CorpusStats> {
        let mut words = 0;
        for line in reader.lines() {
            words += self.ingest_words(parse_words(&line?))?;
        }
        Ok(self.corpus_stats(words))
    }

    fn ingest_words(&self, words: Vec<String>) -> Result<usize> {
        let mut added = 0;
        for word in words {
            if self.ingest::<&str>(&word, &[])? {
                added += 1;
            }
        }
        Ok(added)
    }

    fn corpus_stats(&self, words: usize) -> CorpusStats {
        let stats = CorpusStats {
            words,
            entries: self.entry_count(),
        };
        log::info!(
            "Dictionary created: {} words, {} entries, for edit distance={}",
            stats.words,
            stats.entries,
            self.max_edit_distance()
        );
        stats
    }

    /// All known terms within the maximum edit distance of `input`, in
    /// discovery order. The first distance found for a term is the one kept.
    pub fn lookup(&self, input: &str) -> Vec<SuggestionResult> {
        let dictionary = self.dictionary.read();
        symspell::lookup(&dictionary, input)
            .into_iter()
            .map(|hit| SuggestionResult {
                term: hit.term.to_string(),
                count: hit.entry.count,
                distance: hit.distance,
                definitions: self.resolve_definitions(hit.entry),
            })
            .collect()
    }

    /// Lookup results ranked by distance, then frequency, trimmed to the
    /// configured verbosity.
    pub fn suggest(&self, input: &str) -> Vec<SuggestionResult> {
        rank(self.lookup(input), self.config.verbosity)
    }

    /// Number of dictionary entries, terms and delete-variants alike.
    pub fn entry_count(&self) -> usize {
        self.dictionary.read().len()
    }

    pub fn term_count(&self) -> usize {
        self.dictionary.read().term_count()
    }

    /// How often `term` was ingested; `None` for unknown terms.
    pub fn frequency(&self, term: &str) -> Option<u64> {
        self.dictionary
            .read()
            .get(term)
            .filter(|entry| entry.is_term())
            .map(|entry| entry.count)
    }

    pub fn definitions(&self, term: &str) -> Vec<String> {
        let dictionary = self.dictionary.read();
        match dictionary.get(term) {
            Some(entry) if entry.is_term() => self.resolve_definitions(entry),
            _ => Vec::new(),
        }
    }

    fn resolve_definitions(&self, entry: &Entry) -> Vec<String> {
        entry
            .definitions
            .iter()
            .flat_map(|&id| self.definitions.get(id))
            .collect()
    }
}

/// Sorts by distance ascending, then count descending, then term, and keeps
/// what `verbosity` asks for.
pub fn rank(mut results: Vec<SuggestionResult>, verbosity: Verbosity) -> Vec<SuggestionResult> {
    results.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.term.cmp(&b.term))
    });
    match verbosity {
        Verbosity::Top => results.truncate(1),
        Verbosity::Closest => {
            if let Some(best) = results.first().map(|r| r.distance) {
                results.retain(|r| r.distance == best);
            }
        }
        Verbosity::All => {}
    }
    results
}
