// File: src/definitions.rs
use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hasher;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1 64-bit hasher (multiply, then xor).
#[derive(Debug, Clone, Copy)]
pub struct Fnv64 {
    state: u64,
}

impl Default for Fnv64 {
    fn default() -> Self {
        Self { state: FNV_OFFSET_BASIS }
    }
}

impl Hasher for Fnv64 {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self.state.wrapping_mul(FNV_PRIME);
            self.state ^= u64::from(byte);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Hashes the raw UTF-8 bytes of `text` with FNV-1 64.
pub fn fnv64(text: &str) -> u64 {
    let mut hasher = Fnv64::default();
    hasher.write(text.as_bytes());
    hasher.finish()
}

/// Append-only, hash-bucketed storage for definition texts.
/// Entries reference definitions by their 64-bit hash; a bucket keeps every
/// distinct text that hashed to the same id.
#[derive(Debug, Default)]
pub struct DefinitionStore {
    buckets: RwLock<HashMap<u64, Vec<String>>>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` and returns its stable identifier.
    pub fn add(&self, text: &str) -> u64 {
        let id = fnv64(text);
        let mut buckets = self.buckets.write();
        let bucket = buckets.entry(id).or_default();
        if !bucket.iter().any(|existing| existing == text) {
            bucket.push(text.to_string());
        }
        id
    }

    /// All texts stored under `id`; empty when the id is unknown.
    pub fn get(&self, id: u64) -> Vec<String> {
        self.buckets.read().get(&id).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buckets.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
