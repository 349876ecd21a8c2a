// File: src/fuzzy/symspell.rs
use crate::core::dictionary::Dictionary;
use crate::core::types::Entry;
use crate::fuzzy::distance::true_distance;
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};

/// A term matched by `lookup`, borrowed from the dictionary it was found in.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub term: &'a str,
    pub entry: &'a Entry,
    pub distance: usize,
}

/// Generates delete-variants of `term`, labelled with their deletion distance.
///
/// Every single-character deletion is labelled `start_distance + 1`. With
/// `collect_recursive` set, variants keep being expanded until the label
/// reaches `max_distance`. The first label recorded for a variant wins.
/// Terms of one character or less produce nothing.
pub fn expand(
    term: &str,
    start_distance: usize,
    max_distance: usize,
    collect_recursive: bool,
) -> IndexMap<String, usize> {
    let mut variants = IndexMap::new();
    let mut pending = VecDeque::from([(term.to_string(), start_distance)]);

    while let Some((word, distance)) = pending.pop_front() {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= 1 {
            continue;
        }
        let next_distance = distance + 1;

        for skip in 0..chars.len() {
            let variant: String = chars
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &c)| c)
                .collect();
            if variants.contains_key(&variant) {
                continue;
            }
            variants.insert(variant.clone(), next_distance);
            if collect_recursive && next_distance < max_distance {
                pending.push_back((variant, next_distance));
            }
        }
    }
    variants
}

/// Finds every known term within the dictionary's maximum edit distance of
/// `input`.
///
/// Walks the delete-variants of `input` breadth-first, one deletion level at a
/// time, and matches them against the precomputed delete index. Hits are kept
/// in discovery order; the first hit recorded for a term is never replaced.
/// Complexity: independent of dictionary size, O(k^K) variants for input length k.
pub fn lookup<'a>(dictionary: &'a Dictionary, input: &str) -> Vec<Hit<'a>> {
    let max_distance = dictionary.max_edit_distance();
    let mut frontier = VecDeque::from([(input.to_string(), 0usize)]);
    let mut visited: HashSet<String> = HashSet::from([input.to_string()]);
    let mut hits: IndexMap<&'a str, Hit<'a>> = IndexMap::new();
    let mut processed = 0usize;

    while let Some((candidate, candidate_distance)) = frontier.pop_front() {
        if candidate_distance > max_distance {
            break;
        }
        processed += 1;

        if let Some(entry) = dictionary.get(&candidate) {
            // The candidate itself is a known term.
            if let Some(term) = entry.term.as_deref() {
                hits.entry(term).or_insert(Hit {
                    term,
                    entry,
                    distance: candidate_distance,
                });
            }

            // Terms the candidate is a delete-variant of.
            for (suggest, &suggest_distance) in &entry.suggestions {
                if hits.contains_key(suggest.as_str()) {
                    continue;
                }
                let distance = true_distance(
                    suggest,
                    suggest_distance,
                    &candidate,
                    candidate_distance,
                    input,
                );
                if distance > max_distance {
                    continue;
                }
                if let Some(target) = dictionary.get(suggest) {
                    if let Some(term) = target.term.as_deref() {
                        hits.insert(
                            term,
                            Hit {
                                term,
                                entry: target,
                                distance,
                            },
                        );
                    }
                }
            }
        }

        if candidate_distance < max_distance {
            for (variant, variant_distance) in
                expand(&candidate, candidate_distance, max_distance, false)
            {
                if visited.insert(variant.clone()) {
                    frontier.push_back((variant, variant_distance));
                }
            }
        }
    }

    log::trace!(
        "lookup '{}': {} candidates processed, {} hits",
        input,
        processed,
        hits.len()
    );
    hits.into_values().collect()
}
