// File: src/fuzzy/distance.rs
use std::collections::HashMap;

/// Unrestricted Damerau-Levenshtein distance (Lowrance-Wagner).
///
/// Insertions, deletions, substitutions and transpositions of any two
/// characters each cost one. Works on Unicode scalar values, so a multi-byte
/// character counts as a single edit unit.
/// Complexity: O(m*n) time and space.
pub fn damerau_levenshtein(source: &str, target: &str) -> usize {
    let s: Vec<char> = source.chars().collect();
    let t: Vec<char> = target.chars().collect();
    let (m, n) = (s.len(), t.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let inf = m + n;
    let mut h = vec![vec![0usize; n + 2]; m + 2];
    h[0][0] = inf;
    for i in 0..=m {
        h[i + 1][0] = inf;
        h[i + 1][1] = i;
    }
    for j in 0..=n {
        h[0][j + 1] = inf;
        h[1][j + 1] = j;
    }

    // Last row in which each character was seen in `source`.
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=m {
        let mut last_match_col = 0;
        for j in 1..=n {
            let i1 = last_row.get(&t[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cell = if s[i - 1] == t[j - 1] {
                last_match_col = j;
                h[i][j]
            } else {
                h[i][j].min(h[i + 1][j]).min(h[i][j + 1]) + 1
            };

            let transposition = h[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1);
            h[i + 1][j + 1] = cell.min(transposition);
        }
        last_row.insert(s[i - 1], i);
    }

    h[m + 1][n + 1]
}

/// Resolves the real distance between a dictionary term and the query.
///
/// `suggest_distance` is the number of deletes applied on the dictionary side,
/// `query_distance` the number applied to the input to reach the candidate.
/// Deletes on one side only bound the distance exactly; deletes on both sides
/// can make unrelated strings collide, so those fall back to a full
/// Damerau-Levenshtein computation.
pub fn true_distance(
    candidate_term: &str,
    suggest_distance: usize,
    _query_candidate: &str,
    query_distance: usize,
    original_input: &str,
) -> usize {
    if candidate_term == original_input {
        0
    } else if suggest_distance == 0 {
        query_distance
    } else if query_distance == 0 {
        suggest_distance
    } else {
        damerau_levenshtein(candidate_term, original_input)
    }
}
