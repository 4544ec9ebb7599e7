//! Edit distance used as the fitness signal of a reconstruction.

/// Computes the Levenshtein distance between two sequences.
///
/// Insertions, deletions and substitutions all cost one. A single row is
/// rolled over the shorter input, so memory is `O(min(|a|, |b|))`.
///
/// # Returns
///
/// `0` when the sequences are equal, otherwise the minimal number of edits.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (long, short) = if a.len() >= b.len() {
        (a.as_bytes(), b.as_bytes())
    } else {
        (b.as_bytes(), a.as_bytes())
    };

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(lc != sc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[short.len()]
}
