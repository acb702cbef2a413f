//! Gestalt (Ratcliff/Obershelp) similarity.
//!
//! The ratio is `2·M / T`, where `T` is the combined length of both strings
//! and `M` counts characters in matching blocks. Blocks are found by taking
//! the longest common substring and recursing on the pieces to its left and
//! right. Ties go to the block that starts earliest in `a`, then in `b`.

/// Similarity in `0.0..=1.0`; 1.0 means identical. Two empty strings are identical.
pub(crate) fn gestalt_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matched_chars(&a, &b);
    2.0 * matches as f64 / total as f64
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    // run[j + 1] is the length of the match ending at a[i - 1], b[j].
    let mut prev = vec![0usize; b.len() + 1];
    let mut run = vec![0usize; b.len() + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            run[j + 1] = if a[i] == b[j] { prev[j] + 1 } else { 0 };
            let len = run[j + 1];
            if len > best_len {
                best_i = i + 1 - len;
                best_j = j + 1 - len;
                best_len = len;
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }
    (best_i, best_j, best_len)
}
