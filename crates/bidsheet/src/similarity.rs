//! Token-order-insensitive text similarity scoring.
//!
//! Vendors rarely copy item descriptions verbatim: "10x Bearing
//! SKF-6205" on the RFQ comes back as "Bearing SKF 6205 x10 pcs" on a
//! quote. The scorer here neutralizes token order and punctuation, then
//! measures how much edit distance remains.

/// Similarity between two descriptions, scaled to 0-100.
///
/// 100 means the strings contain the same tokens in any order, 0 means
/// no shared characters. The score is symmetric and deterministic, and
/// normalizes internally, so callers do not need to trim or lowercase
/// first.
pub fn token_sort_score(a: &str, b: &str) -> u8 {
    let na = normalize(a);
    let nb = normalize(b);

    if na.is_empty() && nb.is_empty() {
        return 100;
    }
    if na.is_empty() || nb.is_empty() {
        return 0;
    }
    if na == nb {
        return 100;
    }

    let ca: Vec<char> = na.chars().collect();
    let cb: Vec<char> = nb.chars().collect();
    let total = ca.len() + cb.len();
    let dist = indel_distance(&ca, &cb);

    (100.0 * (total - dist) as f64 / total as f64).round() as u8
}

/// Reduce a description to its canonical token form: lowercase, strip
/// punctuation, split at digit/letter boundaries, sort tokens.
///
/// The digit/letter split makes quantity and part markers compare
/// order-insensitively: "10x" and "x10" both normalize to the tokens
/// "10" and "x".
fn normalize(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut prev_digit = false;
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            let is_digit = c.is_numeric();
            if (is_digit && prev_alpha) || (!is_digit && prev_digit) {
                expanded.push(' ');
            }
            for lc in c.to_lowercase() {
                expanded.push(lc);
            }
            prev_digit = is_digit;
            prev_alpha = !is_digit;
        } else {
            expanded.push(' ');
            prev_digit = false;
            prev_alpha = false;
        }
    }

    let mut tokens: Vec<&str> = expanded.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Edit distance with unit-cost insertions/deletions and substitutions
/// costed as a delete plus an insert.
///
/// Equivalent to `|a| + |b| - 2 * LCS(a, b)`, which is what the
/// normalized ratio in [`token_sort_score`] needs: shared characters
/// count fully, replaced ones not at all.
fn indel_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single-row DP over b.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            let sub = if ca == cb { diag } else { diag + 2 };
            row[j + 1] = sub.min(up + 1).min(row[j] + 1);
            diag = up;
        }
    }
    row[b.len()]
}
