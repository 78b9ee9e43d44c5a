//! Strategy chain for comparing one answer to one candidate.
//!
//! Strategies run in a fixed order and the first conclusive one wins:
//! exact, compact, number, token, then Levenshtein similarity.

use crate::normalize::{compact_text, tokenize};
use crate::policy::MatchPolicy;
use crate::types::{MatchType, Verdict};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?[0-9]+(?:\.[0-9]+)?").expect("number pattern is valid"));

/// Rounding slack in units of `f64::EPSILON`, scaled by operand magnitude.
const NUMERIC_ULPS: f64 = 4.0;

/// Compare a normalized user answer to a normalized candidate.
pub(crate) fn evaluate_pair(policy: &MatchPolicy, user: &str, candidate: &str) -> Verdict {
    if user.is_empty() || candidate.is_empty() {
        return Verdict::rejected(0.0, None, candidate);
    }

    if user == candidate {
        return Verdict::accepted(MatchType::Exact, 1.0, Some(1.0), candidate);
    }

    let user_compact = compact_text(user);
    let candidate_compact = compact_text(candidate);
    if user_compact.is_empty() || candidate_compact.is_empty() {
        return Verdict::rejected(0.0, None, candidate);
    }

    if user_compact == candidate_compact {
        return Verdict::accepted(MatchType::Compact, 1.0, Some(1.0), candidate);
    }

    // Two single numbers are judged numerically and never fall through.
    if let (Some(user_number), Some(candidate_number)) =
        (extract_single_number(user), extract_single_number(candidate))
    {
        return if within_tolerance(user_number, candidate_number, policy.numeric_tolerance) {
            Verdict::accepted(MatchType::Number, 1.0, None, candidate)
        } else {
            Verdict::rejected(0.0, None, candidate)
        };
    }

    let user_tokens = tokenize(user);
    let candidate_tokens = tokenize(candidate);
    if !user_tokens.is_empty() && user_tokens == candidate_tokens {
        return Verdict::accepted(MatchType::Token, 1.0, None, candidate);
    }

    let ratio = similarity_ratio(&user_compact, &candidate_compact);
    let length = user_compact
        .chars()
        .count()
        .max(candidate_compact.chars().count());
    let threshold = policy.threshold_for(length);
    if ratio < threshold {
        return Verdict::rejected(ratio, Some(threshold), candidate);
    }

    if is_ascii_word(&user_compact) && is_ascii_word(&candidate_compact) {
        // Short English words are too easy to hit by accident.
        if candidate_compact.len() <= policy.short_word_max_len {
            return Verdict::rejected(ratio, Some(threshold), candidate);
        }

        let same_ends = user_compact.chars().next() == candidate_compact.chars().next()
            && user_compact.chars().last() == candidate_compact.chars().last();
        return if same_ends {
            Verdict::accepted(MatchType::Similarity, ratio, Some(threshold), candidate)
        } else {
            Verdict::rejected(ratio, Some(threshold), candidate)
        };
    }

    Verdict::accepted(MatchType::Similarity, ratio, Some(threshold), candidate)
}

/// Whether `a` and `b` differ by at most `tolerance`.
///
/// A difference equal to the tolerance is accepted even when binary
/// rounding pushes it a few ULPs above.
fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    let slack = f64::EPSILON * NUMERIC_ULPS * a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance + slack
}

/// Parse the only number in `value`, ignoring thousands separators and spaces.
///
/// Returns `None` when there is no number or more than one.
fn extract_single_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|&c| c != ',' && !c.is_whitespace())
        .collect();
    let mut matches = NUMBER_PATTERN.find_iter(&cleaned);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    first.as_str().parse::<f64>().ok()
}

fn is_ascii_word(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Calculate Levenshtein distance between two strings.
///
/// Counts Unicode scalar values; insertion, deletion and substitution each cost 1.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }

    table[m][n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
