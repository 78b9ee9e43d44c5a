//! Text normalization, compaction and candidate splitting.

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Separator between acceptable answers in a reference field.
pub const CANDIDATE_SEPARATOR: char = '/';

/// Normalize text for comparison.
///
/// Applies NFKC, lower-cases, trims and collapses whitespace runs to one space.
pub fn normalize_text(value: &str) -> String {
    value
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a `/`-delimited reference field into unique normalized candidates,
/// in first-seen order.
pub fn split_answer_candidates(reference: &str) -> Vec<String> {
    let normalized = normalize_text(reference);
    if normalized.is_empty() {
        return vec![];
    }

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for part in normalized.split(CANDIDATE_SEPARATOR) {
        let candidate = normalize_text(part);
        if candidate.is_empty() || seen.contains(&candidate) {
            continue;
        }
        seen.insert(candidate.clone());
        candidates.push(candidate);
    }

    candidates
}

/// Remove everything except ASCII letters, ASCII digits and Hangul syllables.
pub fn compact_text(value: &str) -> String {
    value.chars().filter(|&c| is_significant(c)).collect()
}

/// Split on runs of characters that [`compact_text`] would drop.
pub fn tokenize(value: &str) -> Vec<&str> {
    value
        .split(|c: char| !is_significant(c))
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_significant(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_hangul_syllable(c)
}

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize_text("  Hello \t  WORLD\n"), "hello world");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn normalize_folds_compatibility_forms() {
        // Fullwidth letters and digits fold to ASCII.
        assert_eq!(normalize_text("ＡＢＣ１２３"), "abc123");
        // Ideographic space counts as whitespace.
        assert_eq!(normalize_text("스프링\u{3000}부트"), "스프링 부트");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["  Spring   Boot ", "ＪａｖａＳｃｒｉｐｔ", "3.14 m²", "자바 스크립트", "A/B / C"] {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once);
        }
    }

    #[test]
    fn split_dedups_in_first_seen_order() {
        assert_eq!(split_answer_candidates("A/B/A/ /B"), vec!["a", "b"]);
    }

    #[test]
    fn split_normalizes_each_segment() {
        assert_eq!(
            split_answer_candidates("  JS /  Java   Script/javascript "),
            vec!["js", "java script", "javascript"]
        );
    }

    #[test]
    fn split_empty_field() {
        assert!(split_answer_candidates("").is_empty());
        assert!(split_answer_candidates("  ").is_empty());
        assert!(split_answer_candidates("/ / /").is_empty());
    }

    #[test]
    fn compact_keeps_ascii_alphanumerics_and_hangul() {
        assert_eq!(compact_text("spring-boot 3.0"), "springboot30");
        assert_eq!(compact_text("스프링 부트!"), "스프링부트");
        assert_eq!(compact_text("café"), "caf");
        assert_eq!(compact_text("?!"), "");
    }

    #[test]
    fn tokenize_splits_on_insignificant_runs() {
        assert_eq!(tokenize("stack-overflow, 2024"), vec!["stack", "overflow", "2024"]);
        assert_eq!(tokenize("서울 특별시"), vec!["서울", "특별시"]);
        assert!(tokenize("--").is_empty());
    }
}
