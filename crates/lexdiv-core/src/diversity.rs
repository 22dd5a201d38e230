//! Lexical diversity via Moving-Average Type-Token Ratio (MATTR).
//!
//! A plain type-token ratio falls as texts get longer. MATTR fixes the span:
//! it slides a window of `window` words across the sequence one position at
//! a time and averages the distinct-word fraction of every window.
//!
//! Each window is recounted from scratch, so cost is `O(n * window)`.

use std::collections::HashSet;

/// Moving-Average Type-Token Ratio over `words`.
///
/// - Empty input scores `0.0`.
/// - A sequence shorter than the window (or a zero window) falls back to the
///   whole-sequence type-token ratio.
/// - Otherwise every start position `0..=n - window` contributes
///   `distinct / window`, and the mean is returned.
///
/// The result always lies in `[0, 1]`.
#[tracing::instrument(skip(words), fields(words = words.len()))]
pub fn calculate_mattr(words: &[String], window: usize) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let n = words.len();
    if n < window || window == 0 {
        return distinct(words.iter()) as f64 / n as f64;
    }

    let ratios: Vec<f64> = words
        .windows(window)
        .map(|span| distinct(span.iter()) as f64 / window as f64)
        .collect();

    mean(&ratios)
}

/// MATTR restricted to one word class.
///
/// Windows are laid over `all_words`; within each window only words that
/// appear in `category_words` count. A window with at least one such hit
/// records `distinct hits / window` (the denominator stays the full window
/// size). Windows without any hit are skipped rather than scored as zero.
///
/// When `all_words` is shorter than the window, the category list's own
/// type-token ratio is returned instead (`0.0` if it is empty). Returns
/// `0.0` when no window contains a hit.
#[tracing::instrument(skip_all, fields(category_words = category_words.len(), all_words = all_words.len()))]
pub fn calculate_category_mattr(
    category_words: &[String],
    all_words: &[String],
    window: usize,
) -> f64 {
    if all_words.len() < window || window == 0 {
        if category_words.is_empty() {
            return 0.0;
        }
        return distinct(category_words.iter()) as f64 / category_words.len() as f64;
    }

    let members: HashSet<&str> = category_words.iter().map(String::as_str).collect();

    let ratios: Vec<f64> = all_words
        .windows(window)
        .filter_map(|span| {
            let hits: HashSet<&str> = span
                .iter()
                .map(String::as_str)
                .filter(|w| members.contains(w))
                .collect();
            (!hits.is_empty()).then(|| hits.len() as f64 / window as f64)
        })
        .collect();

    if ratios.is_empty() {
        return 0.0;
    }
    mean(&ratios)
}

fn distinct<'a>(words: impl Iterator<Item = &'a String>) -> usize {
    words.map(String::as_str).collect::<HashSet<_>>().len()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn empty_sequence_scores_zero() {
        assert_eq!(calculate_mattr(&[], 50), 0.0);
        assert_eq!(calculate_mattr(&[], 1), 0.0);
    }

    #[test]
    fn short_sequence_falls_back_to_ttr() {
        let w = words("the cat and the dog");
        assert_eq!(calculate_mattr(&w, 50), 4.0 / 5.0);
    }

    #[test]
    fn alternating_pairs_are_fully_diverse() {
        let w = words("a b a b a");
        assert_eq!(calculate_mattr(&w, 2), 1.0);
    }

    #[test]
    fn repeated_word_scores_one_over_window() {
        let w = words("x x x x x x");
        let score = calculate_mattr(&w, 3);
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn averages_across_positions() {
        // windows of 3: [a a b]=2/3, [a b c]=3/3
        let w = words("a a b c");
        let score = calculate_mattr(&w, 3);
        assert!((score - (2.0 / 3.0 + 1.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn exact_window_length_is_single_window() {
        let w = words("a b c a");
        assert_eq!(calculate_mattr(&w, 4), 3.0 / 4.0);
    }

    #[test]
    fn mattr_stays_in_unit_interval() {
        let w = words("one two three two one four five six six six seven one");
        for window in 1..=w.len() + 2 {
            let score = calculate_mattr(&w, window);
            assert!((0.0..=1.0).contains(&score), "window {window}: {score}");
        }
    }

    #[test]
    fn zero_window_does_not_divide_by_zero() {
        let w = words("a b a");
        assert_eq!(calculate_mattr(&w, 0), 2.0 / 3.0);
    }

    #[test]
    fn category_without_hits_scores_zero() {
        let all = words("a b c d e f g h");
        assert_eq!(calculate_category_mattr(&[], &all, 3), 0.0);
        assert_eq!(calculate_category_mattr(&words("zzz"), &all, 3), 0.0);
    }

    #[test]
    fn category_short_text_uses_category_ttr() {
        let all = words("run run walk");
        let cat = words("run run walk");
        assert_eq!(calculate_category_mattr(&cat, &all, 11), 2.0 / 3.0);
        assert_eq!(calculate_category_mattr(&[], &all, 11), 0.0);
    }

    #[test]
    fn category_denominator_is_window_size() {
        // windows of 4 over: a X b Y c
        // [a X b Y] hits {X,Y} -> 2/4 ; [X b Y c] hits {X,Y} -> 2/4
        let all = words("a x b y c");
        let cat = words("x y");
        assert_eq!(calculate_category_mattr(&cat, &all, 4), 0.5);
    }

    #[test]
    fn category_skips_windows_without_hits() {
        // windows of 2: [v a]=1/2, [a b] skipped, [b c] skipped, [c v]=1/2
        let all = words("v a b c v");
        let cat = words("v");
        assert_eq!(calculate_category_mattr(&cat, &all, 2), 0.5);
    }

    #[test]
    fn category_counts_distinct_hits() {
        // window covers the whole text: hits v,v,w -> distinct 2 / 5
        let all = words("v v w a b");
        let cat = words("v w");
        assert_eq!(calculate_category_mattr(&cat, &all, 5), 2.0 / 5.0);
    }
}
