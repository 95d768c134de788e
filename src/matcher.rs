//! Relevance scoring between a free-text query and a manual title.
//!
//! Both strings are reduced to lowercase alphanumeric tokens first, so
//! "HP-71", "hp 71" and "HP 71" all compare equal while digits in model
//! numbers survive. The score is the strongest of several signals, each
//! capped below the exact-match score of 1.0.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use strsim::normalized_levenshtein;

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new(r"[a-z0-9]+").unwrap();
}

/// Minimum score for a title to count as a match
pub const DEFAULT_MIN_SCORE: f64 = 0.52;

const EXACT_SCORE: f64 = 1.0;
const SUBSTRING_SCORE: f64 = 0.98;
const COMPACT_SUBSTRING_SCORE: f64 = 0.95;
const TOKEN_OVERLAP_WEIGHT: f64 = 0.85;
const GLOBAL_SIMILARITY_WEIGHT: f64 = 0.75;
const MAX_WINDOW_WORDS: usize = 8;

/// Split into lowercase `[a-z0-9]+` tokens
pub fn tokens(s: &str) -> Vec<String> {
    let lower = s.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens joined by single spaces
pub fn normalize(s: &str) -> String {
    tokens(s).join(" ")
}

/// Score `query` against `title` in the range [0, 1].
///
/// * 1.0 when the normalized strings are identical
/// * 0.98 when the normalized query is a substring of the title
/// * 0.95 when the query matches with all spaces removed ("hp71")
/// * otherwise the best of the partial-window ratio, 0.85 x token overlap
///   and 0.75 x whole-string similarity
///
/// An empty query scores 0.0.
pub fn score(query: &str, title: &str) -> f64 {
    let query_tokens = tokens(query);
    if query_tokens.is_empty() {
        return 0.0;
    }
    let title_tokens = tokens(title);

    let query_norm = query_tokens.join(" ");
    let title_norm = title_tokens.join(" ");

    if query_norm == title_norm {
        return EXACT_SCORE;
    }
    if title_norm.contains(&query_norm) {
        return SUBSTRING_SCORE;
    }
    if title_tokens.concat().contains(&query_tokens.concat()) {
        return COMPACT_SUBSTRING_SCORE;
    }

    let partial = partial_window_ratio(&query_norm, query_tokens.len(), &title_tokens);
    let overlap = TOKEN_OVERLAP_WEIGHT * token_overlap(&query_tokens, &title_tokens);
    let global = GLOBAL_SIMILARITY_WEIGHT * normalized_levenshtein(&query_norm, &title_norm);

    let best = partial.max(overlap).max(global);
    debug!(
        "score('{query}', '{title}') = {best:.3} (partial {partial:.3}, overlap {overlap:.3}, global {global:.3})"
    );
    best
}

/// Fraction of distinct query tokens that also appear in the title
fn token_overlap(query_tokens: &[String], title_tokens: &[String]) -> f64 {
    let query_set: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();
    if query_set.is_empty() {
        return 0.0;
    }
    let title_set: HashSet<&str> = title_tokens.iter().map(String::as_str).collect();
    query_set.intersection(&title_set).count() as f64 / query_set.len() as f64
}

/// Best similarity between the query and any run of consecutive title words
/// as long as the query (up to eight words)
fn partial_window_ratio(query_norm: &str, query_len: usize, title_tokens: &[String]) -> f64 {
    if title_tokens.is_empty() {
        return 0.0;
    }
    let width = query_len.clamp(1, MAX_WINDOW_WORDS);

    (0..title_tokens.len())
        .map(|start| {
            let end = (start + width).min(title_tokens.len());
            let window = title_tokens[start..end].join(" ");
            normalized_levenshtein(query_norm, &window)
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
