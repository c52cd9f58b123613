use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::boilerplate;
use crate::markup;

const MAX_KEYWORDS: usize = 10;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Turkish and English function words excluded from keyword candidates.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bir", "bu", "da", "de", "den", "için", "ile", "ve", "var", "olan",
        "olarak", "gibi", "kadar", "sonra", "önce", "daha", "çok", "az",
        "büyük", "küçük", "yeni", "eski", "iyi", "kötü", "doğru", "yanlış",
        "the", "and", "or", "but", "in", "on", "at", "to", "for", "of",
        "with", "by", "from", "up", "about", "into", "through", "during",
        "before", "after", "above", "below", "between", "among", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might",
        "must", "can", "shall",
    ]
    .into_iter()
    .collect()
});

/// Top keywords from text, ranked by descending frequency, at most ten.
///
/// Runs the markup and boilerplate cleaners first; both are idempotent on
/// already-clean input, so callers may pass raw or pre-cleaned text. Tokens
/// are maximal word-character runs of the lowercased result; short tokens
/// (two chars or fewer) and stop words are dropped. Ties keep first-seen
/// order under the stable sort, though tie order is not part of the contract.
pub fn extract(text: &str) -> Vec<String> {
    let cleaned = boilerplate::remove(&markup::strip(text));
    let lower = cleaned.to_lowercase();

    let tokens: Vec<&str> = WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| t.chars().count() > 2 && !STOP_WORDS.contains(*t))
        .collect();

    let freq = tokens.iter().copied().counts();
    tokens
        .iter()
        .copied()
        .unique()
        .sorted_by_key(|t| Reverse(freq[t]))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
