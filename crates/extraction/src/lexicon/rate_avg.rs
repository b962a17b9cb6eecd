//! Average ratings ("4 stars", "give it 8/10") from cardinal spans

use crate::text::{dedup, strip_punctuation};
use crate::vocabulary::{RATE_GIVE, RATE_STARS};

/// Cardinal spans that read as average ratings
///
/// `give_window` is the number of tokens searched on each side for "give".
pub fn rate_averages(cardinals: &[String], text: &str, give_window: usize) -> Vec<String> {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(strip_punctuation)
        .collect();
    let mut ratings = Vec::new();

    for cardinal in dedup(cardinals.iter().cloned()) {
        let Some(last) = cardinal.split_whitespace().last().map(strip_punctuation) else {
            continue;
        };
        let Some(idx) = words.iter().position(|word| *word == last) else {
            tracing::debug!(cardinal = %cardinal, "Cardinal not found in text tokens");
            continue;
        };

        if words
            .get(idx + 1)
            .is_some_and(|next| next.eq_ignore_ascii_case(RATE_STARS))
        {
            ratings.push(format!("{} {}", cardinal, RATE_STARS));
        }

        let from = idx.saturating_sub(give_window);
        let to = idx.saturating_add(give_window).min(words.len());
        let near_give = words[from..to]
            .iter()
            .any(|word| word.eq_ignore_ascii_case(RATE_GIVE));
        if near_give || cardinal.contains('/') {
            ratings.push(cardinal);
        }
    }

    dedup(ratings)
}
