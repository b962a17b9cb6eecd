//! Small text helpers shared by the matchers, the reconciler and the merger

use std::collections::HashSet;

use movie_ner_core::{EntityKind, Label, TaggedToken};

/// Trim whitespace, then ASCII punctuation, from both ends
pub fn strip_punctuation(text: &str) -> &str {
    text.trim().trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Name truncated at the first apostrophe, backtick or acute accent
///
/// `"Tarantino's"` becomes `"Tarantino"`.
pub fn base_name(name: &str) -> &str {
    match name.find(|c: char| matches!(c, '\'' | '`' | '´')) {
        Some(idx) => name[..idx].trim_end(),
        None => name,
    }
}

/// Keep the first occurrence of every value
pub fn dedup<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Keep the first occurrence of every value, comparing case-insensitively
pub fn dedup_ignore_case<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.to_lowercase()))
        .collect()
}

/// Multi-token chunks of one entity kind from BIO-tagged tokens
///
/// A chunk is flushed on the next `B-` of the kind or on any other label.
/// A stray `I-` starts a chunk.
pub fn bio_chunks(tokens: &[TaggedToken], kind: EntityKind) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in tokens {
        match token.label {
            Label::Begin(k) if k == kind => {
                if !current.is_empty() {
                    chunks.push(current.join(" "));
                }
                current = vec![token.text.as_str()];
            }
            Label::Inside(k) if k == kind => current.push(token.text.as_str()),
            _ => {
                if !current.is_empty() {
                    chunks.push(current.join(" "));
                }
                current.clear();
            }
        }
    }
    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}

/// Escaped alternation body, empty entries skipped
pub fn alternation<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().trim().to_string())
        .filter(|value| !value.is_empty())
        .map(|value| regex::escape(&value))
        .collect::<Vec<_>>()
        .join("|")
}
