//! Song mentions and the characters they claim
//!
//! A person the classifier left as a character ("soundtrack by John
//! Williams") is usually the song's author. Such a person is moved from
//! the character list to the song list.

use regex::Regex;

use super::SONG_PATTERN;
use crate::text::{alternation, dedup, strip_punctuation};
use crate::vocabulary::SONG_PREPOSITIONS;

/// Result of the song pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongExtraction {
    /// Song mentions with their context, then claimed characters
    pub songs: Vec<String>,
    /// Characters not claimed by any song
    pub characters: Vec<String>,
}

/// Find song mentions and move their authors out of `characters`
///
/// `window` is the number of tokens inspected on each side of a song
/// mention when deciding whether a character is its author.
pub fn extract_songs(
    text: &str,
    characters: Vec<String>,
    window: usize,
) -> Result<SongExtraction, regex::Error> {
    let words = dedup(
        SONG_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase()),
    );
    if words.is_empty() {
        return Ok(SongExtraction {
            songs: Vec::new(),
            characters,
        });
    }

    let pattern = song_context_pattern(&words, &characters)?;
    let tokens = Tokens::new(text);

    let mut songs = Vec::new();
    let mut spans = Vec::new();
    for m in pattern.find_iter(text) {
        songs.push(m.as_str().to_string());
        if let Some(span) = tokens.covering(m.start(), m.end()) {
            spans.push(span);
        }
    }
    let mut songs = dedup(songs);

    let mut unclaimed = Vec::new();
    for character in characters {
        let name = normalized_words(&character);
        let claimed = !name.is_empty()
            && spans
                .iter()
                .any(|&(first, last)| tokens.window_claims(first, last, window, &name));
        if claimed {
            tracing::debug!(character = %character, "Character claimed by song mention");
            songs.push(character);
        } else {
            unclaimed.push(character);
        }
    }

    Ok(SongExtraction {
        songs: dedup(songs),
        characters: unclaimed,
    })
}

/// `[name] word [by|of|from name]`, case-insensitive
fn song_context_pattern(words: &[String], characters: &[String]) -> Result<Regex, regex::Error> {
    let words = alternation(words);
    let names = alternation(characters);

    if names.is_empty() {
        return Regex::new(&format!(r"(?i)\b(?:{})\b", words));
    }
    Regex::new(&format!(
        r"(?i)(?:\b(?:{names})\s+)?\b(?:{words})\b(?:\s+(?:{preps})\s+(?:{names})\b)?",
        names = names,
        words = words,
        preps = SONG_PREPOSITIONS.join("|"),
    ))
}

fn normalized_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| strip_punctuation(word).to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Whitespace tokens of the text with byte offsets
struct Tokens {
    words: Vec<String>,
    offsets: Vec<(usize, usize)>,
}

impl Tokens {
    fn new(text: &str) -> Self {
        let mut words = Vec::new();
        let mut offsets = Vec::new();
        let mut start = None;

        for (idx, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(s)) => {
                    offsets.push((s, idx));
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }
        if let Some(s) = start {
            offsets.push((s, text.len()));
        }
        for &(s, e) in &offsets {
            words.push(strip_punctuation(&text[s..e]).to_lowercase());
        }

        Self { words, offsets }
    }

    /// First and last token index overlapping the byte range
    fn covering(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        let mut hits = self
            .offsets
            .iter()
            .enumerate()
            .filter(|&(_, &(s, e))| s < end && e > start)
            .map(|(idx, _)| idx);
        let first = hits.next()?;
        let last = hits.last().unwrap_or(first);
        Some((first, last))
    }

    fn window_claims(&self, first: usize, last: usize, window: usize, name: &[String]) -> bool {
        let from = first.saturating_sub(window);
        let to = last.saturating_add(1).saturating_add(window).min(self.words.len());
        let slice = &self.words[from..to];

        let has_preposition = slice
            .iter()
            .any(|word| SONG_PREPOSITIONS.contains(&word.as_str()));
        has_preposition && slice.windows(name.len()).any(|run| run == name)
    }
}
