//! Lexicon and regex matchers over the query text
//!
//! Every matcher is a pure function of the text and static vocabulary and
//! returns surface strings in text order. "Nothing found" is an empty vec.
//!
//! Static patterns are compiled once at program start using
//! `once_cell::sync::Lazy`. Patterns that depend on per-call values
//! (song context, catalog re-derivation) are compiled per call and may fail
//! with [`regex::Error`].

mod rate_avg;
mod songs;
mod titles;

pub use rate_avg::rate_averages;
pub use songs::{extract_songs, SongExtraction};
pub use titles::{titles_from_anchors, titles_from_tags};

use once_cell::sync::Lazy;
use regex::Regex;

use movie_ner_core::Lexicons;

use crate::text::{alternation, dedup};
use crate::vocabulary;

// =============================================================================
// STATIC REGEX PATTERNS - Compiled once at program start
// =============================================================================

static RATING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{})\b(?:-rated| rated)?",
        alternation(vocabulary::RATINGS)
    ))
    .unwrap()
});

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:since|before|after)?(?:1[89][0-9]{2}|2[0-9]{3})'?s?").unwrap()
});

static AWARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(vocabulary::AWARDS))).unwrap()
});

static TRAILER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(vocabulary::TRAILERS))).unwrap()
});

pub(crate) static SONG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(vocabulary::SONGS))).unwrap()
});

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Genre lexicon entries occurring anywhere in the lowercased text
pub fn match_genres(text: &str, lexicons: &Lexicons) -> Vec<String> {
    let lowered = text.to_lowercase();
    lexicons
        .genres()
        .iter()
        .filter(|genre| lowered.contains(genre.as_str()))
        .cloned()
        .collect()
}

/// Content ratings such as `PG-13`, `R rated` or `Adults Only`
pub fn match_ratings(text: &str) -> Vec<String> {
    find_all(&RATING_PATTERN, text)
}

/// Years between 1800 and 2999, with an optional `since`/`before`/`after`
/// prefix and decade suffix, deduplicated
pub fn match_years(text: &str) -> Vec<String> {
    dedup(find_all(&YEAR_PATTERN, text))
}

pub fn match_awards(text: &str) -> Vec<String> {
    find_all(&AWARD_PATTERN, text)
}

pub fn match_trailers(text: &str) -> Vec<String> {
    find_all(&TRAILER_PATTERN, text)
}
