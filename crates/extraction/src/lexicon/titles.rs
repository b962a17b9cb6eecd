//! Movie titles, from the domain tagger and from anchor phrases

use movie_ner_core::{EntityKind, Lexicons, TaggedToken};

use crate::text::{bio_chunks, dedup, strip_punctuation};
use crate::vocabulary::TITLE_ANCHORS;

/// `MISC` chunks of the domain tagger that are known titles
pub fn titles_from_tags(tags: &[TaggedToken], lexicons: &Lexicons) -> Vec<String> {
    let chunks = bio_chunks(tags, EntityKind::Misc)
        .into_iter()
        .map(|chunk| strip_punctuation(&chunk).to_string())
        .filter(|chunk| lexicons.is_title(chunk));
    dedup(chunks)
}

/// Known title following an anchor word such as "film" or "movie"
///
/// The longest phrase after the first occurrence of an anchor wins. Anchors
/// are tried in order and the first one yielding a title ends the search.
pub fn titles_from_anchors(text: &str, lexicons: &Lexicons) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    for &(anchor, max_len) in TITLE_ANCHORS {
        let Some(idx) = words
            .iter()
            .position(|word| strip_punctuation(word).eq_ignore_ascii_case(anchor))
        else {
            continue;
        };

        let start = idx + 1;
        for len in (1..=max_len).rev() {
            let end = (start + len).min(words.len());
            if end <= start {
                break;
            }
            let phrase = strip_punctuation(&words[start..end].join(" ")).to_string();
            if !phrase.is_empty() && lexicons.is_title(&phrase) {
                return vec![phrase];
            }
        }
    }

    Vec::new()
}
