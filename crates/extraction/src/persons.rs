//! Person collection and lexicon-based role classification

use std::fmt;

use movie_ner_core::{general_labels, EntityKind, Lexicons, RecognizedSpan, TaggedToken};

use crate::text::{base_name, bio_chunks, dedup, strip_punctuation};

/// Role of a person mentioned in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonRole {
    Actor,
    Director,
    /// In neither list: a character name
    Character,
    /// In both lists; resolved by question answering
    Ambiguous,
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self {
            PersonRole::Actor => "actor",
            PersonRole::Director => "director",
            PersonRole::Character => "character",
            PersonRole::Ambiguous => "ambiguous",
        };
        f.write_str(role)
    }
}

/// Person names from both recognizers, punctuation-stripped, in first-seen order
///
/// General `PERSON` spans come first, then the domain tagger's `PER` chunks.
pub fn collect_persons(spans: &[RecognizedSpan], tags: &[TaggedToken]) -> Vec<String> {
    let general = spans
        .iter()
        .filter(|span| span.has_label(general_labels::PERSON))
        .map(|span| span.text.clone());
    let domain = bio_chunks(tags, EntityKind::Per);

    let names = general
        .chain(domain)
        .map(|name| strip_punctuation(&name).to_string())
        .filter(|name| !name.is_empty());
    dedup(names)
}

/// Classify a person against the static actor and director lists
pub fn classify_person(name: &str, lexicons: &Lexicons) -> PersonRole {
    let base = base_name(name);
    match (lexicons.is_actor(base), lexicons.is_director(base)) {
        (true, false) => PersonRole::Actor,
        (false, true) => PersonRole::Director,
        (false, false) => PersonRole::Character,
        (true, true) => PersonRole::Ambiguous,
    }
}
