//! Per-category entity candidates and their typed spans

use movie_ner_core::{EntityKind, Label};

/// Entity strings found for one query, by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityCandidates {
    pub titles: Vec<String>,
    pub years: Vec<String>,
    pub rate_avg: Vec<String>,
    pub trailers: Vec<String>,
    pub ratings: Vec<String>,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub characters: Vec<String>,
    pub songs: Vec<String>,
    pub awards: Vec<String>,
}

impl EntityCandidates {
    /// Categories with their kinds, in merge priority order
    fn categories(&self) -> [(EntityKind, &[String]); 11] {
        [
            (EntityKind::Title, self.titles.as_slice()),
            (EntityKind::Year, self.years.as_slice()),
            (EntityKind::RatingsAverage, self.rate_avg.as_slice()),
            (EntityKind::Trailer, self.trailers.as_slice()),
            (EntityKind::Rating, self.ratings.as_slice()),
            (EntityKind::Genre, self.genres.as_slice()),
            (EntityKind::Director, self.directors.as_slice()),
            (EntityKind::Actor, self.actors.as_slice()),
            (EntityKind::Character, self.characters.as_slice()),
            (EntityKind::Song, self.songs.as_slice()),
            (EntityKind::Award, self.awards.as_slice()),
        ]
    }

    /// Every candidate as a typed span, in merge priority order
    pub fn spans(&self) -> Vec<TypedSpan> {
        self.categories()
            .into_iter()
            .flat_map(|(kind, values)| values.iter().map(move |text| TypedSpan::new(kind, text.clone())))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories().iter().all(|(_, values)| values.is_empty())
    }
}

/// An entity string with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSpan {
    pub kind: EntityKind,
    pub text: String,
}

impl TypedSpan {
    pub fn new(kind: EntityKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Words of the span with BIO labels: `B-` first, `I-` after
    pub fn labelled_words(&self) -> Vec<(&str, Label)> {
        self.text
            .split_whitespace()
            .enumerate()
            .map(|(idx, word)| {
                let label = if idx == 0 {
                    Label::Begin(self.kind)
                } else {
                    Label::Inside(self.kind)
                };
                (word, label)
            })
            .collect()
    }
}
