//! Entity kinds and BIO token labels
//!
//! Labels render as `O`, `B-TITLE`, `I-RATINGS_AVERAGE` and so on, and
//! serialize through that string form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Entity type carried by a `B-`/`I-` label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Person (domain tagger output)
    Per,
    /// Miscellaneous (domain tagger output, candidate titles)
    Misc,
    Title,
    Year,
    RatingsAverage,
    Award,
    Song,
    Trailer,
    Rating,
    Genre,
    Actor,
    Director,
    Character,
}

impl EntityKind {
    /// Tag used in the label string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Per => "PER",
            EntityKind::Misc => "MISC",
            EntityKind::Title => "TITLE",
            EntityKind::Year => "YEAR",
            EntityKind::RatingsAverage => "RATINGS_AVERAGE",
            EntityKind::Award => "AWARD",
            EntityKind::Song => "SONG",
            EntityKind::Trailer => "TRAILER",
            EntityKind::Rating => "RATING",
            EntityKind::Genre => "GENRE",
            EntityKind::Actor => "ACTOR",
            EntityKind::Director => "DIRECTOR",
            EntityKind::Character => "CHARACTER",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "PER" => EntityKind::Per,
            "MISC" => EntityKind::Misc,
            "TITLE" => EntityKind::Title,
            "YEAR" => EntityKind::Year,
            "RATINGS_AVERAGE" => EntityKind::RatingsAverage,
            "AWARD" => EntityKind::Award,
            "SONG" => EntityKind::Song,
            "TRAILER" => EntityKind::Trailer,
            "RATING" => EntityKind::Rating,
            "GENRE" => EntityKind::Genre,
            "ACTOR" => EntityKind::Actor,
            "DIRECTOR" => EntityKind::Director,
            "CHARACTER" => EntityKind::Character,
            other => return Err(Error::InvalidLabel(other.to_string())),
        };
        Ok(kind)
    }
}

/// BIO label of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Label {
    /// No entity
    #[default]
    Outside,
    /// First token of an entity
    Begin(EntityKind),
    /// Continuation token of an entity
    Inside(EntityKind),
}

impl Label {
    /// Entity kind, if any
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Label::Outside => None,
            Label::Begin(kind) | Label::Inside(kind) => Some(*kind),
        }
    }

    pub fn is_outside(&self) -> bool {
        matches!(self, Label::Outside)
    }

    /// Whether an `I-` label of `kind` may directly follow this label
    pub fn continues_into(&self, kind: EntityKind) -> bool {
        self.kind() == Some(kind)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Outside => f.write_str("O"),
            Label::Begin(kind) => write!(f, "B-{}", kind),
            Label::Inside(kind) => write!(f, "I-{}", kind),
        }
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "O" {
            return Ok(Label::Outside);
        }
        match s.split_once('-') {
            Some(("B", kind)) => Ok(Label::Begin(kind.parse()?)),
            Some(("I", kind)) => Ok(Label::Inside(kind.parse()?)),
            _ => Err(Error::InvalidLabel(s.to_string())),
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for Label {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A whitespace token together with its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Token surface text
    pub text: String,
    /// BIO label
    pub label: Label,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    /// Token with the `O` label
    pub fn outside(text: impl Into<String>) -> Self {
        Self::new(text, Label::Outside)
    }
}
