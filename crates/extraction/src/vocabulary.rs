//! Fixed domain vocabularies and question templates
//!
//! Entries are plain text; patterns escape them when compiling.
//! Alternations keep list order, so a longer entry that shares a prefix
//! with a shorter one only wins when the shorter one fails its word
//! boundary.

/// Content rating vocabulary
pub const RATINGS: &[&str] = &[
    "g",
    "m",
    "gp",
    "pg-7",
    "pg-12",
    "pg-13",
    "pg-16",
    "pg-18",
    "pg-11",
    "pg 7",
    "pg 11",
    "pg 12",
    "pg 13",
    "pg 16",
    "pg 18",
    "pg+7",
    "pg+11",
    "pg+12",
    "pg+13",
    "pg+16",
    "pg+18",
    "pg",
    "r",
    "x",
    "nc-17",
    "nr",
    "ur",
    "+7",
    "+12",
    "+18",
    "General Audiences",
    "Parental Guidance Suggested",
    "Parents Strongly Cautioned",
    "Restricted",
    "Adults Only",
];

/// Song and score vocabulary
pub const SONGS: &[&str] = &[
    "song",
    "bso",
    "songs",
    "bsos",
    "music",
    "musical score",
    "track",
    "sound",
    "soundtrack",
    "soundtrac",
    "tracks",
    "soundtracks",
    "composition",
    "ost",
    "osts",
    "melody",
    "melodies",
    "lyric",
    "lyrics",
    "anthem",
    "anthems",
    "tune",
    "tunes",
    "sing",
    "piece",
    "original soundtrack",
];

pub const TRAILERS: &[&str] = &["trailer", "trailers", "corto", "cut", "advance", "announce"];

/// Award vocabulary
pub const AWARDS: &[&str] = &[
    "oscars",
    "sag",
    "sag award",
    "sag awards",
    "award",
    "awards",
    "Best Feature Film",
    "Best Actor",
    "Best Short Film",
    "Best British Short Film",
    "Special Jury Prize for Short Film",
    "Best Feature Documentary",
    "Best Student Film",
    "Best Music Video",
    "Best Short Documentary",
    "Best Animation",
    "Best First Film",
    "Best Picture",
    "Top Ten Films",
    "Best Director",
    "Best Actress",
    "Best Supporting Actor",
    "Best Supporting Actress",
    "Best Ensemble Cast",
    "Best Original Screenplay",
    "Best Adapted Screenplay",
    "Best Cinematography",
    "Best Production Design",
    "Best Editing",
    "Best Original Score",
    "Best Visual Effects",
    "academy",
];

/// Tokens linking a song mention to its author
pub const SONG_PREPOSITIONS: &[&str] = &["by", "of", "from"];

/// Anchor tokens for title phrases, with the longest phrase tried after each
pub const TITLE_ANCHORS: &[(&str, usize)] = &[("film", 3), ("movie", 4)];

/// Token that marks a bare cardinal as a rating
pub const RATE_GIVE: &str = "give";

/// Token that turns a cardinal into "N stars"
pub const RATE_STARS: &str = "stars";

/// Question asked first when a person is both actor and director
pub fn actor_question(person: &str) -> String {
    format!("Is {} an actor?", person)
}

pub fn director_question(person: &str) -> String {
    format!("Is {} a director?", person)
}
