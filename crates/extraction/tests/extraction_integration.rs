//! End-to-end extraction tests with in-memory models
//!
//! The models are scripted per test; the lexicons and catalog are small
//! in-memory fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use movie_ner_config::ExtractionConfig;
use movie_ner_core::{
    Catalog, CatalogRecord, DomainTagger, EntityKind, Error, GeneralRecognizer, Label, Lexicons,
    QuestionAnswerer, RecognizedSpan, Result, TaggedToken,
};
use movie_ner_extraction::{ExtractionError, Models, MovieEntityExtractor};

/// Scripted recognizers and QA model that count their calls
#[derive(Default)]
struct ScriptedModels {
    spans: Vec<RecognizedSpan>,
    tags: Vec<(String, Label)>,
    answer: Option<String>,
    fail: bool,
    calls: AtomicUsize,
    qa_calls: AtomicUsize,
}

impl ScriptedModels {
    fn person(mut self, name: &str) -> Self {
        self.spans.push(RecognizedSpan::new(name, "PERSON"));
        self
    }

    fn cardinal(mut self, value: &str) -> Self {
        self.spans.push(RecognizedSpan::new(value, "CARDINAL"));
        self
    }

    fn misc(mut self, words: &str) -> Self {
        for (idx, word) in words.split_whitespace().enumerate() {
            let label = if idx == 0 {
                Label::Begin(EntityKind::Misc)
            } else {
                Label::Inside(EntityKind::Misc)
            };
            self.tags.push((word.to_string(), label));
        }
        self
    }

    fn answer(mut self, answer: &str) -> Self {
        self.answer = Some(answer.to_string());
        self
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn into_models(self) -> (Arc<Self>, Models) {
        let shared = Arc::new(self);
        let models = Models {
            general: shared.clone(),
            domain: shared.clone(),
            qa: shared.clone(),
        };
        (shared, models)
    }
}

impl GeneralRecognizer for ScriptedModels {
    fn recognize(&self, _text: &str) -> Result<Vec<RecognizedSpan>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::model("recognizer offline"));
        }
        Ok(self.spans.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

impl DomainTagger for ScriptedModels {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let tags = text
            .split_whitespace()
            .map(|word| {
                let label = self
                    .tags
                    .iter()
                    .find(|(tagged, _)| tagged == word)
                    .map(|(_, label)| *label)
                    .unwrap_or_default();
                TaggedToken::new(word, label)
            })
            .collect();
        Ok(tags)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

impl QuestionAnswerer for ScriptedModels {
    fn answer(&self, _question: &str, _context: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.qa_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn record(title: &str, year: &str, genre: &str, director: &str, actors: &str) -> CatalogRecord {
    CatalogRecord {
        title: title.to_string(),
        year: year.to_string(),
        genre: genre.to_string(),
        director: director.to_string(),
        actors: actors.to_string(),
        description: String::new(),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        record("Sleepless in Seattle", "1993", "Comedy, Drama, Romance", "Nora Ephron", "Tom Hanks, Meg Ryan, Bill Pullman"),
        record("You've Got Mail", "1998", "Comedy, Drama, Romance", "Nora Ephron", "Tom Hanks, Meg Ryan, Greg Kinnear"),
        record("Pulp Fiction", "1994", "Crime, Drama", "Quentin Tarantino", "John Travolta, Uma Thurman, Samuel L. Jackson"),
        record("Forrest Gump", "1994", "Drama, Romance", "Robert Zemeckis", "Tom Hanks, Robin Wright, Gary Sinise"),
        record("Unforgiven", "1992", "Drama, Western", "Clint Eastwood", "Clint Eastwood, Gene Hackman, Morgan Freeman"),
    ])
}

fn lexicons() -> Lexicons {
    Lexicons::new(
        ["comedy", "drama", "romance", "crime", "western"],
        ["sleepless in seattle", "pulp fiction", "forrest gump", "unforgiven"],
        ["tom hanks", "meg ryan", "clint eastwood", "nora ephron"],
        ["tarantino", "quentin tarantino", "clint eastwood", "robert zemeckis"],
    )
}

fn extractor(models: Models) -> MovieEntityExtractor {
    MovieEntityExtractor::new(
        models,
        Arc::new(lexicons()),
        Arc::new(catalog()),
        ExtractionConfig::default(),
    )
}

fn labels(tokens: &[TaggedToken]) -> Vec<(String, String)> {
    tokens
        .iter()
        .map(|t| (t.text.clone(), t.label.to_string()))
        .collect()
}

fn label_of<'a>(tokens: &'a [TaggedToken], word: &str) -> Option<&'a Label> {
    tokens.iter().find(|t| t.text == word).map(|t| &t.label)
}

fn assert_contiguous(tokens: &[TaggedToken]) {
    for idx in 0..tokens.len() {
        if let Label::Inside(kind) = tokens[idx].label {
            assert!(
                idx > 0 && tokens[idx - 1].label.continues_into(kind),
                "orphaned I- label at {}: {:?}",
                idx,
                labels(tokens)
            );
        }
    }
}

#[test]
fn test_director_from_lexicon_without_qa() {
    let (models, handles) = ScriptedModels::default().person("Tarantino").into_models();
    let extractor = extractor(handles);
    let text = "The 1994 movie directed by Tarantino";

    let analysis = extractor.analyze(text).unwrap();
    assert_eq!(analysis.entities.years, vec!["1994"]);
    assert_eq!(models.qa_calls.load(Ordering::SeqCst), 0);

    // "Tarantino" alone does not match the director field and is dropped
    assert!(analysis.entities.directors.is_empty());
    assert!(analysis.entities.actors.is_empty());

    let extraction = extractor.extract(text).unwrap();
    assert_eq!(label_of(&extraction.tokens, "1994"), Some(&Label::Begin(EntityKind::Year)));
    assert_eq!(label_of(&extraction.tokens, "Tarantino"), Some(&Label::Outside));
    assert!(extraction.matched_record.is_none());
}

#[test]
fn test_single_row_rederivation() {
    let (_, handles) = ScriptedModels::default()
        .person("tom hanks")
        .misc("sleepless in seattle")
        .into_models();
    let extractor = extractor(handles);
    let text = "is sleepless in seattle a comedy with tom hanks";

    let analysis = extractor.analyze(text).unwrap();
    assert_eq!(analysis.entities.titles, vec!["Sleepless in Seattle"]);
    assert_eq!(analysis.entities.genres, vec!["Comedy"]);
    assert!(analysis
        .entities
        .actors
        .iter()
        .any(|a| a.eq_ignore_ascii_case("Tom Hanks")));

    let extraction = extractor.extract(text).unwrap();
    let record = extraction.matched_record.as_ref().unwrap();
    assert_eq!(record.title, "Sleepless in Seattle");
    assert_eq!(
        labels(&extraction.tokens),
        vec![
            ("is".to_string(), "O".to_string()),
            ("sleepless".to_string(), "B-TITLE".to_string()),
            ("in".to_string(), "I-TITLE".to_string()),
            ("seattle".to_string(), "I-TITLE".to_string()),
            ("a".to_string(), "O".to_string()),
            ("comedy".to_string(), "B-GENRE".to_string()),
            ("with".to_string(), "O".to_string()),
            ("tom".to_string(), "B-ACTOR".to_string()),
            ("hanks".to_string(), "I-ACTOR".to_string()),
        ]
    );
}

#[test]
fn test_actor_reclassified_as_director() {
    let (_, handles) = ScriptedModels::default().person("Nora Ephron").into_models();
    let extractor = extractor(handles);

    let analysis = extractor.analyze("romantic movies by Nora Ephron").unwrap();
    assert_eq!(analysis.entities.directors, vec!["Nora Ephron"]);
    assert!(analysis.entities.actors.is_empty());
    assert!(analysis.matched_record.is_none());

    let extraction = extractor.extract("romantic movies by Nora Ephron").unwrap();
    assert_eq!(label_of(&extraction.tokens, "Nora"), Some(&Label::Begin(EntityKind::Director)));
    assert_eq!(label_of(&extraction.tokens, "Ephron"), Some(&Label::Inside(EntityKind::Director)));
}

#[test]
fn test_song_claims_character() {
    let (_, handles) = ScriptedModels::default().person("John Williams").into_models();
    let extractor = extractor(handles);
    let text = "play the soundtrack by John Williams";

    let analysis = extractor.analyze(text).unwrap();
    assert!(analysis.entities.characters.is_empty());
    assert!(analysis.entities.songs.contains(&"John Williams".to_string()));

    let extraction = extractor.extract(text).unwrap();
    assert_eq!(
        labels(&extraction.tokens)[2..],
        [
            ("soundtrack".to_string(), "B-SONG".to_string()),
            ("by".to_string(), "I-SONG".to_string()),
            ("John".to_string(), "I-SONG".to_string()),
            ("Williams".to_string(), "I-SONG".to_string()),
        ]
    );
}

#[test]
fn test_ambiguous_person_resolved_by_qa() {
    let (models, handles) = ScriptedModels::default()
        .person("Clint Eastwood")
        .answer("he directed it")
        .into_models();
    let extractor = extractor(handles);

    let extraction = extractor.extract("westerns Clint Eastwood made").unwrap();
    assert_eq!(models.qa_calls.load(Ordering::SeqCst), 1);
    assert_eq!(label_of(&extraction.tokens, "Clint"), Some(&Label::Begin(EntityKind::Director)));
    assert_eq!(extraction.matched_record.unwrap().title, "Unforgiven");
}

#[test]
fn test_rate_average_and_rating() {
    let (_, handles) = ScriptedModels::default().cardinal("4").into_models();
    let extractor = extractor(handles);

    let extraction = extractor.extract("PG-13 comedies with 4 stars").unwrap();
    assert_eq!(
        labels(&extraction.tokens),
        vec![
            ("PG-13".to_string(), "B-RATING".to_string()),
            ("comedies".to_string(), "O".to_string()),
            ("with".to_string(), "O".to_string()),
            ("4".to_string(), "B-RATINGS_AVERAGE".to_string()),
            ("stars".to_string(), "I-RATINGS_AVERAGE".to_string()),
        ]
    );
    assert_contiguous(&extraction.tokens);
}

#[test]
fn test_empty_text_calls_no_model() {
    let (models, handles) = ScriptedModels::default().into_models();
    let extractor = extractor(handles);

    for text in ["", "   \n\t"] {
        let extraction = extractor.extract(text).unwrap();
        assert!(extraction.tokens.is_empty());
        assert!(extraction.matched_record.is_none());
    }
    assert_eq!(models.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_model_failure_propagates() {
    let (_, handles) = ScriptedModels::failing().into_models();
    let result = extractor(handles).extract("movies with Tom Hanks");
    assert!(matches!(result, Err(ExtractionError::Model(Error::Model(_)))));
}

#[test]
fn test_labels_stay_contiguous() {
    let (_, handles) = ScriptedModels::default()
        .person("Tom Hanks")
        .person("Meg Ryan")
        .misc("You've Got Mail")
        .into_models();
    let extractor = extractor(handles);

    for text in [
        "Tom Hanks and Meg Ryan in You've Got Mail from 1998",
        "Hanks Tom Ryan Meg award trailer",
        "the Oscars for Best Actor went to Tom Hanks in Forrest Gump",
    ] {
        let extraction = extractor.extract(text).unwrap();
        assert_contiguous(&extraction.tokens);
    }
}

#[test]
fn test_person_roles_stay_disjoint_after_single_row_match() {
    let (models, handles) = ScriptedModels::default()
        .person("Quentin Tarantino")
        .person("Harvey Keitel")
        .into_models();
    let catalog = Catalog::new(vec![
        record("Reservoir Dogs", "1992", "Crime, Thriller", "Quentin Tarantino", "Harvey Keitel, Quentin Tarantino, Steve Buscemi"),
        record("Sleepless in Seattle", "1993", "Comedy, Drama, Romance", "Nora Ephron", "Tom Hanks, Meg Ryan, Bill Pullman"),
    ]);
    let extractor = MovieEntityExtractor::new(
        handles,
        Arc::new(lexicons()),
        Arc::new(catalog),
        ExtractionConfig::default(),
    );
    let text = "crime movies by Quentin Tarantino with Harvey Keitel";

    let analysis = extractor.analyze(text).unwrap();
    assert_eq!(models.qa_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        analysis.matched_record.as_ref().map(|r| r.title.as_str()),
        Some("Reservoir Dogs")
    );
    assert_eq!(analysis.entities.directors, vec!["Quentin Tarantino"]);
    assert_eq!(analysis.entities.actors, vec!["Harvey Keitel"]);
    assert!(analysis.entities.characters.is_empty());

    for person in ["Quentin Tarantino", "Harvey Keitel"] {
        let roles = [
            &analysis.entities.actors,
            &analysis.entities.directors,
            &analysis.entities.characters,
        ]
        .iter()
        .filter(|names| names.iter().any(|n| n.eq_ignore_ascii_case(person)))
        .count();
        assert_eq!(roles, 1, "{} should hold exactly one role", person);
    }

    let extraction = extractor.extract(text).unwrap();
    assert_eq!(label_of(&extraction.tokens, "Quentin"), Some(&Label::Begin(EntityKind::Director)));
    assert_eq!(label_of(&extraction.tokens, "Harvey"), Some(&Label::Begin(EntityKind::Actor)));
}
