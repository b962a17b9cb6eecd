//! Extraction pipeline
//!
//! text → recognizers + lexicon matchers → person roles → catalog
//! reconciliation → per-token BIO labels.

use std::sync::Arc;

use serde::Serialize;

use movie_ner_config::{Assets, ExtractionConfig};
use movie_ner_core::{
    general_labels, Catalog, CatalogRecord, DomainTagger, GeneralRecognizer, Lexicons, TaggedToken,
};

use crate::candidates::EntityCandidates;
use crate::disambiguation::Disambiguator;
use crate::lexicon;
use crate::merge::{baseline, merge_spans};
use crate::persons::{classify_person, collect_persons, PersonRole};
use crate::recognizers::Models;
use crate::reconcile::{rederive_from_record, CatalogReconciler};
use crate::Result;

/// Result of one extraction call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Whitespace tokens of the text with their labels
    pub tokens: Vec<TaggedToken>,
    /// The catalog row, when reconciliation narrowed to exactly one
    pub matched_record: Option<CatalogRecord>,
}

/// Entity candidates before lowering, with the matched row if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub entities: EntityCandidates,
    pub matched_record: Option<CatalogRecord>,
}

/// Movie query entity extractor
///
/// Holds only shared, read-only resources; one instance serves concurrent
/// calls.
#[derive(Clone)]
pub struct MovieEntityExtractor {
    general: Arc<dyn GeneralRecognizer>,
    domain: Arc<dyn DomainTagger>,
    disambiguator: Disambiguator,
    lexicons: Arc<Lexicons>,
    catalog: Arc<Catalog>,
    config: ExtractionConfig,
}

impl std::fmt::Debug for MovieEntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieEntityExtractor")
            .field("general", &self.general.name())
            .field("domain", &self.domain.name())
            .field("disambiguator", &self.disambiguator)
            .field("catalog_rows", &self.catalog.len())
            .field("config", &self.config)
            .finish()
    }
}

impl MovieEntityExtractor {
    pub fn new(
        models: Models,
        lexicons: Arc<Lexicons>,
        catalog: Arc<Catalog>,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            general: models.general,
            domain: models.domain,
            disambiguator: Disambiguator::new(models.qa),
            lexicons,
            catalog,
            config,
        }
    }

    pub fn from_assets(models: Models, assets: Assets, config: ExtractionConfig) -> Self {
        Self::new(
            models,
            Arc::new(assets.lexicons),
            Arc::new(assets.catalog),
            config,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Label every whitespace token of `text`
    ///
    /// Empty or whitespace-only text yields no tokens without calling any
    /// model.
    #[tracing::instrument(skip_all, fields(tokens = tracing::field::Empty))]
    pub fn extract(&self, text: &str) -> Result<Extraction> {
        let mut tokens = baseline(text);
        tracing::Span::current().record("tokens", tokens.len());
        if tokens.is_empty() {
            return Ok(Extraction::default());
        }

        let analysis = self.analyze(text)?;
        merge_spans(&mut tokens, &analysis.entities.spans());

        tracing::debug!(
            labelled = tokens.iter().filter(|t| !t.label.is_outside()).count(),
            matched = analysis.matched_record.is_some(),
            "Extraction complete"
        );

        Ok(Extraction {
            tokens,
            matched_record: analysis.matched_record,
        })
    }

    /// Candidate entities of `text` after reconciliation, before lowering
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        if text.trim().is_empty() {
            return Ok(Analysis::default());
        }

        let spans = self.general.recognize(text)?;
        let tags = self.domain.tag(text)?;

        let mut entities = EntityCandidates::default();
        for person in collect_persons(&spans, &tags) {
            let role = match classify_person(&person, &self.lexicons) {
                PersonRole::Ambiguous => self.disambiguator.resolve(&person, text)?,
                role => role,
            };
            match role {
                PersonRole::Director => entities.directors.push(person),
                PersonRole::Character => entities.characters.push(person),
                PersonRole::Actor | PersonRole::Ambiguous => entities.actors.push(person),
            }
        }

        let mut titles = lexicon::titles_from_tags(&tags, &self.lexicons);
        titles.extend(lexicon::titles_from_anchors(text, &self.lexicons));
        entities.titles = crate::text::dedup(titles);
        entities.genres = lexicon::match_genres(text, &self.lexicons);
        entities.years = lexicon::match_years(text);

        let cardinals: Vec<String> = spans
            .iter()
            .filter(|span| span.has_label(general_labels::CARDINAL))
            .map(|span| span.text.clone())
            .collect();
        entities.rate_avg =
            lexicon::rate_averages(&cardinals, text, self.config.rate_avg_give_window);
        entities.ratings = lexicon::match_ratings(text);

        let songs = lexicon::extract_songs(
            text,
            std::mem::take(&mut entities.characters),
            self.config.song_context_window,
        )?;
        entities.songs = songs.songs;
        entities.characters = songs.characters;

        entities.awards = lexicon::match_awards(text);
        entities.trailers = lexicon::match_trailers(text);

        let reconciliation = CatalogReconciler::new(&self.catalog).reconcile(&entities);
        reconciliation.apply_to(&mut entities);

        let matched_record = reconciliation.candidates.single(&self.catalog).cloned();
        if let Some(record) = &matched_record {
            tracing::debug!(title = %record.title, "Single catalog match");
            rederive_from_record(record, text, &mut entities)?;
        }

        Ok(Analysis {
            entities,
            matched_record,
        })
    }
}
