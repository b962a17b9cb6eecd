//! Catalog reconciliation
//!
//! Narrows the catalog to the rows consistent with the extracted actors,
//! directors, years, titles and genres (in that order). Every filter attempt
//! is transactional: an attempt that would leave no rows is rolled back and
//! the value that caused it is dropped. Persons get one retry in the other
//! role before being dropped.
//!
//! When exactly one row survives, entities are re-derived from that row by
//! scanning the text for its field values.

use regex::Regex;

use movie_ner_core::{Catalog, CatalogRecord};

use crate::candidates::EntityCandidates;
use crate::text::{alternation, base_name, dedup, dedup_ignore_case};

/// Row indices of the catalog still consistent with the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    rows: Vec<usize>,
}

impl CandidateSet {
    /// Every row of the catalog
    pub fn all(catalog: &Catalog) -> Self {
        Self {
            rows: (0..catalog.len()).collect(),
        }
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of this set that satisfy `keep`, or `None` if none would
    pub fn narrow<F>(&self, catalog: &Catalog, keep: F) -> Option<CandidateSet>
    where
        F: Fn(&CatalogRecord) -> bool,
    {
        let rows: Vec<usize> = self
            .rows
            .iter()
            .copied()
            .filter(|&idx| catalog.get(idx).is_some_and(&keep))
            .collect();
        (!rows.is_empty()).then_some(CandidateSet { rows })
    }

    /// The surviving row, when exactly one does
    pub fn single<'c>(&self, catalog: &'c Catalog) -> Option<&'c CatalogRecord> {
        match self.rows.as_slice() {
            [idx] => catalog.get(*idx),
            _ => None,
        }
    }
}

// =============================================================================
// Row filters
// =============================================================================

/// Base name is a substring of the cast field
pub fn actor_matches(record: &CatalogRecord, name: &str) -> bool {
    let name = base_name(name).trim().to_lowercase();
    record.actors.to_lowercase().contains(&name)
}

/// Base name equals the director field
pub fn director_matches(record: &CatalogRecord, name: &str) -> bool {
    record.director.trim().to_lowercase() == base_name(name).trim().to_lowercase()
}

pub fn genre_matches(record: &CatalogRecord, genre: &str) -> bool {
    record
        .genre
        .to_lowercase()
        .contains(&genre.trim().to_lowercase())
}

pub fn title_matches(record: &CatalogRecord, title: &str) -> bool {
    record.title.trim().to_lowercase() == title.trim().to_lowercase()
}

/// Year token with its `since`/`'s` decoration removed equals the row year
pub fn year_matches(record: &CatalogRecord, year: &str) -> bool {
    record.year.trim() == normalize_year(year)
}

/// `"since1990"` → `"1990"`, `"1980's"` → `"1980"`
pub fn normalize_year(year: &str) -> &str {
    year.trim()
        .trim_matches(|c: char| c.is_ascii_punctuation() || c.is_ascii_alphabetic())
}

// =============================================================================
// Reconciler
// =============================================================================

/// Outcome of a reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub years: Vec<String>,
    pub titles: Vec<String>,
    pub genres: Vec<String>,
    pub candidates: CandidateSet,
}

impl Reconciliation {
    /// Replace the reconciled categories of `entities` with the survivors
    pub fn apply_to(&self, entities: &mut EntityCandidates) {
        entities.actors = self.actors.clone();
        entities.directors = self.directors.clone();
        entities.years = self.years.clone();
        entities.titles = self.titles.clone();
        entities.genres = self.genres.clone();
    }
}

/// Filters a catalog against extracted entities
#[derive(Debug, Clone, Copy)]
pub struct CatalogReconciler<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogReconciler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn reconcile(&self, entities: &EntityCandidates) -> Reconciliation {
        let mut set = CandidateSet::all(self.catalog);
        let mut actors = Vec::new();
        let mut directors = Vec::new();

        for actor in &entities.actors {
            if let Some(next) = set.narrow(self.catalog, |r| actor_matches(r, actor)) {
                set = next;
                actors.push(actor.clone());
            } else if let Some(next) = set.narrow(self.catalog, |r| director_matches(r, actor)) {
                tracing::debug!(person = %actor, "Reclassified actor as director");
                set = next;
                directors.push(actor.clone());
            } else {
                tracing::debug!(person = %actor, "Outlier actor dropped");
            }
        }

        for director in &entities.directors {
            if let Some(next) = set.narrow(self.catalog, |r| director_matches(r, director)) {
                set = next;
                directors.push(director.clone());
            } else if let Some(next) = set.narrow(self.catalog, |r| actor_matches(r, director)) {
                tracing::debug!(person = %director, "Reclassified director as actor");
                set = next;
                actors.push(director.clone());
            } else {
                tracing::debug!(person = %director, "Outlier director dropped");
            }
        }

        let years = self.keep_consistent(&mut set, &entities.years, "year", year_matches);
        let titles = self.keep_consistent(&mut set, &entities.titles, "title", title_matches);
        let genres = self.keep_consistent(&mut set, &entities.genres, "genre", genre_matches);

        tracing::debug!(rows = set.len(), "Catalog reconciled");

        Reconciliation {
            actors: dedup(actors),
            directors: dedup(directors),
            years,
            titles,
            genres,
            candidates: set,
        }
    }

    /// Narrow by each value in turn, dropping values that would empty the set
    fn keep_consistent(
        &self,
        set: &mut CandidateSet,
        values: &[String],
        category: &str,
        matches: fn(&CatalogRecord, &str) -> bool,
    ) -> Vec<String> {
        let mut kept = Vec::new();
        for value in values {
            match set.narrow(self.catalog, |r| matches(r, value)) {
                Some(next) => {
                    *set = next;
                    kept.push(value.clone());
                }
                None => tracing::debug!(category, value = %value, "Rejected by catalog"),
            }
        }
        kept
    }
}

// =============================================================================
// Single-row re-derivation
// =============================================================================

/// Rewrite titles, genres, directors and actors from the single matched row
///
/// Each field's values are searched for in the text and reported in the
/// catalog's spelling. Actors are added to the existing list; the other
/// categories are replaced. A person keeps the role already assigned: known
/// actors are not re-derived as directors, and re-derived directors are not
/// added from the cast. Characters found in the row's credits are dropped.
pub fn rederive_from_record(
    record: &CatalogRecord,
    text: &str,
    entities: &mut EntityCandidates,
) -> Result<(), regex::Error> {
    entities.titles = mentioned(text, &[record.title.trim()])?;
    entities.genres = mentioned(text, &record.genres())?;

    let actors = std::mem::take(&mut entities.actors);
    entities.directors = mentioned(text, &base_names(record.directors()))?
        .into_iter()
        .filter(|director| !contains_person(&actors, director))
        .collect();

    let cast = mentioned(text, &base_names(record.cast()))?
        .into_iter()
        .filter(|actor| !contains_person(&entities.directors, actor));
    entities.actors = dedup_ignore_case(actors.into_iter().chain(cast));

    let characters = std::mem::take(&mut entities.characters);
    entities.characters = characters
        .into_iter()
        .filter(|character| {
            !contains_person(&entities.actors, character)
                && !contains_person(&entities.directors, character)
        })
        .collect();

    Ok(())
}

fn contains_person(names: &[String], person: &str) -> bool {
    names
        .iter()
        .any(|name| base_name(name).trim().eq_ignore_ascii_case(person.trim()))
}

fn base_names(names: Vec<&str>) -> Vec<&str> {
    names.into_iter().map(base_name).collect()
}

/// Values mentioned in the text as whole words, in canonical spelling
fn mentioned(text: &str, values: &[&str]) -> Result<Vec<String>, regex::Error> {
    let body = alternation(values);
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", body))?;

    let found = pattern.find_iter(text).filter_map(|m| {
        let surface = m.as_str().to_lowercase();
        values
            .iter()
            .map(|value| value.trim())
            .find(|value| value.to_lowercase() == surface)
            .map(str::to_string)
    });
    Ok(dedup(found))
}
