//! Reference movie catalog

use serde::{Deserialize, Serialize};

/// One movie row of the reference catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Original title
    #[serde(rename = "original_title")]
    pub title: String,
    /// Release year as written in the catalog
    #[serde(default)]
    pub year: String,
    /// Comma-joined genres
    #[serde(default)]
    pub genre: String,
    /// Director (comma-joined when co-directed)
    #[serde(default)]
    pub director: String,
    /// Comma-joined cast
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogRecord {
    /// Genres split on commas, trimmed, empties dropped
    pub fn genres(&self) -> Vec<&str> {
        split_field(&self.genre)
    }

    /// Cast split on commas, trimmed, empties dropped
    pub fn cast(&self) -> Vec<&str> {
        split_field(&self.actors)
    }

    /// Directors split on commas, trimmed, empties dropped
    pub fn directors(&self) -> Vec<&str> {
        split_field(&self.director)
    }
}

fn split_field(field: &str) -> Vec<&str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect()
}

/// Immutable movie table shared across extraction calls
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    /// Build a catalog, keeping only rows with a non-empty cast
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|record| !record.actors.trim().is_empty())
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CatalogRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, actors: &str) -> CatalogRecord {
        CatalogRecord {
            title: title.to_string(),
            year: "1993".to_string(),
            genre: "Comedy, Romance".to_string(),
            director: "Nora Ephron".to_string(),
            actors: actors.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_catalog_drops_rows_without_cast() {
        let catalog = Catalog::new(vec![
            record("Sleepless in Seattle", "Tom Hanks, Meg Ryan"),
            record("Untitled", "  "),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].title, "Sleepless in Seattle");
    }

    #[test]
    fn test_field_splitting() {
        let row = record("Sleepless in Seattle", "Tom Hanks,Meg Ryan, ");
        assert_eq!(row.cast(), vec!["Tom Hanks", "Meg Ryan"]);
        assert_eq!(row.genres(), vec!["Comedy", "Romance"]);
        assert_eq!(row.directors(), vec!["Nora Ephron"]);
    }
}
