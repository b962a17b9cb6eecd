//! Static vocabulary lists (genres, titles, actors, directors)
//!
//! All lookups are case-insensitive: entries are stored lowercased and
//! queries are lowercased before the membership test.

use std::collections::HashSet;

/// Read-only lexicons loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    /// Genres in file order (substring scanning depends on it)
    genres: Vec<String>,
    titles: HashSet<String>,
    actors: HashSet<String>,
    directors: HashSet<String>,
}

impl Lexicons {
    pub fn new<G, T, A, D>(genres: G, titles: T, actors: A, directors: D) -> Self
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let genres = normalize(genres)
            .filter(|genre| seen.insert(genre.clone()))
            .collect();

        Self {
            genres,
            titles: normalize(titles).collect(),
            actors: normalize(actors).collect(),
            directors: normalize(directors).collect(),
        }
    }

    /// Genre entries, lowercased, in file order
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn is_title(&self, candidate: &str) -> bool {
        self.titles.contains(&candidate.trim().to_lowercase())
    }

    pub fn is_actor(&self, name: &str) -> bool {
        self.actors.contains(&name.trim().to_lowercase())
    }

    pub fn is_director(&self, name: &str) -> bool {
        self.directors.contains(&name.trim().to_lowercase())
    }

    /// Sizes as (genres, titles, actors, directors), for startup logging
    pub fn sizes(&self) -> (usize, usize, usize, usize) {
        (
            self.genres.len(),
            self.titles.len(),
            self.actors.len(),
            self.directors.len(),
        )
    }
}

fn normalize<I>(entries: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_membership() {
        let lexicons = Lexicons::new(
            ["Comedy", "drama", ""],
            ["Sleepless in Seattle"],
            ["Tom Hanks"],
            ["quentin tarantino"],
        );

        assert!(lexicons.is_title("sleepless in seattle"));
        assert!(lexicons.is_actor("TOM HANKS"));
        assert!(lexicons.is_director(" Quentin Tarantino "));
        assert!(!lexicons.is_actor("Meg Ryan"));
        assert_eq!(lexicons.genres(), &["comedy".to_string(), "drama".to_string()]);
    }

    #[test]
    fn test_empty_lines_ignored() {
        let lexicons = Lexicons::new(["", "  "], [""], [""], [""]);
        assert!(!lexicons.is_title(""));
        assert_eq!(lexicons.sizes(), (0, 0, 0, 0));
    }
}
