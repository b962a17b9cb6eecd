//! Lexicon list and catalog loading
//!
//! Assets are read once at startup and handed to the extractor as
//! immutable values.

use std::fs;
use std::io;
use std::path::Path;

use movie_ner_core::{Catalog, CatalogRecord, Lexicons};

use crate::{AssetsConfig, ConfigError};

/// Everything the extractor needs besides the models
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub lexicons: Lexicons,
    pub catalog: Catalog,
}

/// Load lexicons and catalog
pub fn load_assets(config: &AssetsConfig) -> Result<Assets, ConfigError> {
    let lexicons = load_lexicons(config)?;
    let catalog = load_catalog(config)?;

    Ok(Assets { lexicons, catalog })
}

/// Load the four newline-delimited lexicon lists
pub fn load_lexicons(config: &AssetsConfig) -> Result<Lexicons, ConfigError> {
    let genres = read_list(&config.genres_path())?;
    let titles = read_list(&config.titles_path())?;
    let actors = read_list(&config.actors_path())?;
    let directors = read_list(&config.directors_path())?;

    let lexicons = Lexicons::new(genres, titles, actors, directors);
    let (genres, titles, actors, directors) = lexicons.sizes();
    tracing::info!(genres, titles, actors, directors, "Loaded lexicons");

    Ok(lexicons)
}

/// Load the movie catalog CSV
///
/// Extra columns are ignored; rows without a cast are dropped.
pub fn load_catalog(config: &AssetsConfig) -> Result<Catalog, ConfigError> {
    let path = config.catalog_path();
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<CatalogRecord>().enumerate() {
        let record = result.map_err(|e| {
            ConfigError::Asset(format!("{}: row {}: {}", path.display(), row + 1, e))
        })?;
        records.push(record);
    }

    let total = records.len();
    let catalog = Catalog::new(records);
    tracing::info!(
        path = %path.display(),
        rows = catalog.len(),
        dropped = total - catalog.len(),
        "Loaded movie catalog"
    );

    Ok(catalog)
}

fn read_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
        _ => ConfigError::Asset(format!("{}: {}", path.display(), e)),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_assets(dir: &Path, catalog: &str) {
        fs::write(dir.join("genres.list"), "comedy\ndrama\n\nromance\n").unwrap();
        fs::write(dir.join("titles.list"), "sleepless in seattle\nup\n").unwrap();
        fs::write(dir.join("actors.list"), "tom hanks\nmeg ryan\n").unwrap();
        fs::write(dir.join("directors.list"), "nora ephron\n").unwrap();
        fs::write(dir.join("movies.csv"), catalog).unwrap();
    }

    #[test]
    fn test_load_assets() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(
            dir.path(),
            "original_title,year,genre,director,actors,description,votes\n\
             Sleepless in Seattle,1993,\"Comedy,Romance\",Nora Ephron,\"Tom Hanks, Meg Ryan\",Radio romance,100\n\
             Ghost Reel,1990,Drama,Nobody,,No cast,3\n",
        );

        let assets = load_assets(&AssetsConfig::in_dir(dir.path())).unwrap();

        assert_eq!(assets.lexicons.genres().len(), 3);
        assert!(assets.lexicons.is_actor("Tom Hanks"));
        assert!(assets.lexicons.is_director("Nora Ephron"));

        // Row without actors is dropped
        assert_eq!(assets.catalog.len(), 1);
        let row = &assets.catalog.records()[0];
        assert_eq!(row.title, "Sleepless in Seattle");
        assert_eq!(row.year, "1993");
        assert_eq!(row.cast(), vec!["Tom Hanks", "Meg Ryan"]);
    }

    #[test]
    fn test_missing_description_column() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(
            dir.path(),
            "original_title,year,genre,director,actors\nUp,2009,Animation,Pete Docter,Ed Asner\n",
        );

        let catalog = load_catalog(&AssetsConfig::in_dir(dir.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.records()[0].description.is_empty());
    }

    #[test]
    fn test_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetsConfig::in_dir(dir.path());

        assert!(matches!(
            load_lexicons(&config),
            Err(ConfigError::FileNotFound(_))
        ));
        assert!(matches!(
            load_catalog(&config),
            Err(ConfigError::FileNotFound(_))
        ));
    }
}
