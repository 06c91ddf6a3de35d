//! Static video catalog
//!
//! The catalog is built once at startup, either from the TOML document
//! embedded in the binary or from a user-supplied file with the same schema,
//! and then handed read-only to the router.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Genre;

/// Catalog shipped with the plugin
const BUILTIN_CATALOG: &str = include_str!("../catalog/default.toml");

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog has no genres")]
    Empty,

    #[error("Genre #{0} has an empty name")]
    UnnamedGenre(usize),

    #[error("Movie #{movie} in genre '{genre}' has an empty {field}")]
    IncompleteMovie {
        genre: String,
        movie: usize,
        field: &'static str,
    },
}

#[derive(Deserialize)]
struct CatalogFile {
    genres: Vec<Genre>,
}

/// Where genre artwork lives inside an addon installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDirs {
    icons: PathBuf,
    fanart: PathBuf,
}

impl ImageDirs {
    /// Standard layout: `<addon>/resources/images/{icons,fanart}`
    pub fn new(addon_path: &Path) -> Self {
        let images = addon_path.join("resources").join("images");
        Self {
            icons: images.join("icons"),
            fanart: images.join("fanart"),
        }
    }

    pub fn icon(&self, name: &str) -> String {
        resolve(&self.icons, name)
    }

    pub fn fanart(&self, name: &str) -> String {
        resolve(&self.fanart, name)
    }
}

/// Bare file names join the directory; absolute paths and URLs are kept
fn resolve(dir: &Path, name: &str) -> String {
    if name.contains("://") || Path::new(name).is_absolute() {
        name.to_string()
    } else {
        dir.join(name).to_string_lossy().into_owned()
    }
}

/// Ordered, immutable list of genres
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    genres: Vec<Genre>,
}

impl Catalog {
    /// Validate and wrap an already-resolved genre list
    pub fn new(genres: Vec<Genre>) -> Result<Self, CatalogError> {
        if genres.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, genre) in genres.iter().enumerate() {
            if genre.name.trim().is_empty() {
                return Err(CatalogError::UnnamedGenre(i));
            }
            for (j, movie) in genre.movies.iter().enumerate() {
                let missing = if movie.title.trim().is_empty() {
                    Some("title")
                } else if movie.url.trim().is_empty() {
                    Some("url")
                } else {
                    None
                };
                if let Some(field) = missing {
                    return Err(CatalogError::IncompleteMovie {
                        genre: genre.name.clone(),
                        movie: j,
                        field,
                    });
                }
            }
        }

        Ok(Self { genres })
    }

    /// The catalog embedded in the binary
    pub fn builtin(images: &ImageDirs) -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG, images)
    }

    /// Parse catalog TOML and resolve genre artwork against `images`
    pub fn from_toml_str(s: &str, images: &ImageDirs) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(s)?;
        let genres = file
            .genres
            .into_iter()
            .map(|mut genre| {
                genre.icon = images.icon(&genre.icon);
                genre.fanart = images.fanart(&genre.fanart);
                genre
            })
            .collect();
        Self::new(genres)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path, images: &ImageDirs) -> Result<Self, CatalogError> {
        let s = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s, images)
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn genre(&self, index: usize) -> Option<&Genre> {
        self.genres.get(index)
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn images() -> ImageDirs {
        ImageDirs::new(Path::new("/addon"))
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin(&images()).unwrap();
        let names: Vec<_> = catalog.genres().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["popular", "Terror", "Teste"]);
        assert!(catalog.genres().iter().all(|g| g.movies.len() == 3));
    }

    #[test]
    fn test_builtin_teste_genre() {
        let catalog = Catalog::builtin(&images()).unwrap();
        let teste = catalog.genre(2).unwrap();
        assert_eq!(teste.movies[0].title, "kraven o caçador");
        assert_eq!(teste.movies[0].year, 2024);
        assert!(teste.movies[0].plot.starts_with("Sergei Kravinoff"));
        assert_eq!(teste.movies[1].title, "vazio");
        assert_eq!(teste.movies[2].year, 9999);
    }

    #[test]
    fn test_builtin_art_resolved() {
        let catalog = Catalog::builtin(&images()).unwrap();
        let terror = catalog.genre(1).unwrap();
        let icon = Path::new("/addon/resources/images/icons/Horror.png");
        let fanart = Path::new("/addon/resources/images/fanart/Horror.jpg");
        assert_eq!(Path::new(&terror.icon), icon);
        assert_eq!(Path::new(&terror.fanart), fanart);
    }

    #[test]
    fn test_resolve_keeps_urls_and_absolute_paths() {
        let dirs = images();
        assert_eq!(dirs.icon("https://cdn/x.png"), "https://cdn/x.png");
        assert_eq!(dirs.fanart("/srv/art.jpg"), "/srv/art.jpg");
    }

    #[test]
    fn test_genre_out_of_range() {
        let catalog = Catalog::builtin(&images()).unwrap();
        assert!(catalog.genre(3).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
        let err = Catalog::from_toml_str("genres = []", &images()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_incomplete_movie_rejected() {
        let genre = Genre {
            name: "Drama".to_string(),
            icon: String::new(),
            fanart: String::new(),
            movies: vec![Movie {
                title: "Untitled".to_string(),
                url: " ".to_string(),
                poster: String::new(),
                plot: String::new(),
                year: 2000,
            }],
        };
        match Catalog::new(vec![genre]) {
            Err(CatalogError::IncompleteMovie { genre, movie, field }) => {
                assert_eq!(genre, "Drama");
                assert_eq!(movie, 0);
                assert_eq!(field, "url");
            }
            other => panic!("Expected IncompleteMovie, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = Catalog::from_toml_str("genres = 3", &images()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.toml"), &images()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
