//! Data structures and types for genre-reel
//!
//! Contains all shared models organized by domain:
//! - **Catalog**: genre and movie records as read from catalog TOML
//! - **Listing**: entries, artwork and info tags handed to the host
//! - **Playback**: the offscreen item passed to the host player

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Opaque listing handle assigned by the host for one invocation
pub type Handle = i32;

// =============================================================================
// Catalog Models
// =============================================================================

/// A named grouping of movies with its artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    pub icon: String,
    pub fanart: String,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

/// A single playable title in a genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub url: String,
    pub poster: String,
    #[serde(default)]
    pub plot: String,
    pub year: i32,
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

// =============================================================================
// Listing Models
// =============================================================================

/// Media type tag a skin uses to pick the right info layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Movie,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Movie => write!(f, "movie"),
        }
    }
}

/// Content type of a whole listing, lets the host choose a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movies,
}

/// Artwork attached to an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Art {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fanart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// Video info tag of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub media_type: MediaKind,
    pub title: String,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// One row of a virtual folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub label: String,
    pub art: Art,
    pub info: VideoInfo,
    /// Must be set for entries that resolve to a stream instead of a sub-listing
    pub playable: bool,
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.info.year {
            Some(year) => write!(f, "{} ({})", self.label, year),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Sort options the host may offer for a listing. The first one is the
/// default view order; emission order is never changed by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    /// Case-insensitive by label, ignoring a leading "the "
    LabelIgnoreThe,
    /// Numeric by release year
    VideoYear,
}

impl SortMethod {
    /// Ordering a host applies when this method is selected
    pub fn compare(&self, a: &ListEntry, b: &ListEntry) -> Ordering {
        match self {
            SortMethod::LabelIgnoreThe => label_sort_key(&a.label).cmp(&label_sort_key(&b.label)),
            SortMethod::VideoYear => a.info.year.cmp(&b.info.year),
        }
    }
}

fn label_sort_key(label: &str) -> String {
    let lower = label.trim().to_lowercase();
    match lower.strip_prefix("the ") {
        Some(rest) => rest.trim_start().to_string(),
        None => lower,
    }
}

// =============================================================================
// Playback Models
// =============================================================================

/// Item handed to the player; never rendered in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableItem {
    pub path: String,
    pub offscreen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, year: Option<i32>) -> ListEntry {
        ListEntry {
            label: label.to_string(),
            art: Art::default(),
            info: VideoInfo {
                media_type: MediaKind::Movie,
                title: label.to_string(),
                genres: vec![],
                plot: None,
                year,
            },
            playable: true,
        }
    }

    #[test]
    fn test_label_sort_ignores_article_and_case() {
        let a = entry("The Zebra", None);
        let b = entry("apple", None);
        assert_eq!(SortMethod::LabelIgnoreThe.compare(&a, &b), Ordering::Greater);

        let c = entry("THE apple", None);
        assert_eq!(SortMethod::LabelIgnoreThe.compare(&b, &c), Ordering::Equal);
    }

    #[test]
    fn test_label_sort_keeps_words_starting_with_the() {
        // "Theory" is not an article
        assert_eq!(label_sort_key("Theory"), "theory");
        assert_eq!(label_sort_key("  The   Thing"), "thing");
    }

    #[test]
    fn test_year_sort() {
        let old = entry("b", Some(1999));
        let new = entry("a", Some(2024));
        assert_eq!(SortMethod::VideoYear.compare(&old, &new), Ordering::Less);
    }

    #[test]
    fn test_media_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MediaKind::Movie).unwrap(), "\"movie\"");
        assert_eq!(serde_json::to_string(&ContentType::Movies).unwrap(), "\"movies\"");
        assert_eq!(
            serde_json::to_string(&SortMethod::LabelIgnoreThe).unwrap(),
            "\"label_ignore_the\""
        );
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(entry("vazio", Some(9999)).to_string(), "vazio (9999)");
        assert_eq!(entry("Terror", None).to_string(), "Terror");
    }
}
