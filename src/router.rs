//! Request router
//!
//! One invocation, one dispatch. The parameter string is decoded, mapped to a
//! [`Route`], validated against the catalog and only then forwarded to the
//! listing builder or the playback resolver, so a rejected request never
//! reaches the host.

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::host::Host;
use crate::listing;
use crate::models::Handle;
use crate::playback;
use crate::url::{self, PluginUrl};

/// Category label of the root listing unless configured otherwise
pub const DEFAULT_CATEGORY: &str = "Public Domain Movies";

/// Routing failures. Both abort the current request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Malformed, missing or out-of-range parameter value
    #[error("Invalid {param}: {message}")]
    Validation { param: &'static str, message: String },

    /// Unknown or missing `action`
    #[error("Invalid paramstring: {paramstring}!")]
    InvalidAction { paramstring: String },
}

/// What one invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Genre list
    Root,
    /// Videos of one genre
    Listing { genre_index: usize },
    /// Hand a stream to the player
    Play { video: String },
}

impl Route {
    /// Decode `paramstring` and validate it against a catalog of
    /// `genre_count` genres
    pub fn parse(paramstring: &str, genre_count: usize) -> Result<Self, RouteError> {
        let paramstring = paramstring.strip_prefix('?').unwrap_or(paramstring);
        let params = url::decode(paramstring);

        if params.is_empty() {
            return Ok(Route::Root);
        }

        match params.get("action") {
            Some("listing") => {
                let raw = params.get("genre_index").ok_or_else(|| RouteError::Validation {
                    param: "genre_index",
                    message: "missing".to_string(),
                })?;
                let genre_index = parse_genre_index(raw, genre_count)?;
                Ok(Route::Listing { genre_index })
            }
            Some("play") => {
                let video = params.get("video").ok_or_else(|| RouteError::Validation {
                    param: "video",
                    message: "missing".to_string(),
                })?;
                Ok(Route::Play {
                    video: video.to_string(),
                })
            }
            _ => Err(RouteError::InvalidAction {
                paramstring: paramstring.to_string(),
            }),
        }
    }
}

fn parse_genre_index(raw: &str, genre_count: usize) -> Result<usize, RouteError> {
    let value: i64 = raw.trim().parse().map_err(|_| RouteError::Validation {
        param: "genre_index",
        message: format!("'{}' is not an integer", raw),
    })?;

    usize::try_from(value)
        .ok()
        .filter(|&index| index < genre_count)
        .ok_or_else(|| RouteError::Validation {
            param: "genre_index",
            message: format!("{} is out of range 0..{}", value, genre_count),
        })
}

/// Dispatches invocations against one catalog
#[derive(Debug, Clone)]
pub struct Router {
    catalog: Catalog,
    plugin: PluginUrl,
    category: String,
}

impl Router {
    pub fn new(catalog: Catalog, plugin: PluginUrl) -> Self {
        Self {
            catalog,
            plugin,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Override the root listing's category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Parse `paramstring` and run the matching handler against `host`.
    /// Returns the route that was served.
    pub fn route(
        &self,
        host: &mut dyn Host,
        handle: Handle,
        paramstring: &str,
    ) -> Result<Route, RouteError> {
        debug!(handle, paramstring, "Routing");
        let route = Route::parse(paramstring, self.catalog.len())?;
        self.dispatch(host, handle, &route)?;
        Ok(route)
    }

    /// Run the handler for an already parsed route
    pub fn dispatch(
        &self,
        host: &mut dyn Host,
        handle: Handle,
        route: &Route,
    ) -> Result<(), RouteError> {
        match route {
            Route::Root => {
                info!("Listing genres");
                listing::list_genres(host, handle, &self.catalog, &self.plugin, &self.category);
            }
            Route::Listing { genre_index } => {
                let genre =
                    self.catalog
                        .genre(*genre_index)
                        .ok_or_else(|| RouteError::Validation {
                            param: "genre_index",
                            message: format!(
                                "{} is out of range 0..{}",
                                genre_index,
                                self.catalog.len()
                            ),
                        })?;
                info!(genre = %genre.name, "Listing videos");
                listing::list_videos(host, handle, genre, &self.plugin);
            }
            Route::Play { video } => {
                info!("Playing video");
                playback::play_video(host, handle, video);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_root() {
        assert_eq!(Route::parse("", 3), Ok(Route::Root));
        assert_eq!(Route::parse("?", 3), Ok(Route::Root));
    }

    #[test]
    fn test_parse_listing() {
        assert_eq!(
            Route::parse("action=listing&genre_index=2", 3),
            Ok(Route::Listing { genre_index: 2 })
        );
        assert_eq!(
            Route::parse("?action=listing&genre_index=0", 3),
            Ok(Route::Listing { genre_index: 0 })
        );
    }

    #[test]
    fn test_parse_listing_out_of_range() {
        for bad in ["-1", "3", "99999999999999999999"] {
            let err = Route::parse(&format!("action=listing&genre_index={}", bad), 3).unwrap_err();
            assert!(
                matches!(err, RouteError::Validation { param: "genre_index", .. }),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_listing_not_integer() {
        let err = Route::parse("action=listing&genre_index=two", 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid genre_index: 'two' is not an integer"
        );
    }

    #[test]
    fn test_parse_listing_missing_index() {
        let err = Route::parse("action=listing", 3).unwrap_err();
        assert!(matches!(err, RouteError::Validation { param: "genre_index", .. }));
    }

    #[test]
    fn test_parse_play() {
        assert_eq!(
            Route::parse("action=play&video=https%3A%2F%2Fcdn%2Fa.mp4", 3),
            Ok(Route::Play {
                video: "https://cdn/a.mp4".to_string()
            })
        );
    }

    #[test]
    fn test_parse_play_missing_video() {
        let err = Route::parse("action=play", 3).unwrap_err();
        assert!(matches!(err, RouteError::Validation { param: "video", .. }));
    }

    #[test]
    fn test_parse_bogus_action() {
        let err = Route::parse("action=bogus&x=1", 3).unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidAction {
                paramstring: "action=bogus&x=1".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid paramstring: action=bogus&x=1!");
    }

    #[test]
    fn test_parse_missing_action() {
        let err = Route::parse("genre_index=1", 3).unwrap_err();
        assert!(matches!(err, RouteError::InvalidAction { .. }));
    }

    #[test]
    fn test_action_is_case_sensitive() {
        let err = Route::parse("action=Listing&genre_index=1", 3).unwrap_err();
        assert!(matches!(err, RouteError::InvalidAction { .. }));
    }
}
