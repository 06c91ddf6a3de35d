//! genre-reel - Genre-organized video catalog plugin
//!
//! Presents a fixed catalog of videos, grouped by genre, as virtual folders
//! inside a media-center host, and hands the selected stream to its player.
//!
//! # Modules
//!
//! - `models` - Catalog records, listing entries, playable items
//! - `catalog` - Built-in and file-based catalogs
//! - `url` - Navigation URL codec
//! - `router` - Per-invocation dispatch
//! - `listing` - Genre and video folders
//! - `playback` - Stream hand-off
//! - `host` - Host interface and the recording host
//! - `config` - Config file and addon path
//! - `cli` - Invocation arguments and output

pub mod models;
pub mod catalog;
pub mod url;
pub mod host;
pub mod listing;
pub mod playback;
pub mod router;
pub mod config;
pub mod cli;

// Re-export commonly used types
pub use models::{
    Art, ContentType, Genre, Handle, ListEntry, MediaKind, Movie, PlayableItem, SortMethod,
    VideoInfo,
};

pub use catalog::{Catalog, CatalogError, ImageDirs};
pub use host::{Host, HostEvent, RecordingHost};
pub use router::{Route, RouteError, Router};
pub use url::{NavigationParams, PluginUrl};
