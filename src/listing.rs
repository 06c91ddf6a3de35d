//! Listing builder
//!
//! Turns catalog records into host entries. Emission order always follows
//! the catalog; sort hints only tell the host how it may re-order the view.

use tracing::debug;

use crate::catalog::Catalog;
use crate::host::Host;
use crate::models::{
    Art, ContentType, Genre, Handle, ListEntry, MediaKind, Movie, SortMethod, VideoInfo,
};
use crate::url::PluginUrl;

/// Sort options offered on the genre folder
pub const GENRE_SORT_HINTS: &[SortMethod] = &[SortMethod::LabelIgnoreThe];

/// Sort options offered on a genre's video folder
pub const VIDEO_SORT_HINTS: &[SortMethod] = &[SortMethod::LabelIgnoreThe, SortMethod::VideoYear];

/// Folder entry for a genre
pub fn genre_entry(genre: &Genre) -> ListEntry {
    ListEntry {
        label: genre.name.clone(),
        art: Art {
            icon: Some(genre.icon.clone()),
            fanart: Some(genre.fanart.clone()),
            poster: None,
        },
        info: VideoInfo {
            media_type: MediaKind::Video,
            title: genre.name.clone(),
            genres: vec![genre.name.clone()],
            plot: None,
            year: None,
        },
        playable: false,
    }
}

/// Playable entry for a movie, tagged with its parent genre
pub fn movie_entry(genre: &Genre, movie: &Movie) -> ListEntry {
    ListEntry {
        label: movie.title.clone(),
        art: Art {
            poster: Some(movie.poster.clone()),
            ..Art::default()
        },
        info: VideoInfo {
            media_type: MediaKind::Movie,
            title: movie.title.clone(),
            genres: vec![genre.name.clone()],
            plot: Some(movie.plot.clone()),
            year: Some(movie.year),
        },
        playable: true,
    }
}

/// Root folder: one sub-folder per genre
pub fn list_genres(
    host: &mut dyn Host,
    handle: Handle,
    catalog: &Catalog,
    plugin: &PluginUrl,
    category: &str,
) {
    host.begin_listing(handle, category, ContentType::Movies);

    for (index, genre) in catalog.genres().iter().enumerate() {
        let index = index.to_string();
        let url = plugin.encode("listing", &[("genre_index", index.as_str())]);
        host.add_entry(handle, &url, &genre_entry(genre), true);
    }

    host.set_sort_hints(handle, GENRE_SORT_HINTS);
    host.end_listing(handle);
    debug!(genres = catalog.len(), "Listed genres");
}

/// Video folder for one genre
pub fn list_videos(host: &mut dyn Host, handle: Handle, genre: &Genre, plugin: &PluginUrl) {
    host.begin_listing(handle, &genre.name, ContentType::Movies);

    for movie in &genre.movies {
        let url = plugin.encode("play", &[("video", movie.url.as_str())]);
        host.add_entry(handle, &url, &movie_entry(genre, movie), false);
    }

    host.set_sort_hints(handle, VIDEO_SORT_HINTS);
    host.end_listing(handle);
    debug!(genre = %genre.name, videos = genre.movies.len(), "Listed videos");
}
