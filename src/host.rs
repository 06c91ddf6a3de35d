//! Host interface
//!
//! The media center owns the UI and the player. The plugin only talks to it
//! through [`Host`], in a fixed order: `begin_listing`, any number of
//! `add_entry`, `set_sort_hints`, `end_listing`; or a single
//! `resolve_playable` for playback.

use serde::Serialize;

use crate::models::{ContentType, Handle, ListEntry, PlayableItem, SortMethod};

/// Capabilities the host exposes to the plugin
pub trait Host {
    /// Open a listing: category label shown by skins, content type for views
    fn begin_listing(&mut self, handle: Handle, category: &str, content: ContentType);

    /// Append one entry; `is_folder` entries open a sub-listing at `url`
    fn add_entry(&mut self, handle: Handle, url: &str, entry: &ListEntry, is_folder: bool);

    fn set_sort_hints(&mut self, handle: Handle, hints: &[SortMethod]);

    /// Finish the listing. Without it the host keeps showing a spinner.
    fn end_listing(&mut self, handle: Handle);

    /// Hand a resolved stream to the player
    fn resolve_playable(&mut self, handle: Handle, success: bool, item: &PlayableItem);
}

/// One recorded host call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostEvent {
    BeginListing {
        handle: Handle,
        category: String,
        content: ContentType,
    },
    AddEntry {
        handle: Handle,
        url: String,
        entry: ListEntry,
        is_folder: bool,
    },
    SetSortHints {
        handle: Handle,
        hints: Vec<SortMethod>,
    },
    EndListing {
        handle: Handle,
    },
    ResolvePlayable {
        handle: Handle,
        success: bool,
        item: PlayableItem,
    },
}

/// A folder row as the host would display it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub url: String,
    pub entry: ListEntry,
    pub is_folder: bool,
}

/// In-process host that records every call in order
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<HostEvent> {
        self.events
    }

    /// Entries in emission order
    pub fn entries(&self) -> Vec<RenderedEntry> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::AddEntry {
                    url,
                    entry,
                    is_folder,
                    ..
                } => Some(RenderedEntry {
                    url: url.clone(),
                    entry: entry.clone(),
                    is_folder: *is_folder,
                }),
                _ => None,
            })
            .collect()
    }

    /// Category label of the last opened listing
    pub fn category(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            HostEvent::BeginListing { category, .. } => Some(category.as_str()),
            _ => None,
        })
    }

    pub fn sort_hints(&self) -> &[SortMethod] {
        self.events
            .iter()
            .rev()
            .find_map(|event| match event {
                HostEvent::SetSortHints { hints, .. } => Some(hints.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Whether the listing was properly closed
    pub fn is_finished(&self) -> bool {
        matches!(self.events.last(), Some(HostEvent::EndListing { .. }))
    }

    pub fn resolved(&self) -> Option<(bool, &PlayableItem)> {
        self.events.iter().find_map(|event| match event {
            HostEvent::ResolvePlayable { success, item, .. } => Some((*success, item)),
            _ => None,
        })
    }

    /// Entries in the order a host shows them by default: sorted by the
    /// first sort hint, stable for ties
    pub fn rendered(&self) -> Vec<RenderedEntry> {
        let mut entries = self.entries();
        if let Some(method) = self.sort_hints().first() {
            entries.sort_by(|a, b| method.compare(&a.entry, &b.entry));
        }
        entries
    }
}

impl Host for RecordingHost {
    fn begin_listing(&mut self, handle: Handle, category: &str, content: ContentType) {
        self.events.push(HostEvent::BeginListing {
            handle,
            category: category.to_string(),
            content,
        });
    }

    fn add_entry(&mut self, handle: Handle, url: &str, entry: &ListEntry, is_folder: bool) {
        self.events.push(HostEvent::AddEntry {
            handle,
            url: url.to_string(),
            entry: entry.clone(),
            is_folder,
        });
    }

    fn set_sort_hints(&mut self, handle: Handle, hints: &[SortMethod]) {
        self.events.push(HostEvent::SetSortHints {
            handle,
            hints: hints.to_vec(),
        });
    }

    fn end_listing(&mut self, handle: Handle) {
        self.events.push(HostEvent::EndListing { handle });
    }

    fn resolve_playable(&mut self, handle: Handle, success: bool, item: &PlayableItem) {
        self.events.push(HostEvent::ResolvePlayable {
            handle,
            success,
            item: item.clone(),
        });
    }
}
