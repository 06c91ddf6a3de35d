//! Navigation URL codec
//!
//! Every folder entry points back at the plugin itself with the next action
//! encoded in the query string, e.g.
//! `plugin://plugin.video.genre-reel/?action=listing&genre_index=0`.
//! Values are form-encoded (space as `+`), so a stream URL survives as a
//! single opaque parameter.

use std::collections::BTreeMap;

/// Decoded query parameters of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationParams(BTreeMap<String, String>);

impl NavigationParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Base address of the plugin, used to build self-referential URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginUrl {
    base: String,
}

impl PluginUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Build a URL re-invoking the plugin with `action` plus extra fields.
    /// Field order is preserved, `action` always comes first.
    pub fn encode(&self, action: &str, extra: &[(&str, &str)]) -> String {
        let mut pairs = Vec::with_capacity(extra.len() + 1);
        pairs.push(("action", action));
        pairs.extend_from_slice(extra);
        format!("{}?{}", self.base, encode_query(&pairs))
    }
}

/// Form-encode key/value pairs into a query string (no leading `?`)
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into a flat map.
///
/// Pieces without `=` or with an empty value are dropped, and a repeated key
/// keeps its last value. A leading `?` is tolerated.
pub fn decode(query: &str) -> NavigationParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = BTreeMap::new();

    for piece in query.split('&') {
        let Some((key, value)) = piece.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        params.insert(form_decode(key), form_decode(value));
    }

    NavigationParams(params)
}

fn form_encode(s: &str) -> String {
    // urlencoding emits %20 for spaces; a literal '%' becomes %25 so this
    // replacement cannot touch anything else
    urlencoding::encode(s).replace("%20", "+")
}

fn form_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
