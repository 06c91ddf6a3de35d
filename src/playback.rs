//! Playback resolver

use tracing::debug;

use crate::host::Host;
use crate::models::{Handle, PlayableItem};

/// Hand `url` to the host player as-is. Reachability and format are the
/// player's problem.
pub fn play_video(host: &mut dyn Host, handle: Handle, url: &str) {
    let item = PlayableItem {
        path: url.to_string(),
        offscreen: true,
    };
    host.resolve_playable(handle, true, &item);
    debug!(url, "Resolved playable item");
}
