//! Fire-and-forget media playback.

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;

/// Start playback without waiting on it. Rejections are logged and dropped.
pub fn play_quietly(media: &HtmlMediaElement) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::debug!(error = ?e, "playback did not start");
            }
        }),
        Err(e) => tracing::debug!(error = ?e, "play() threw"),
    }
}

/// Pause and rewind to the start.
pub fn stop_and_rewind(media: &HtmlMediaElement) {
    if let Err(e) = media.pause() {
        tracing::debug!(error = ?e, "pause() threw");
    }
    media.set_current_time(0.0);
}
