//! Navigation intents resolved against the browser location.

/// Follow a redirect produced by a successful form submission.
pub fn go_to(target: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(target);
    }
}
