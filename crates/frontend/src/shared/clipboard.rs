//! Copy text to the system clipboard via the async Clipboard API.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copies `text`, then reports whether the browser accepted it.
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let copied = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                JsFuture::from(clipboard.write_text(&text)).await.is_ok()
            }
            None => false,
        };
        on_done(copied);
    });
}
