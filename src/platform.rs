//! Desktop implementations of the page hooks and clipboard.

use raggaeirre_core::{Clipboard, PageHooks};

/// Drives the webview document directly
#[derive(Debug, Default)]
pub struct WebviewPage;

impl WebviewPage {
    pub fn new() -> Self {
        Self
    }
}

impl PageHooks for WebviewPage {
    fn set_scroll_locked(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "auto" };
        dioxus::document::eval(&format!("document.body.style.overflow = '{}';", overflow));
    }

    fn stop_media(&self) {
        dioxus::document::eval(
            "document.querySelectorAll('#mediaModal video').forEach(v => { v.pause(); v.currentTime = 0; });",
        );
    }
}

/// System clipboard through `arboard`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text.to_owned()).map_err(|e| e.to_string())
    }
}
