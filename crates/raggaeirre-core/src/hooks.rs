//! Seams between the flows and whatever renders them.
//!
//! Flows keep their own visibility and selection flags; the few effects that
//! live outside a modal (page scrolling, a playing video, the system
//! clipboard) go through these traits, injected at construction.

use std::sync::Arc;

use parking_lot::Mutex;

/// Page-level side effects a modal needs
pub trait PageHooks: Send + Sync {
    /// Stop the page behind an open modal from scrolling (or allow it again).
    fn set_scroll_locked(&self, locked: bool);

    /// Pause any playing lightbox video and rewind it to the start.
    fn stop_media(&self) {}
}

/// Hooks for headless use (CLI, tests that do not care)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPage;

impl PageHooks for NoopPage {
    fn set_scroll_locked(&self, _locked: bool) {}
}

/// Text clipboard
pub trait Clipboard: Send + Sync {
    /// Put `text` on the clipboard; the error string is only logged.
    fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Clipboard that always fails, for environments without one
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&self, _text: &str) -> Result<(), String> {
        Err("no clipboard available".to_string())
    }
}

/// A page effect, as recorded by [`RecordingPage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    ScrollLocked,
    ScrollUnlocked,
    MediaStopped,
}

/// Records every page effect; also reports the current scroll lock.
#[derive(Debug, Default, Clone)]
pub struct RecordingPage {
    events: Arc<Mutex<Vec<PageEvent>>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().clone()
    }

    /// Whether the last scroll effect was a lock
    pub fn scroll_locked(&self) -> bool {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|e| match e {
                PageEvent::ScrollLocked => Some(true),
                PageEvent::ScrollUnlocked => Some(false),
                PageEvent::MediaStopped => None,
            })
            .unwrap_or(false)
    }
}

impl PageHooks for RecordingPage {
    fn set_scroll_locked(&self, locked: bool) {
        self.events.lock().push(if locked {
            PageEvent::ScrollLocked
        } else {
            PageEvent::ScrollUnlocked
        });
    }

    fn stop_media(&self) {
        self.events.lock().push(PageEvent::MediaStopped);
    }
}

/// In-memory clipboard
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), String> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_page_tracks_last_lock() {
        let page = RecordingPage::new();
        assert!(!page.scroll_locked());

        page.set_scroll_locked(true);
        page.stop_media();
        assert!(page.scroll_locked());

        page.set_scroll_locked(false);
        assert!(!page.scroll_locked());
        assert_eq!(
            page.events(),
            vec![
                PageEvent::ScrollLocked,
                PageEvent::MediaStopped,
                PageEvent::ScrollUnlocked
            ]
        );
    }

    #[test]
    fn memory_clipboard_keeps_text() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("1234567890").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("1234567890"));
        assert!(NoClipboard.write_text("x").is_err());
    }
}
