//! Inline modal messages and global toasts.
//!
//! ## Inline messages
//!
//! Each modal owns one [`MessageSlot`]. Showing a message replaces whatever
//! was there, so at most one is ever visible. Expiry is keyed by message id:
//! a timer started for an older message cannot remove a newer one.
//!
//! ## Toasts
//!
//! ```text
//! 0ms push (Entering) → 100ms Shown → 3000ms Leaving → 3300ms removed
//! ```
//!
//! The [`ToastTray`] only records phases; whoever owns the clock (the site
//! context, or a UI task) advances them.

use serde::{Deserialize, Serialize};

/// Severity of an inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    /// CSS class suffix (`message info`, `message error`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }

    /// Font Awesome icon name
    pub fn icon(&self) -> &'static str {
        match self {
            MessageKind::Success => "check-circle",
            MessageKind::Error => "exclamation-circle",
            MessageKind::Info => "info-circle",
        }
    }
}

/// Identifier handed out per shown message
pub type MessageId = u64;

/// An inline, auto-expiring status line inside a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub id: MessageId,
    pub text: String,
    pub kind: MessageKind,
}

/// Holds the single visible message of one modal
#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Option<TransientMessage>,
    next_id: MessageId,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible message and return the new message's id.
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(TransientMessage {
            id,
            text: text.into(),
            kind,
        });
        id
    }

    /// Remove the message if it is still the one with `id`.
    ///
    /// Returns whether anything was removed.
    pub fn expire(&mut self, id: MessageId) -> bool {
        if self.current.as_ref().is_some_and(|m| m.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&TransientMessage> {
        self.current.as_ref()
    }
}

/// Toast flavour; toasts are confirmations, so there is no info variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "exclamation-circle",
        }
    }
}

/// Where a toast is in its slide-in/slide-out life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached off-screen, about to slide in
    Entering,
    /// Fully visible
    Shown,
    /// Sliding out; removed after the exit transition
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    /// CSS classes for the current phase (`toast toast-success show`)
    pub fn class(&self) -> String {
        match self.phase {
            ToastPhase::Shown => format!("toast toast-{} show", self.kind.as_str()),
            ToastPhase::Entering | ToastPhase::Leaving => {
                format!("toast toast-{}", self.kind.as_str())
            }
        }
    }
}

/// Global top-corner toasts
#[derive(Debug, Default)]
pub struct ToastTray {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastTray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast in the `Entering` phase.
    pub fn push(&mut self, text: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            text: text.into(),
            kind,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Move a toast to `phase`. Unknown ids (already removed) are ignored.
    pub fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_replaces_old() {
        let mut slot = MessageSlot::new();
        let first = slot.show("Processing your donation...", MessageKind::Info);
        let second = slot.show("Thank you!", MessageKind::Success);

        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.kind, MessageKind::Success);
    }

    #[test]
    fn stale_expiry_keeps_newer_message() {
        let mut slot = MessageSlot::new();
        let first = slot.show("one", MessageKind::Info);
        let second = slot.show("two", MessageKind::Error);

        assert!(!slot.expire(first));
        assert_eq!(slot.current().unwrap().text, "two");

        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn message_icons() {
        assert_eq!(MessageKind::Success.icon(), "check-circle");
        assert_eq!(MessageKind::Error.icon(), "exclamation-circle");
        assert_eq!(MessageKind::Info.icon(), "info-circle");
    }

    #[test]
    fn toast_lifecycle() {
        let mut tray = ToastTray::new();
        let id = tray.push("Copied to clipboard!", ToastKind::Success);
        assert_eq!(tray.toasts()[0].class(), "toast toast-success");

        tray.set_phase(id, ToastPhase::Shown);
        assert_eq!(tray.toasts()[0].class(), "toast toast-success show");

        tray.set_phase(id, ToastPhase::Leaving);
        assert_eq!(tray.toasts()[0].phase, ToastPhase::Leaving);

        tray.remove(id);
        assert!(tray.is_empty());

        // Late timer for a removed toast is harmless
        tray.set_phase(id, ToastPhase::Shown);
        assert!(tray.is_empty());
    }
}
