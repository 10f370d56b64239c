//! Keyboard and backdrop routing.
//!
//! Handlers are registered once for the whole page and consult which
//! overlays are active before doing anything, so events aimed at a closed
//! modal are no-ops.

use crate::types::ModalKind;

/// Keys the site reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Which overlays are currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveModals {
    pub media: bool,
    pub donation: bool,
    pub volunteer: bool,
    pub bank_info: bool,
}

impl ActiveModals {
    pub fn is_active(&self, modal: ModalKind) -> bool {
        match modal {
            ModalKind::Media => self.media,
            ModalKind::Donation => self.donation,
            ModalKind::Volunteer => self.volunteer,
            ModalKind::BankInfo => self.bank_info,
        }
    }

    pub fn any(&self) -> bool {
        self.media || self.donation || self.volunteer || self.bank_info
    }
}

/// What a routed event asks the site to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutedAction {
    Close(ModalKind),
    PreviousMedia,
    NextMedia,
}

/// Actions for a key press given the active overlays.
///
/// Escape closes every active modal, except that an open bank overlay is
/// closed on its own and the donation modal under it stays.
pub fn route_key(key: Key, active: ActiveModals) -> Vec<RoutedAction> {
    match key {
        Key::Escape if active.bank_info => vec![RoutedAction::Close(ModalKind::BankInfo)],
        Key::Escape => [ModalKind::Media, ModalKind::Donation, ModalKind::Volunteer]
            .into_iter()
            .filter(|m| active.is_active(*m))
            .map(RoutedAction::Close)
            .collect(),
        Key::ArrowLeft if active.media => vec![RoutedAction::PreviousMedia],
        Key::ArrowRight if active.media => vec![RoutedAction::NextMedia],
        _ => Vec::new(),
    }
}

/// A click that landed on `modal`'s backdrop (not its content) closes it.
pub fn route_backdrop_click(modal: ModalKind, active: ActiveModals) -> Option<RoutedAction> {
    active
        .is_active(modal)
        .then_some(RoutedAction::Close(modal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_noops_when_nothing_is_open() {
        let none = ActiveModals::default();
        for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight, Key::Other] {
            assert!(route_key(key, none).is_empty());
        }
        assert_eq!(route_backdrop_click(ModalKind::Donation, none), None);
    }

    #[test]
    fn arrows_only_drive_the_lightbox() {
        let donation = ActiveModals {
            donation: true,
            ..Default::default()
        };
        assert!(route_key(Key::ArrowRight, donation).is_empty());

        let media = ActiveModals {
            media: true,
            ..Default::default()
        };
        assert_eq!(route_key(Key::ArrowLeft, media), vec![RoutedAction::PreviousMedia]);
        assert_eq!(route_key(Key::ArrowRight, media), vec![RoutedAction::NextMedia]);
    }

    #[test]
    fn escape_closes_bank_overlay_first() {
        let stacked = ActiveModals {
            donation: true,
            bank_info: true,
            ..Default::default()
        };
        assert_eq!(
            route_key(Key::Escape, stacked),
            vec![RoutedAction::Close(ModalKind::BankInfo)]
        );

        let donation = ActiveModals {
            donation: true,
            ..Default::default()
        };
        assert_eq!(
            route_key(Key::Escape, donation),
            vec![RoutedAction::Close(ModalKind::Donation)]
        );
    }

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("Right"), Key::ArrowRight);
        assert_eq!(Key::from_name("Tab"), Key::Other);
    }
}
