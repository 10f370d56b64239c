//! Button Components
//!
//! The site's three button looks:
//! - Primary: orange call to action (Donate, Submit)
//! - Secondary: green, for the volunteer actions
//! - Outline: transparent with a border (Back, Cancel)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    /// CSS classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// button, submit or reset
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Extra CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         onclick: move |_| site.with_donation(|d| d.open()),
///         "Donate Now"
///     }
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| back(),
///         "Back"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Modal close control (`×`)
#[derive(Clone, PartialEq, Props)]
pub struct CloseButtonProps {
    pub onclick: EventHandler<()>,
    /// `close-modal` for modals, `lightbox-close` for the lightbox
    #[props(default = "close-modal".to_string())]
    pub class: String,
}

#[component]
pub fn CloseButton(props: CloseButtonProps) -> Element {
    rsx! {
        button {
            class: "{props.class}",
            "aria-label": "Close",
            onclick: move |_| props.onclick.call(()),
            "\u{00D7}"
        }
    }
}

pub(crate) fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
