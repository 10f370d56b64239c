//! Inline modal messages and the global toast stack

use dioxus::prelude::*;
use raggaeirre_core::{Toast, TransientMessage};

/// The one message a modal shows above its form, if any
#[component]
pub fn MessageBanner(message: Option<TransientMessage>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    let kind = message.kind.as_str();
    let icon = message.kind.icon();

    rsx! {
        div {
            key: "{message.id}",
            class: "message {kind}",
            role: if kind == "error" { "alert" } else { "status" },
            i { class: "fas fa-{icon}" }
            span { "{message.text}" }
        }
    }
}

/// Toasts in the top-right corner, newest last
#[component]
pub fn ToastStack(toasts: Vec<Toast>) -> Element {
    rsx! {
        div { class: "toast-stack",
            for toast in toasts.iter() {
                {
                    let class = toast.class();
                    let icon = toast.kind.icon();
                    rsx! {
                        div { key: "{toast.id}", class: "{class}",
                            i { class: "fas fa-{icon}" }
                            span { "{toast.text}" }
                        }
                    }
                }
            }
        }
    }
}
