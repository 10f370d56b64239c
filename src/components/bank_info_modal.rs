//! Bank transfer details, shown over the donation modal.

use dioxus::prelude::*;
use raggaeirre_core::ModalKind;
use raggaeirre_ui::CloseButton;

use crate::context::use_site;

#[component]
pub fn BankInfoModal() -> Element {
    let site = use_site();

    if !site.donation().is_bank_info_open() {
        return rsx! {};
    }

    let rows: Vec<(&'static str, String)> = site
        .catalog()
        .bank
        .rows()
        .iter()
        .map(|(label, value)| (*label, value.to_string()))
        .collect();

    let backdrop = site.clone();
    let close = site.clone();

    rsx! {
        div {
            id: "bankInfoModal",
            class: "modal active",
            onclick: move |_| {
                backdrop.handle_backdrop_click(ModalKind::BankInfo);
            },
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| close.with_donation(|d| d.close_bank_info()) }

                h2 { "Bank Transfer Details" }
                p { "Use the details below to make a direct transfer." }

                div { class: "bank-details",
                    for (label, value) in rows {
                        BankRow { key: "{label}", label, value }
                    }
                }
            }
        }
    }
}

#[component]
fn BankRow(label: &'static str, value: String) -> Element {
    let site = use_site();
    let copied = value.clone();

    rsx! {
        div { class: "bank-row",
            span { class: "bank-label", "{label}" }
            strong { "{value}" }
            button {
                class: "copy-btn",
                "aria-label": "Copy {label}",
                onclick: move |_| {
                    site.copy_to_clipboard(&copied);
                },
                i { class: "fas fa-copy" }
            }
        }
    }
}
