//! Donation Modal Component
//!
//! Three steps (amount, payment, details). Choosing a bank transfer opens
//! the bank overlay instead of the details step.

use std::sync::Arc;

use dioxus::prelude::*;
use raggaeirre_core::{DonationStep, DonorDetails, ModalKind, SiteContext};
use raggaeirre_ui::{
    ordered_methods, AmountOptions, Button, ButtonVariant, CloseButton, Input, MessageBanner,
    PaymentOptions, TextArea,
};

use crate::context::use_site;

#[component]
pub fn DonationModal() -> Element {
    let site = use_site();

    let (open, step, message) = {
        let flow = site.donation();
        (flow.is_open(), flow.step(), flow.message().cloned())
    };
    if !open {
        return rsx! {};
    }

    let backdrop = site.clone();
    let close = site.clone();

    rsx! {
        div {
            id: "donationModal",
            class: "modal active",
            onclick: move |_| {
                backdrop.handle_backdrop_click(ModalKind::Donation);
            },
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| close.with_donation(|d| d.close()) }

                h2 { "Make a Donation" }
                StepIndicator { step }
                MessageBanner { message }

                {match step {
                    DonationStep::Amount => rsx! { AmountStep {} },
                    DonationStep::Payment => rsx! { PaymentStep {} },
                    DonationStep::Details => rsx! { DetailsStep {} },
                }}
            }
        }
    }
}

#[component]
fn StepIndicator(step: DonationStep) -> Element {
    let reached = match step {
        DonationStep::Amount => 1,
        DonationStep::Payment => 2,
        DonationStep::Details => 3,
    };

    rsx! {
        div { class: "step-indicator", "aria-label": "Step {reached} of 3",
            for n in 1..=3 {
                span { key: "{n}", class: if n <= reached { "done" } else { "" } }
            }
        }
    }
}

#[component]
fn AmountStep() -> Element {
    let site = use_site();

    let (presets, selected, custom) = {
        let flow = site.donation();
        (
            flow.presets().to_vec(),
            flow.selected_preset(),
            flow.session().custom_amount.clone(),
        )
    };

    let on_preset = site.clone();
    let on_custom = site.clone();
    let on_next = site.clone();

    rsx! {
        div { id: "amountStep", class: "donation-step",
            h3 { "Choose an amount" }
            AmountOptions {
                presets,
                selected,
                on_select: move |amount| on_preset.with_donation(|d| d.select_amount(amount)),
            }
            Input {
                id: "customAmount".to_string(),
                label: "Or enter a custom amount (KES)".to_string(),
                input_type: "number".to_string(),
                placeholder: "Enter amount".to_string(),
                value: custom,
                oninput: move |text: String| on_custom.with_donation(|d| d.set_custom_amount(text)),
            }
            div { class: "modal-actions",
                span {}
                Button {
                    onclick: move |_| {
                        let _ = on_next.with_donation(|d| d.proceed_to_payment());
                    },
                    "Continue"
                }
            }
        }
    }
}

#[component]
fn PaymentStep() -> Element {
    let site = use_site();

    let (label, checked) = {
        let flow = site.donation();
        (
            flow.session().amount_label.clone().unwrap_or_default(),
            flow.session().payment_method,
        )
    };
    let methods = ordered_methods(&site.catalog().donation.payment_methods);

    let on_method = site.clone();
    let on_back = site.clone();
    let on_next = site.clone();

    rsx! {
        div { id: "paymentStep", class: "donation-step",
            div { id: "selectedAmountDisplay", class: "donation-summary", "{label}" }
            h3 { "Choose a payment method" }
            PaymentOptions {
                methods,
                checked,
                on_select: move |method| on_method.with_donation(|d| d.select_payment_method(method)),
            }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let _ = on_back.with_donation(|d| d.go_back_to_amount());
                    },
                    "Back"
                }
                Button {
                    onclick: move |_| {
                        let _ = on_next.with_donation(|d| d.proceed_to_details());
                    },
                    "Continue"
                }
            }
        }
    }
}

/// Donor form, bound to the session so going back keeps what was typed
#[component]
fn DetailsStep() -> Element {
    let site = use_site();
    let submitting = use_signal(|| false);

    let (summary, phone_field, donor) = {
        let flow = site.donation();
        (
            flow.session().payment_summary.clone().unwrap_or_default(),
            flow.session().phone_field,
            flow.session().donor.clone(),
        )
    };

    let edit = |apply: fn(&mut DonorDetails, String)| {
        let site = site.clone();
        move |value: String| site.with_donation(|flow| apply(flow.donor_mut(), value))
    };

    let on_back = site.clone();
    let on_submit = site.clone();

    rsx! {
        div { id: "detailsStep", class: "donation-step",
            div { id: "paymentSummary", class: "donation-summary", "{summary}" }
            Input {
                id: "donorName".to_string(),
                label: "Full Name".to_string(),
                required: true,
                value: donor.name.clone(),
                oninput: edit(|d, v| d.name = v),
            }
            Input {
                id: "donorEmail".to_string(),
                label: "Email Address".to_string(),
                input_type: "email".to_string(),
                required: true,
                value: donor.email.clone(),
                oninput: edit(|d, v| d.email = v),
            }
            if phone_field.visible {
                Input {
                    id: "donorPhone".to_string(),
                    label: "M-Pesa Phone Number".to_string(),
                    input_type: "tel".to_string(),
                    placeholder: "0712345678".to_string(),
                    required: phone_field.required,
                    value: donor.phone.clone(),
                    oninput: edit(|d, v| d.phone = v),
                }
            }
            TextArea {
                id: "donorMessage".to_string(),
                label: "Message (optional)".to_string(),
                rows: 3,
                value: donor.message.clone(),
                oninput: edit(|d, v| d.message = v),
            }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: submitting(),
                    onclick: move |_| {
                        let _ = on_back.with_donation(|d| d.go_back_to_payment());
                    },
                    "Back"
                }
                Button {
                    disabled: submitting(),
                    onclick: move |_| {
                        let donor = on_submit.donation().session().donor.clone();
                        submit(on_submit.clone(), donor, submitting);
                    },
                    if submitting() { "Processing..." } else { "Complete Donation" }
                }
            }
        }
    }
}

fn submit(site: Arc<SiteContext>, donor: DonorDetails, mut submitting: Signal<bool>) {
    submitting.set(true);
    spawn(async move {
        let result = site.submit_donation(donor).await;
        // the form may have been unmounted by auto-close
        if let Err(e) = submitting.try_write().map(|mut s| *s = false) {
            tracing::trace!(error = ?e, "Donation form gone before submission finished");
        }
        if let Err(e) = result {
            tracing::debug!(error = %e, "Donation not submitted");
        }
    });
}
