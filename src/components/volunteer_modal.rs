//! Volunteer Application Modal
//!
//! The form is stored in the volunteer flow itself, so a failed submission
//! keeps what was typed and a fresh open starts blank.

use dioxus::prelude::*;
use raggaeirre_core::{ModalKind, VolunteerApplication};
use raggaeirre_ui::{Button, CloseButton, Input, MessageBanner, Select, TextArea};

use crate::context::use_site;

const INTERESTS: [(&str, &str); 5] = [
    ("teaching", "Teaching & Tutoring"),
    ("mentoring", "Mentoring"),
    ("fundraising", "Fundraising"),
    ("events", "Event Planning"),
    ("admin", "Administrative Support"),
];

const AVAILABILITY: [(&str, &str); 4] = [
    ("weekdays", "Weekdays"),
    ("weekends", "Weekends"),
    ("evenings", "Evenings"),
    ("flexible", "Flexible"),
];

fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

#[component]
pub fn VolunteerModal() -> Element {
    let site = use_site();
    let mut submitting = use_signal(|| false);

    let (open, form, message) = {
        let flow = site.volunteer();
        (flow.is_open(), flow.form().clone(), flow.message().cloned())
    };
    if !open {
        return rsx! {};
    }

    // every field writes straight into the flow's form
    let edit = |apply: fn(&mut VolunteerApplication, String)| {
        let site = site.clone();
        move |value: String| site.with_volunteer(|flow| apply(flow.form_mut(), value))
    };

    let backdrop = site.clone();
    let close = site.clone();
    let on_submit = site.clone();

    rsx! {
        div {
            id: "volunteerModal",
            class: "modal active",
            onclick: move |_| {
                backdrop.handle_backdrop_click(ModalKind::Volunteer);
            },
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| close.with_volunteer(|v| v.close()) }

                h2 { "Become a Volunteer" }
                p { "Share your time and skills with the children we support." }
                MessageBanner { message }

                Input {
                    id: "volunteerName".to_string(),
                    label: "Full Name".to_string(),
                    required: true,
                    value: form.name.clone(),
                    oninput: edit(|f, v| f.name = v),
                }
                Input {
                    id: "volunteerEmail".to_string(),
                    label: "Email Address".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                    value: form.email.clone(),
                    oninput: edit(|f, v| f.email = v),
                }
                Input {
                    id: "volunteerPhone".to_string(),
                    label: "Phone Number".to_string(),
                    input_type: "tel".to_string(),
                    value: form.phone.clone(),
                    oninput: edit(|f, v| f.phone = v),
                }
                Select {
                    id: "volunteerInterest".to_string(),
                    label: "Area of Interest".to_string(),
                    value: form.interest.clone(),
                    options: options(&INTERESTS),
                    onchange: edit(|f, v| f.interest = v),
                }
                Select {
                    id: "volunteerAvailability".to_string(),
                    label: "Availability".to_string(),
                    placeholder: "Select availability".to_string(),
                    value: form.availability.clone(),
                    options: options(&AVAILABILITY),
                    onchange: edit(|f, v| f.availability = v),
                }
                TextArea {
                    id: "volunteerMessage".to_string(),
                    label: "Why would you like to volunteer?".to_string(),
                    value: form.message.clone(),
                    oninput: edit(|f, v| f.message = v),
                }

                div { class: "modal-actions",
                    span {}
                    Button {
                        disabled: submitting(),
                        onclick: move |_| {
                            let site = on_submit.clone();
                            let application = site.volunteer().form().clone();
                            submitting.set(true);
                            spawn(async move {
                                let result = site.submit_application(application).await;
                                submitting.set(false);
                                if let Err(e) = result {
                                    tracing::debug!(error = %e, "Application not submitted");
                                }
                            });
                        },
                        if submitting() { "Submitting..." } else { "Submit Application" }
                    }
                }
            }
        }
    }
}
