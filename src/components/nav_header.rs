//! Navigation Header Component
//!
//! Fixed header with the foundation's name, section links and the two calls
//! to action. Switches to its translucent style once the page scrolls, and
//! collapses the links behind a toggle on narrow windows.

use dioxus::prelude::*;
use raggaeirre_core::HeaderState;

use crate::components::scroll_to_section;
use crate::context::use_site;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Scroll-derived header state
    pub header: HeaderState,
    /// Id of the section currently in view
    #[props(default)]
    pub active: Option<String>,
}

/// Navigation Header component
///
/// - Left: logo and name
/// - Center: one link per catalog navigation entry, current one highlighted
/// - Right: Volunteer and Donate buttons
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let site = use_site();
    let mut menu_open = use_signal(|| false);

    let links: Vec<(String, String)> = site
        .catalog()
        .navigation
        .iter()
        .map(|link| (link.section_id().to_string(), link.text.clone()))
        .collect();
    let style = props.header.header_style();

    let volunteer = site.clone();
    let donate = site.clone();

    rsx! {
        header { class: "header", style: "{style}",
            div { class: "container",
                a {
                    class: "logo",
                    href: "#home",
                    onclick: move |e| {
                        e.prevent_default();
                        scroll_to_section("home");
                    },
                    i { class: "fas fa-hands-helping" }
                    span { "Raggaeirre Support Foundation" }
                }

                button {
                    class: "menu-toggle",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.toggle(),
                    i { class: if menu_open() { "fas fa-times" } else { "fas fa-bars" } }
                }

                ul { class: if menu_open() { "nav open" } else { "nav" },
                    for (id, text) in links {
                        {
                            let is_active = props.active.as_deref() == Some(id.as_str());
                            let target = id.clone();
                            rsx! {
                                li { key: "{id}",
                                    a {
                                        class: if is_active { "nav-link active" } else { "nav-link" },
                                        href: "#{id}",
                                        onclick: move |e| {
                                            e.prevent_default();
                                            menu_open.set(false);
                                            scroll_to_section(&target);
                                        },
                                        "{text}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| volunteer.with_volunteer(|v| v.open()),
                        "Volunteer"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| donate.with_donation(|d| d.open()),
                        "Donate Now"
                    }
                }
            }
        }
    }
}
