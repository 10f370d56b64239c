//! Landing page: the foundation's one-page site.
//!
//! Sections are static markup; everything interactive comes from the site
//! context. A short poll reads the scroll position back from the webview to
//! drive the header style, nav highlighting, the scroll-to-top button, the
//! impact counters and lazy images.

use std::time::Duration;

use dioxus::prelude::*;
use raggaeirre_core::effects::active_section;
use raggaeirre_core::{HeaderState, SectionBounds};
use raggaeirre_ui::{Button, ButtonVariant, ToastStack};
use serde::Deserialize;

use crate::components::{
    scroll_to_section, use_lazy_loader_provider, BankInfoModal, DonationModal, ImpactCounters,
    LazyImage, Lightbox, MediaGalleryGrid, NavHeader, ScrollToTop, VolunteerModal,
};
use crate::context::use_site;

const SCROLL_POLL: Duration = Duration::from_millis(100);

/// Reads back what the scroll handlers need in one round trip
const PAGE_SNAPSHOT: &str = r#"
const header = document.querySelector('.header');
const sections = Array.from(document.querySelectorAll('section[id]')).map(s => ({
    id: s.id,
    top: s.offsetTop,
    height: s.offsetHeight,
}));
const inView = el => {
    const r = el.getBoundingClientRect();
    return r.top < window.innerHeight + 50 && r.bottom > -50;
};
const lazyVisible = Array.from(document.querySelectorAll('img.lazy:not(.loaded)'))
    .filter(inView)
    .map(img => img.id);
const stats = document.querySelector('.stats');
return {
    scrollY: window.scrollY,
    headerHeight: header ? header.offsetHeight : 0,
    sections,
    lazyVisible,
    statsVisible: stats ? inView(stats) : false,
};
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageSnapshot {
    scroll_y: f64,
    header_height: f64,
    sections: Vec<SectionBox>,
    lazy_visible: Vec<String>,
    stats_visible: bool,
}

#[derive(Debug, Deserialize)]
struct SectionBox {
    id: String,
    top: f64,
    height: f64,
}

impl PageSnapshot {
    fn active_section(&self) -> Option<String> {
        let sections: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id.clone(),
                top: s.top,
                height: s.height,
            })
            .collect();
        active_section(&sections, self.scroll_y, self.header_height).map(str::to_string)
    }
}

#[component]
pub fn Landing() -> Element {
    let site = use_site();
    let mut header = use_signal(HeaderState::default);
    let mut active = use_signal(|| Some("home".to_string()));
    let mut stats_visible = use_signal(|| false);
    let mut lazy = use_lazy_loader_provider();

    use_future(move || async move {
        loop {
            match document::eval(PAGE_SNAPSHOT).join::<PageSnapshot>().await {
                Ok(snapshot) => {
                    let next = HeaderState::from_scroll(snapshot.scroll_y);
                    if *header.peek() != next {
                        header.set(next);
                    }

                    let current = snapshot.active_section();
                    if *active.peek() != current {
                        active.set(current);
                    }

                    if snapshot.stats_visible && !*stats_visible.peek() {
                        stats_visible.set(true);
                    }

                    if !snapshot.lazy_visible.is_empty() {
                        let revealed = lazy.write().reveal(&snapshot.lazy_visible);
                        if revealed > 0 {
                            tracing::trace!(revealed, "Lazy images loaded");
                        }
                    }
                }
                Err(e) => tracing::trace!(error = ?e, "Page snapshot unavailable"),
            }
            tokio::time::sleep(SCROLL_POLL).await;
        }
    });

    let toasts = site.toasts().toasts().to_vec();
    let header_state = header();

    rsx! {
        a { class: "skip-link", href: "#main", "Skip to main content" }

        NavHeader { header: header_state, active: active() }

        main { id: "main",
            Hero {}
            About {}
            section { class: "impact",
                div { class: "container",
                    h2 { class: "section-title", "Our Impact in Numbers" }
                    ImpactCounters { visible: stats_visible }
                }
            }
            Programs {}
            Testimonials {}
            Stories {}
            Contact {}
        }

        Footer {}

        ScrollToTop { visible: header_state.scroll_to_top_visible }
        DonationModal {}
        BankInfoModal {}
        VolunteerModal {}
        Lightbox {}
        ToastStack { toasts }
    }
}

#[component]
fn Hero() -> Element {
    let site = use_site();
    let donate = site.clone();
    let volunteer = site.clone();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container",
                h1 { "Every child deserves a chance to learn" }
                p {
                    "The Raggaeirre Support Foundation keeps children in Machakos County "
                    "in school with fees, uniforms, mentoring and a safe place to study."
                }
                div { class: "hero-actions",
                    Button {
                        onclick: move |_| donate.with_donation(|d| d.open()),
                        i { class: "fas fa-heart" }
                        "Donate Now"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| volunteer.with_volunteer(|v| v.open()),
                        i { class: "fas fa-hands-helping" }
                        "Become a Volunteer"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| scroll_to_section("programs"),
                        "Our Programs"
                    }
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { id: "about",
            div { class: "container about-grid",
                div {
                    h2 { "About Us" }
                    p {
                        "Founded in Machakos, Kenya, we work with families, schools and local "
                        "leaders so that poverty never decides whether a child finishes school."
                    }
                    p {
                        "Our volunteers tutor, mentor and organise community events, while "
                        "donations cover school fees, books and meals."
                    }
                }
                LazyImage {
                    id: "aboutImage".to_string(),
                    src: "images/classroom-learning.jpg".to_string(),
                    alt: "Children learning in a classroom".to_string(),
                }
            }
        }
    }
}

const PROGRAMS: [(&str, &str, &str); 3] = [
    (
        "fas fa-graduation-cap",
        "Education Sponsorship",
        "School fees, uniforms and learning materials for children from low-income families.",
    ),
    (
        "fas fa-user-friends",
        "Mentorship",
        "One-to-one guidance from volunteers who help students set and reach their goals.",
    ),
    (
        "fas fa-seedling",
        "Community Outreach",
        "Workshops for parents and events that bring the whole community behind its children.",
    ),
];

#[component]
fn Programs() -> Element {
    rsx! {
        section { id: "programs",
            div { class: "container",
                h2 { class: "section-title", "Our Programs" }
                p { class: "section-subtitle", "How your support reaches the children" }
                div { class: "card-grid",
                    for (icon, title, text) in PROGRAMS {
                        div { key: "{title}", class: "card",
                            i { class: "{icon} card-icon" }
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    }
}

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "The sponsorship kept me in school. Today I am studying to become a teacher.",
        "Faith, former student",
    ),
    (
        "Mentoring with the foundation has been the most rewarding part of my week.",
        "James, volunteer",
    ),
    (
        "Our daughter's confidence has grown so much since she joined the programme.",
        "Mary, parent",
    ),
];

#[component]
fn Testimonials() -> Element {
    rsx! {
        section { id: "testimonials",
            div { class: "container",
                h2 { class: "section-title", "Testimonials" }
                div { class: "card-grid",
                    for (quote, who) in TESTIMONIALS {
                        div { key: "{who}", class: "card testimonial",
                            blockquote { "\u{201C}{quote}\u{201D}" }
                            cite { "{who}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Stories() -> Element {
    rsx! {
        section { id: "stories",
            div { class: "container",
                h2 { class: "section-title", "Stories" }
                p { class: "section-subtitle", "Moments from our classrooms and events" }
                MediaGalleryGrid {}
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    let site = use_site();
    let contact = site.catalog().contact.clone();

    rsx! {
        section { id: "contact",
            div { class: "container",
                h2 { class: "section-title", "Contact Us" }
                ul { class: "contact-list",
                    for email in contact.emails.iter() {
                        li { key: "{email}",
                            i { class: "fas fa-envelope" }
                            a { href: "mailto:{email}", "{email}" }
                        }
                    }
                    for phone in contact.phones.iter() {
                        li { key: "{phone}",
                            i { class: "fas fa-phone" }
                            a { href: "tel:{phone}", "{phone}" }
                        }
                    }
                    li {
                        i { class: "fas fa-map-marker-alt" }
                        span { "{contact.address}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let site = use_site();
    let links: Vec<(String, String)> = site
        .catalog()
        .navigation
        .iter()
        .map(|link| (link.section_id().to_string(), link.text.clone()))
        .collect();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h3 { "Raggaeirre Support Foundation" }
                        p { "Empowering children through education in Machakos, Kenya." }
                    }
                    div {
                        h4 { "Quick Links" }
                        for (id, text) in links {
                            {
                                let target = id.clone();
                                rsx! {
                                    p { key: "{id}",
                                        a {
                                            href: "#{id}",
                                            onclick: move |e| {
                                                e.prevent_default();
                                                scroll_to_section(&target);
                                            },
                                            "{text}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                p { class: "footer-bottom", "\u{00A9} Raggaeirre Support Foundation" }
            }
        }
    }
}
