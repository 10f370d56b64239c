//! Media gallery grid and lightbox.

use dioxus::prelude::*;
use raggaeirre_core::{LightboxMedia, ModalKind};
use raggaeirre_ui::CloseButton;

use crate::context::use_site;

/// Grid of photo and video tiles; clicking one opens the lightbox
#[component]
pub fn MediaGalleryGrid() -> Element {
    let site = use_site();

    let tiles: Vec<(usize, String, String, bool)> = site
        .gallery()
        .tiles()
        .map(|t| (t.index, t.src.to_string(), t.title.to_string(), t.play_overlay))
        .collect();

    rsx! {
        div { class: "media-gallery",
            for (index, src, title, play_overlay) in tiles {
                {
                    let site = site.clone();
                    rsx! {
                        div {
                            key: "{index}",
                            class: if play_overlay { "media-item video" } else { "media-item image" },
                            onclick: move |_| {
                                if let Err(e) = site.with_gallery(|g| g.open(index)) {
                                    tracing::warn!(error = %e, "Could not open media item");
                                }
                            },
                            img { src: "{src}", alt: "{title}", loading: "lazy" }
                            if play_overlay {
                                div { class: "media-overlay",
                                    div { class: "play-button", i { class: "fas fa-play" } }
                                }
                            }
                            div { class: "media-title", "{title}" }
                        }
                    }
                }
            }
        }
    }
}

/// Lightbox for the current gallery item
#[component]
pub fn Lightbox() -> Element {
    let site = use_site();

    let view = {
        let gallery = site.gallery();
        if !gallery.is_open() {
            return rsx! {};
        }
        gallery.view().map(|v| {
            let media = match v.media {
                LightboxMedia::Image { src, alt } => (false, src.to_string(), alt.to_string()),
                LightboxMedia::Video { src } => (true, src.to_string(), String::new()),
            };
            (v.index, media, v.title.to_string(), v.description.to_string())
        })
    };
    let Some((index, (is_video, src, alt), title, description)) = view else {
        return rsx! {};
    };

    let backdrop = site.clone();
    let close = site.clone();
    let prev = site.clone();
    let next = site.clone();

    rsx! {
        div {
            id: "mediaModal",
            class: "modal active",
            onclick: move |_| {
                backdrop.handle_backdrop_click(ModalKind::Media);
            },
            div {
                class: "modal-content lightbox-content",
                onclick: move |e| e.stop_propagation(),
                CloseButton {
                    class: "lightbox-close".to_string(),
                    onclick: move |_| close.with_gallery(|g| g.close()),
                }
                button {
                    class: "lightbox-nav prev",
                    "aria-label": "Previous",
                    onclick: move |_| prev.with_gallery(|g| g.previous()),
                    i { class: "fas fa-chevron-left" }
                }
                button {
                    class: "lightbox-nav next",
                    "aria-label": "Next",
                    onclick: move |_| next.with_gallery(|g| g.next()),
                    i { class: "fas fa-chevron-right" }
                }
                div { id: "mediaContent", class: "lightbox-media", "data-index": "{index}",
                    if is_video {
                        video { src: "{src}", controls: true, autoplay: true, r#loop: true,
                            "Your browser does not support the video tag."
                        }
                    } else {
                        img { src: "{src}", alt: "{alt}" }
                    }
                }
                div { id: "mediaInfo", class: "lightbox-info",
                    h4 { "{title}" }
                    p { "{description}" }
                }
            }
        }
    }
}
