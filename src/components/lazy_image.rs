//! Deferred images
//!
//! A [`LazyImage`] renders a placeholder until the page reports it visible;
//! the landing page's scroll poll feeds visible ids to [`LazyLoader::reveal`].

use std::collections::BTreeMap;

use dioxus::prelude::*;
use raggaeirre_core::LazyImages;

/// Transparent 1x1 shown until the real source is revealed
const PLACEHOLDER: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Pending images plus the sources already revealed
#[derive(Debug, Default)]
pub struct LazyLoader {
    pending: LazyImages,
    loaded: BTreeMap<String, String>,
}

impl LazyLoader {
    /// Move every newly visible id from pending to loaded.
    ///
    /// Returns how many images were revealed.
    pub fn reveal<'a>(&mut self, visible: impl IntoIterator<Item = &'a String>) -> usize {
        let mut revealed = 0;
        for id in visible {
            if let Some(src) = self.pending.reveal(id) {
                self.loaded.insert(id.clone(), src);
                revealed += 1;
            }
        }
        revealed
    }

    pub fn pending(&self) -> usize {
        self.pending.pending()
    }
}

/// Provide the loader; called once by the page that polls visibility.
pub fn use_lazy_loader_provider() -> Signal<LazyLoader> {
    use_context_provider(|| Signal::new(LazyLoader::default()))
}

#[component]
pub fn LazyImage(
    id: String,
    src: String,
    alt: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut loader = use_context::<Signal<LazyLoader>>();

    let tracked_id = id.clone();
    let tracked_src = src.clone();
    use_effect(move || {
        loader.write().pending.track(tracked_id.clone(), tracked_src.clone());
    });

    let loaded = loader.read().loaded.get(&id).cloned();
    let extra = class.unwrap_or_default();
    let (current, state) = match &loaded {
        Some(src) => (src.as_str(), "lazy loaded"),
        None => (PLACEHOLDER, "lazy"),
    };

    rsx! {
        img {
            id: "{id}",
            class: "{state} {extra}",
            src: "{current}",
            "data-src": if loaded.is_none() { src.as_str() } else { "" },
            alt: "{alt}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_only_tracked_images_once() {
        let mut loader = LazyLoader::default();
        loader.pending.track("hero", "images/hero.jpg");
        loader.pending.track("about", "images/about.jpg");

        let visible = vec!["hero".to_string(), "unknown".to_string()];
        assert_eq!(loader.reveal(&visible), 1);
        assert_eq!(loader.reveal(&visible), 0);
        assert_eq!(loader.loaded.get("hero").map(String::as_str), Some("images/hero.jpg"));
        assert_eq!(loader.pending(), 1);
    }
}
