use dioxus::prelude::*;
use raggaeirre_core::Key as SiteKey;

use crate::context::{use_site, use_site_provider};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The foundation's one-page site
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, the site context and routing.
#[component]
pub fn App() -> Element {
    let Some(site) = crate::site() else {
        tracing::error!("Site context missing at launch");
        return rsx! { p { "The site failed to start." } };
    };
    use_site_provider(site);

    rsx! {
        style { {GLOBAL_STYLES} }
        KeyboardScope { Router::<Route> {} }
    }
}

/// Catches key presses for the whole page and routes them to open overlays
#[component]
fn KeyboardScope(children: Element) -> Element {
    let site = use_site();

    let on_keydown = move |evt: KeyboardEvent| {
        let key = SiteKey::from_name(&evt.key().to_string());
        if key == SiteKey::Other {
            return;
        }
        let actions = site.handle_key(key);
        if !actions.is_empty() {
            evt.prevent_default();
            tracing::debug!(?actions, "Key routed");
        }
    };

    rsx! {
        div {
            class: "page",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,
            {children}
        }
    }
}
