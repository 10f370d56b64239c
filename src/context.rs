//! Site context for components.
//!
//! The `SiteContext` lives in an `Arc` provided at the root. Its change
//! channel is mirrored into a [`SiteRevision`] signal so that any component
//! calling [`use_site`] re-renders after a state change, including changes
//! made by timers.
//!
//! ## Usage
//!
//! ```ignore
//! let site = use_site();
//! let open = site.donation().is_open();
//!
//! let site_for_click = site.clone();
//! rsx! {
//!     button { onclick: move |_| site_for_click.with_donation(|d| d.open()), "Donate" }
//! }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use raggaeirre_core::SiteContext;

/// Latest revision of the site state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SiteRevision(pub u64);

/// Provide the site and keep the revision signal in step with it.
///
/// Called once, from the root component.
pub fn use_site_provider(site: Arc<SiteContext>) {
    let mut revision = use_signal(|| SiteRevision(site.revision()));
    use_context_provider(|| revision);
    let site = use_context_provider(|| site);

    use_future(move || {
        let mut changes = site.subscribe();
        async move {
            while changes.changed().await.is_ok() {
                let rev = *changes.borrow_and_update();
                revision.set(SiteRevision(rev));
            }
        }
    });
}

/// Hook to access the site; subscribes the caller to state changes.
pub fn use_site() -> Arc<SiteContext> {
    let revision = use_context::<Signal<SiteRevision>>();
    let _ = revision.read();
    use_context::<Arc<SiteContext>>()
}
