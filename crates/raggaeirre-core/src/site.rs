//! Site context: the one place that owns every modal.
//!
//! The context is built once at startup and handed (as `Arc<SiteContext>`)
//! to whatever wires up events: the desktop app, the CLI, tests. It replaces
//! page-global singletons with explicit ownership.
//!
//! ## Locking
//!
//! Each controller sits behind its own `parking_lot::Mutex`. Locks are only
//! held for synchronous state changes and are always released before an
//! `.await`, so a slow backend never blocks key handling or rendering.
//!
//! ## Change notification
//!
//! Every mutation made through the context bumps a revision on a
//! `tokio::sync::watch` channel. Views subscribe with [`SiteContext::subscribe`]
//! and re-render when it moves, including after timer-driven changes
//! (message expiry, toast phases, auto-close).

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use tokio::sync::watch;

use crate::backend::{SimulatedBackend, SubmissionBackend};
use crate::catalog::Catalog;
use crate::config::{SiteConfig, Timings};
use crate::donation::{DonationFlow, DonorDetails, SubmissionOutcome};
use crate::error::SiteResult;
use crate::gallery::MediaGallery;
use crate::hooks::{Clipboard, NoClipboard, NoopPage, PageHooks};
use crate::keys::{self, ActiveModals, Key, RoutedAction};
use crate::message::{MessageId, ToastKind, ToastPhase, ToastTray};
use crate::types::ModalKind;
use crate::volunteer::{ApplicationOutcome, VolunteerApplication, VolunteerFlow};

/// Builder for [`SiteContext`]
pub struct SiteContextBuilder {
    catalog: Catalog,
    timings: Timings,
    hooks: Arc<dyn PageHooks>,
    clipboard: Arc<dyn Clipboard>,
    backend: Option<Arc<dyn SubmissionBackend>>,
}

impl SiteContextBuilder {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            timings: Timings::default(),
            hooks: Arc::new(NoopPage),
            clipboard: Arc::new(NoClipboard),
            backend: None,
        }
    }

    pub fn timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn PageHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Defaults to a [`SimulatedBackend`] that succeeds after the configured delay.
    pub fn backend(mut self, backend: Arc<dyn SubmissionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn build(self) -> Arc<SiteContext> {
        let backend = self.backend.unwrap_or_else(|| {
            Arc::new(SimulatedBackend::succeeding(self.timings.submission_delay()))
        });
        let (changes, _) = watch::channel(0);

        Arc::new(SiteContext {
            gallery: Mutex::new(MediaGallery::new(self.catalog.media.clone(), self.hooks.clone())),
            donation: Mutex::new(
                DonationFlow::new(self.catalog.donation.amounts.clone(), self.hooks.clone())
                    .with_messages(self.catalog.messages.donation.clone()),
            ),
            volunteer: Mutex::new(
                VolunteerFlow::new(self.hooks.clone())
                    .with_messages(self.catalog.messages.volunteer.clone()),
            ),
            toasts: Mutex::new(ToastTray::new()),
            catalog: Arc::new(self.catalog),
            timings: self.timings,
            clipboard: self.clipboard,
            backend,
            changes,
        })
    }
}

/// Owns the gallery, both modal flows and the toast tray
pub struct SiteContext {
    catalog: Arc<Catalog>,
    timings: Timings,
    clipboard: Arc<dyn Clipboard>,
    backend: Arc<dyn SubmissionBackend>,
    gallery: Mutex<MediaGallery>,
    donation: Mutex<DonationFlow>,
    volunteer: Mutex<VolunteerFlow>,
    toasts: Mutex<ToastTray>,
    changes: watch::Sender<u64>,
}

impl SiteContext {
    pub fn builder(catalog: Catalog) -> SiteContextBuilder {
        SiteContextBuilder::new(catalog)
    }

    /// Context from a loaded config: its catalog, timings and simulated backend.
    pub fn from_config(
        config: &SiteConfig,
        hooks: Arc<dyn PageHooks>,
        clipboard: Arc<dyn Clipboard>,
    ) -> SiteResult<Arc<Self>> {
        Ok(Self::builder(config.catalog()?)
            .timings(config.timings)
            .hooks(hooks)
            .clipboard(clipboard)
            .backend(Arc::new(SimulatedBackend::from_config(config)))
            .build())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Receiver whose value changes after every state change
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Current revision number
    pub fn revision(&self) -> u64 {
        *self.changes.borrow()
    }

    fn notify(&self) {
        self.changes.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    // ------------------------------------------------------------------
    // Read access (guards must not be held across an await)
    // ------------------------------------------------------------------

    pub fn gallery(&self) -> MutexGuard<'_, MediaGallery> {
        self.gallery.lock()
    }

    pub fn donation(&self) -> MutexGuard<'_, DonationFlow> {
        self.donation.lock()
    }

    pub fn volunteer(&self) -> MutexGuard<'_, VolunteerFlow> {
        self.volunteer.lock()
    }

    pub fn toasts(&self) -> MutexGuard<'_, ToastTray> {
        self.toasts.lock()
    }

    pub fn active_modals(&self) -> ActiveModals {
        let donation = self.donation.lock();
        ActiveModals {
            media: self.gallery.lock().is_open(),
            donation: donation.is_open(),
            volunteer: self.volunteer.lock().is_open(),
            bank_info: donation.is_bank_info_open(),
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Mutate the gallery and notify views.
    pub fn with_gallery<R>(&self, f: impl FnOnce(&mut MediaGallery) -> R) -> R {
        let result = f(&mut self.gallery.lock());
        self.notify();
        result
    }

    /// Mutate the donation flow; a message it shows gets an expiry timer.
    pub fn with_donation<R>(self: &Arc<Self>, f: impl FnOnce(&mut DonationFlow) -> R) -> R {
        let (result, shown) = {
            let mut flow = self.donation.lock();
            let before = flow.message().map(|m| m.id);
            let result = f(&mut flow);
            let after = flow.message().map(|m| m.id);
            (result, after.filter(|id| Some(*id) != before))
        };
        if let Some(id) = shown {
            self.expire_later(ModalKind::Donation, id);
        }
        self.notify();
        result
    }

    /// Mutate the volunteer flow; a message it shows gets an expiry timer.
    pub fn with_volunteer<R>(self: &Arc<Self>, f: impl FnOnce(&mut VolunteerFlow) -> R) -> R {
        let (result, shown) = {
            let mut flow = self.volunteer.lock();
            let before = flow.message().map(|m| m.id);
            let result = f(&mut flow);
            let after = flow.message().map(|m| m.id);
            (result, after.filter(|id| Some(*id) != before))
        };
        if let Some(id) = shown {
            self.expire_later(ModalKind::Volunteer, id);
        }
        self.notify();
        result
    }

    fn expire_later(self: &Arc<Self>, modal: ModalKind, id: MessageId) {
        let ttl = self.timings.message_ttl();
        let weak = Arc::downgrade(self);
        self.run_later(ttl, move || {
            let Some(site) = weak.upgrade() else { return };
            let removed = match modal {
                ModalKind::Donation => site.donation.lock().expire_message(id),
                ModalKind::Volunteer => site.volunteer.lock().expire_message(id),
                ModalKind::Media | ModalKind::BankInfo => false,
            };
            if removed {
                tracing::trace!(?modal, id, "Message expired");
                site.notify();
            }
        });
    }

    /// Run `f` after `delay` on the ambient tokio runtime.
    ///
    /// Without a runtime (plain synchronous callers) the timer is skipped and
    /// the effect simply never happens.
    fn run_later(&self, delay: Duration, f: impl FnOnce() + Send + 'static) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    f();
                });
            }
            Err(_) => tracing::debug!("No async runtime; timer skipped"),
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Route a key press to whichever overlays are active.
    pub fn handle_key(&self, key: Key) -> Vec<RoutedAction> {
        let actions = keys::route_key(key, self.active_modals());
        for action in &actions {
            self.apply(*action);
        }
        actions
    }

    /// A click on `modal`'s backdrop.
    pub fn handle_backdrop_click(&self, modal: ModalKind) -> Option<RoutedAction> {
        let action = keys::route_backdrop_click(modal, self.active_modals())?;
        self.apply(action);
        Some(action)
    }

    fn apply(&self, action: RoutedAction) {
        match action {
            RoutedAction::Close(ModalKind::Media) => self.gallery.lock().close(),
            RoutedAction::Close(ModalKind::Donation) => self.donation.lock().close(),
            RoutedAction::Close(ModalKind::Volunteer) => self.volunteer.lock().close(),
            RoutedAction::Close(ModalKind::BankInfo) => self.donation.lock().close_bank_info(),
            RoutedAction::PreviousMedia => self.gallery.lock().previous(),
            RoutedAction::NextMedia => self.gallery.lock().next(),
        }
        self.notify();
    }

    // ------------------------------------------------------------------
    // Submissions
    // ------------------------------------------------------------------

    /// Run a donation through the backend.
    ///
    /// On success this also waits out the auto-close delay and closes the
    /// modal (unless the user already closed or reopened it).
    pub async fn submit_donation(self: &Arc<Self>, donor: DonorDetails) -> SiteResult<SubmissionOutcome> {
        let ticket = self.with_donation(|flow| flow.begin_submission(donor))?;

        let result = self.backend.submit_donation(ticket.request()).await;

        let outcome = self.with_donation(|flow| flow.finish_submission(&ticket, result));
        if let SubmissionOutcome::Succeeded(_) = outcome {
            tokio::time::sleep(self.timings.donation_close()).await;
            self.with_donation(|flow| flow.auto_close(ticket.epoch()));
        }
        Ok(outcome)
    }

    /// Run a volunteer application through the backend.
    pub async fn submit_application(
        self: &Arc<Self>,
        application: VolunteerApplication,
    ) -> SiteResult<ApplicationOutcome> {
        let ticket = self.with_volunteer(|flow| flow.begin_submission(application))?;

        let result = self.backend.submit_application(ticket.application()).await;

        let outcome = self.with_volunteer(|flow| flow.finish_submission(&ticket, result));
        if let ApplicationOutcome::Succeeded(_) = outcome {
            tokio::time::sleep(self.timings.volunteer_close()).await;
            self.with_volunteer(|flow| flow.auto_close(ticket.epoch()));
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Toasts
    // ------------------------------------------------------------------

    /// Show a global toast and run its slide-in/slide-out timeline.
    pub fn show_toast(self: &Arc<Self>, text: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.toasts.lock().push(text, kind);
        self.notify();

        let enter = self.timings.toast_enter();
        let visible = self.timings.toast_visible();
        let exit = self.timings.toast_exit();
        let weak = Arc::downgrade(self);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(enter).await;
                    let Some(site) = weak.upgrade() else { return };
                    site.set_toast_phase(id, ToastPhase::Shown);
                    drop(site);

                    tokio::time::sleep(visible.saturating_sub(enter)).await;
                    let Some(site) = weak.upgrade() else { return };
                    site.set_toast_phase(id, ToastPhase::Leaving);
                    drop(site);

                    tokio::time::sleep(exit).await;
                    let Some(site) = weak.upgrade() else { return };
                    site.toasts.lock().remove(id);
                    site.notify();
                });
            }
            Err(_) => tracing::debug!(id, "No async runtime; toast stays until removed"),
        }
        id
    }

    fn set_toast_phase(&self, id: u64, phase: ToastPhase) {
        self.toasts.lock().set_phase(id, phase);
        self.notify();
    }

    /// Copy `text` and confirm with a toast.
    ///
    /// Returns whether the clipboard accepted the text.
    pub fn copy_to_clipboard(self: &Arc<Self>, text: &str) -> bool {
        match self.clipboard.write_text(text) {
            Ok(()) => {
                self.show_toast(self.catalog.messages.copy.success.clone(), ToastKind::Success);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                self.show_toast(self.catalog.messages.copy.error.clone(), ToastKind::Error);
                false
            }
        }
    }
}
