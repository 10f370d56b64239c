//! Raggaeirre Support Foundation site core
//!
//! Everything the foundation's website does beyond static content, expressed
//! as plain state machines with no UI dependency.
//!
//! ## Overview
//!
//! - [`DonationFlow`]: amount → payment → details, with the bank-transfer
//!   overlay and a simulated (or real) submission
//! - [`VolunteerFlow`]: one-step application form
//! - [`MediaGallery`]: grid tiles and a wrapping lightbox
//! - [`SiteContext`]: owns all of the above, routes keys and backdrop
//!   clicks, runs timers (message expiry, auto-close, toasts)
//!
//! Renderers plug in through [`PageHooks`] (scroll lock, stopping media) and
//! [`Clipboard`]; submissions go through a [`SubmissionBackend`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use raggaeirre_core::{Catalog, DonorDetails, PaymentMethod, SiteContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let site = SiteContext::builder(Catalog::builtin()).build();
//!
//!     site.with_donation(|flow| -> raggaeirre_core::SiteResult<()> {
//!         flow.open();
//!         flow.select_amount(1000);
//!         flow.proceed_to_payment()?;
//!         flow.select_payment_method(PaymentMethod::Mpesa);
//!         flow.proceed_to_details()?;
//!         Ok(())
//!     })?;
//!
//!     let donor = DonorDetails {
//!         name: "Amina".into(),
//!         email: "amina@example.org".into(),
//!         phone: "0712345678".into(),
//!         ..Default::default()
//!     };
//!     println!("{:?}", site.submit_donation(donor).await?);
//!     Ok(())
//! }
//! ```

pub mod amount;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod donation;
pub mod effects;
pub mod error;
pub mod gallery;
pub mod hooks;
pub mod keys;
pub mod logging;
pub mod message;
pub mod site;
pub mod types;
pub mod validation;
pub mod volunteer;

// Re-exports
pub use amount::{format_kes, CURRENCY};
pub use backend::{RecordingBackend, SimulatedBackend, SubmissionBackend};
pub use catalog::{BankInfo, Catalog, ContactInfo, DonationOptions, ImpactStats, NavLink};
pub use config::{SimulatedOutcome, SiteConfig, Timings};
pub use donation::{
    DonationFlow, DonationRequest, DonationSession, DonationStep, DonorDetails, PaymentAdvance,
    SubmissionOutcome,
};
pub use effects::{CounterAnimation, HeaderState, LazyImages, SectionBounds, Throttle};
pub use error::{SiteError, SiteResult, ValidationError};
pub use gallery::{GalleryTile, LightboxMedia, LightboxView, MediaGallery};
pub use hooks::{Clipboard, MemoryClipboard, NoClipboard, NoopPage, PageEvent, PageHooks, RecordingPage};
pub use keys::{ActiveModals, Key, RoutedAction};
pub use message::{MessageKind, Toast, ToastKind, ToastPhase, TransientMessage};
pub use site::{SiteContext, SiteContextBuilder};
pub use types::*;
pub use volunteer::{ApplicationOutcome, VolunteerApplication, VolunteerFlow};
