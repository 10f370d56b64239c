//! Components of the foundation's landing page.

mod bank_info_modal;
mod donation_modal;
mod gallery;
mod lazy_image;
mod nav_header;
mod scroll_top;
mod stats;
mod volunteer_modal;

pub use bank_info_modal::BankInfoModal;
pub use donation_modal::DonationModal;
pub use gallery::{Lightbox, MediaGalleryGrid};
pub use lazy_image::{use_lazy_loader_provider, LazyImage, LazyLoader};
pub use nav_header::NavHeader;
pub use scroll_top::{scroll_to_section, ScrollToTop};
pub use stats::ImpactCounters;
pub use volunteer_modal::VolunteerModal;
