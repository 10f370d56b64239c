//! Reusable UI components for the foundation site
//!
//! Markup and class names follow the site stylesheet: `btn-*` buttons,
//! `form-group` fields, `message` banners and `toast` notifications.

mod button;
mod choice;
mod input;
mod message;

pub use button::*;
pub use choice::*;
pub use input::*;
pub use message::*;
