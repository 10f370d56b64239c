//! Raggaeirre Support Foundation UI Components
//!
//! Dioxus building blocks shared by the site's modals and sections.
//!
//! ## Palette
//!
//! - **Orange (#ff7e00)**: calls to action, donation accents
//! - **Green (#008000)**: volunteer actions, success states
//! - **Charcoal (#333)**: body text
//! - **White**: cards and modal surfaces

pub mod components;

pub use components::*;
