//! Pages of the foundation site.

mod landing;

pub use landing::Landing;
