//! Page components for Leadform.

mod landing;

pub use landing::Landing;
