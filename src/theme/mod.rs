//! Visual theme for Leadform.

mod styles;

pub use styles::GLOBAL_STYLES;
