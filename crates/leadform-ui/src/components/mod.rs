//! Reusable dialog and form primitives.

mod button;
mod dialog;
mod form;
mod input;

pub use button::*;
pub use dialog::*;
pub use form::*;
pub use input::*;
