//! UI Components for Leadform.

mod contact_form;
mod toast;

pub use contact_form::ContactForm;
pub use toast::Toast;
