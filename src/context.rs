//! Shared context for Leadform components.
//!
//! The App component provides the reporting sink, the dialog text, the
//! toast slot and the session counter; children read them with the hooks
//! below.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let sink = use_lead_sink();
//! let copy = use_form_copy();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use leadform_core::{FormCopy, LeadSink};

/// Sink shared by every form instance
pub type SharedSink = Arc<dyn LeadSink>;

/// Transient message shown in the corner after an action
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Distinguishes consecutive notices with the same text
    pub id: String,
    pub message: String,
}

/// Number of leads delivered during this run
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionLeads(pub usize);

/// Hook to access the reporting sink from context.
pub fn use_lead_sink() -> SharedSink {
    use_context::<SharedSink>()
}

/// Hook to access the localized dialog text.
pub fn use_form_copy() -> FormCopy {
    use_context::<FormCopy>()
}

/// Hook to access the toast slot.
///
/// Set it to show a notice; the Toast component clears it after a delay.
pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

/// Hook to access the session lead counter.
pub fn use_session_leads() -> Signal<SessionLeads> {
    use_context::<Signal<SessionLeads>>()
}
