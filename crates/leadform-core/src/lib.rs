//! Leadform Core Library
//!
//! Framework-free model behind the contact request dialog.
//!
//! ## Overview
//!
//! A visitor fills in a short lead form (company, name, email, phone,
//! budget, message). On submit the record is handed to a [`LeadSink`],
//! the host is asked to close the dialog and the form is cleared.
//!
//! The UI layer holds a [`ContactFormModel`] and implements [`FormHost`];
//! everything observable about submit and cancel lives here so it can be
//! tested without a webview.
//!
//! ## Quick Start
//!
//! ```ignore
//! use leadform_core::{ContactFormModel, FormField, TracingSink};
//!
//! let mut form = ContactFormModel::new();
//! form.update_field(FormField::Company, "Acme");
//! form.update_field(FormField::Name, "Jane");
//! form.update_field(FormField::Email, "jane@acme.com");
//!
//! let submission = form.submit(&TracingSink::new(), &mut host)?;
//! assert!(form.record().is_empty());
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod sink;

// Re-exports
pub use config::{FieldCopy, FormCopy, Locale};
pub use error::{ConfigError, LeadformResult, LoggingError, SinkError, SubmitError};
pub use form::{FormField, FormRecord, InputKind};
pub use model::{ContactFormModel, FormHost, Submission};
pub use sink::{ChannelSink, LeadSink, MemorySink, TracingSink};
