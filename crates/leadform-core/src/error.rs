//! Error types for Leadform

use thiserror::Error;

use crate::form::FormField;

/// Failure to deliver a submission to a reporting sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The receiving side of the sink has been dropped
    #[error("Lead sink is closed")]
    Closed,

    /// Submission could not be encoded for the sink
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Why a submit attempt did not go through
///
/// In both cases the form keeps its values and the dialog stays open.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more required fields are empty
    #[error("Required fields are empty: {}", field_list(.missing))]
    Incomplete {
        /// Required fields that were empty, in display order
        missing: Vec<FormField>,
    },

    /// The record could not be handed to the reporting sink
    #[error("Failed to report submission: {0}")]
    Sink(#[from] SinkError),
}

impl SubmitError {
    /// True when the failure came from the transport rather than the form
    pub fn is_transport(&self) -> bool {
        matches!(self, SubmitError::Sink(_))
    }
}

/// Invalid application configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Locale tag not recognised
    #[error("Unknown locale: {0} (expected one of: ru, en)")]
    UnknownLocale(String),
}

/// Failure to install the global tracing subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type alias using SubmitError
pub type LeadformResult<T> = Result<T, SubmitError>;

fn field_list(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}
