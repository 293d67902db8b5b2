//! Contact form state and its two actions.
//!
//! The model owns the [`FormRecord`]. Visibility belongs to whoever hosts
//! the dialog: the model only ever asks the host to close it.
//!
//! ```text
//! submit():  gate -> sink.report -> host.acknowledge -> host.request_open_change(false) -> reset
//! cancel():                                    clear error -> host.request_open_change(false)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{LeadformResult, SubmitError};
use crate::form::{FormField, FormRecord};
use crate::sink::LeadSink;

/// A completed form as handed to a reporting sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Unique id of this submission
    pub id: Ulid,
    /// When the user submitted the form
    pub submitted_at: DateTime<Utc>,
    /// Snapshot of the form values
    pub record: FormRecord,
}

impl Submission {
    pub fn new(record: FormRecord) -> Self {
        Self {
            id: Ulid::new(),
            submitted_at: Utc::now(),
            record,
        }
    }
}

/// The context hosting the dialog.
///
/// The host owns the `open` flag; the model reports what happened and
/// leaves the flag to the host.
pub trait FormHost {
    /// Tell the user the submission went through
    fn acknowledge(&mut self, submission: &Submission);

    /// Ask the host to change visibility. The model only passes `false`.
    fn request_open_change(&mut self, open: bool);
}

/// State of one contact form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    record: FormRecord,
    /// Why the latest submit failed; cleared once the dialog closes
    last_error: Option<SubmitError>,
}

impl ContactFormModel {
    /// Create a model with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Failure of the latest submit, if it has not been dismissed
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Replace one field, keeping the others
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.record = self.record.with_field(field, value);
    }

    /// Clear every field
    pub fn reset(&mut self) {
        self.record = FormRecord::default();
    }

    /// Report the record, acknowledge, request closing and clear the form.
    ///
    /// Nothing happens if a required field is empty or the sink rejects the
    /// submission; the record is kept in both cases so the user can retry.
    pub fn submit<S, H>(&mut self, sink: &S, host: &mut H) -> LeadformResult<Submission>
    where
        S: LeadSink + ?Sized,
        H: FormHost + ?Sized,
    {
        let missing = self.record.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Submit blocked by empty required fields");
            return Err(self.fail(SubmitError::Incomplete { missing }));
        }

        let submission = Submission::new(self.record.clone());
        if let Err(e) = sink.report(&submission) {
            tracing::warn!(id = %submission.id, error = %e, "Lead submission not delivered");
            return Err(self.fail(e.into()));
        }

        tracing::info!(id = %submission.id, "Lead submitted");
        self.last_error = None;
        host.acknowledge(&submission);
        host.request_open_change(false);
        self.reset();

        Ok(submission)
    }

    /// Request closing without touching the record
    pub fn cancel<H>(&mut self, host: &mut H)
    where
        H: FormHost + ?Sized,
    {
        tracing::debug!("Contact form cancelled");
        self.dismiss();
        host.request_open_change(false);
    }

    /// The dialog was closed from outside the form (backdrop, Escape,
    /// close button). Drops a pending error; values stay.
    pub fn dismiss(&mut self) {
        self.last_error = None;
    }

    fn fail(&mut self, err: SubmitError) -> SubmitError {
        self.last_error = Some(err.clone());
        err
    }
}
