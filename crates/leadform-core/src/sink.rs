//! Reporting sinks for completed forms.
//!
//! A sink is where a [`Submission`] goes once the user presses submit.
//! Reporting is synchronous and must not block the UI thread; sinks that
//! talk to a real backend should hand the submission off (see
//! [`ChannelSink`]) and do the slow part elsewhere.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::error::SinkError;
use crate::model::Submission;

/// Destination for completed forms
pub trait LeadSink: Send + Sync {
    /// Hand a submission over. An error leaves the form untouched.
    fn report(&self, submission: &Submission) -> Result<(), SinkError>;
}

impl<T: LeadSink + ?Sized> LeadSink for Arc<T> {
    fn report(&self, submission: &Submission) -> Result<(), SinkError> {
        (**self).report(submission)
    }
}

/// Writes each submission to the log as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LeadSink for TracingSink {
    fn report(&self, submission: &Submission) -> Result<(), SinkError> {
        let record = serde_json::to_string(&submission.record)
            .map_err(|e| SinkError::Serialization(e.to_string()))?;
        tracing::info!(
            target: "leadform::submission",
            id = %submission.id,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            record = %record,
            "Contact form submitted"
        );
        Ok(())
    }
}

/// Forwards submissions to a receiver owned by the host.
///
/// The send never blocks. Once the receiver is dropped every report fails
/// with [`SinkError::Closed`].
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Submission>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Submission>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl LeadSink for ChannelSink {
    fn report(&self, submission: &Submission) -> Result<(), SinkError> {
        self.tx
            .send(submission.clone())
            .map_err(|_| SinkError::Closed)?;
        tracing::debug!(id = %submission.id, "Submission queued");
        Ok(())
    }
}

/// Keeps every submission in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.lock().is_empty()
    }
}

impl LeadSink for MemorySink {
    fn report(&self, submission: &Submission) -> Result<(), SinkError> {
        self.submissions.lock().push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::form::{FormField, FormRecord};

    fn sample() -> Submission {
        Submission::new(
            FormRecord::new()
                .with_field(FormField::Company, "Acme")
                .with_field(FormField::Email, "jane@acme.com"),
        )
    }

    /// Captures formatted log output in memory
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn tracing_sink_logs_every_field() {
        let capture = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();

        let submission = sample();
        tracing::subscriber::with_default(subscriber, || {
            TracingSink::new().report(&submission).unwrap();
        });

        let output = String::from_utf8(capture.0.lock().clone()).unwrap();
        assert!(output.contains("Contact form submitted"));
        assert!(output.contains(&submission.id.to_string()));
        for field in FormField::ALL {
            assert!(output.contains(field.key()), "missing {} in {}", field, output);
        }
        assert!(output.contains("jane@acme.com"));
    }

    #[tokio::test]
    async fn channel_sink_delivers_in_order() {
        let (sink, mut rx) = ChannelSink::new();
        let first = sample();
        let second = sample();

        sink.report(&first).unwrap();
        sink.report(&second).unwrap();

        assert_eq!(rx.recv().await, Some(first));
        assert_eq!(rx.recv().await, Some(second));
    }

    #[test]
    fn channel_sink_fails_after_receiver_drop() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);

        assert_eq!(sink.report(&sample()), Err(SinkError::Closed));
    }

    #[test]
    fn memory_sink_clones_share_storage() {
        let sink = MemorySink::new();
        let shared: Arc<dyn LeadSink> = Arc::new(sink.clone());

        assert!(sink.is_empty());

        shared.report(&sample()).unwrap();
        assert_eq!(sink.len(), 1);
    }
}
