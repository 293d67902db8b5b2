//! Property-based tests for the contact form model
//!
//! Uses proptest to check field isolation, reset and close-signal
//! invariants over arbitrary input sequences.

use proptest::prelude::*;
use leadform_core::{ContactFormModel, FormField, FormHost, FormRecord, MemorySink, Submission};

// ============================================================================
// Strategy Generators
// ============================================================================

fn field_strategy() -> impl Strategy<Value = FormField> {
    prop::sample::select(FormField::ALL.to_vec())
}

/// Arbitrary input text, including newlines and non-ASCII
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("(\\PC|\n){0,40}").expect("valid regex")
}

fn non_empty_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@. ]{1,30}").expect("valid regex")
}

fn edits_strategy(max: usize) -> impl Strategy<Value = Vec<(FormField, String)>> {
    prop::collection::vec((field_strategy(), value_strategy()), 0..max)
}

#[derive(Default)]
struct CountingHost {
    open_changes: Vec<bool>,
    acknowledged: usize,
}

impl FormHost for CountingHost {
    fn acknowledge(&mut self, _submission: &Submission) {
        self.acknowledged += 1;
    }

    fn request_open_change(&mut self, open: bool) {
        self.open_changes.push(open);
    }
}

fn apply(model: &mut ContactFormModel, edits: &[(FormField, String)]) {
    for (field, value) in edits {
        model.update_field(*field, value.clone());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Updating one field never changes another
    #[test]
    fn update_touches_only_target_field(
        edits in edits_strategy(20),
        field in field_strategy(),
        value in value_strategy(),
    ) {
        let mut model = ContactFormModel::new();
        apply(&mut model, &edits);
        let before = model.record().clone();

        model.update_field(field, value.clone());

        for other in FormField::ALL {
            if other == field {
                prop_assert_eq!(model.record().get(other), value.as_str());
            } else {
                prop_assert_eq!(model.record().get(other), before.get(other));
            }
        }
    }

    /// The record equals the last value written to each field
    #[test]
    fn record_holds_last_write_per_field(edits in edits_strategy(40)) {
        let mut model = ContactFormModel::new();
        apply(&mut model, &edits);

        let mut expected = FormRecord::default();
        for (field, value) in &edits {
            expected.set(*field, value.clone());
        }
        prop_assert_eq!(model.record(), &expected);
    }

    /// After a successful submit every field is empty
    #[test]
    fn submit_clears_every_field(
        edits in edits_strategy(20),
        company in non_empty_strategy(),
        name in non_empty_strategy(),
        email in non_empty_strategy(),
    ) {
        let mut model = ContactFormModel::new();
        apply(&mut model, &edits);
        model.update_field(FormField::Company, company);
        model.update_field(FormField::Name, name);
        model.update_field(FormField::Email, email);

        let sink = MemorySink::new();
        let mut host = CountingHost::default();
        prop_assert!(model.submit(&sink, &mut host).is_ok());

        prop_assert!(model.record().is_empty());
        prop_assert_eq!(sink.len(), 1);
        prop_assert_eq!(host.acknowledged, 1);
    }

    /// Submit never goes through while a required field is empty
    #[test]
    fn empty_required_field_blocks_submit(
        edits in edits_strategy(20),
        cleared in prop::sample::select(vec![FormField::Company, FormField::Name, FormField::Email]),
    ) {
        let mut model = ContactFormModel::new();
        apply(&mut model, &edits);
        model.update_field(cleared, "");
        let before = model.record().clone();

        let sink = MemorySink::new();
        let mut host = CountingHost::default();
        prop_assert!(model.submit(&sink, &mut host).is_err());

        prop_assert!(sink.is_empty());
        prop_assert!(host.open_changes.is_empty());
        prop_assert_eq!(model.record(), &before);
    }

    /// Submit and cancel only ever ask to close
    #[test]
    fn close_signal_is_always_false(
        actions in prop::collection::vec(
            (edits_strategy(5), any::<bool>()),
            1..10,
        ),
    ) {
        let mut model = ContactFormModel::new();
        let sink = MemorySink::new();
        let mut host = CountingHost::default();

        for (edits, submit) in &actions {
            apply(&mut model, edits);
            if *submit {
                let _ = model.submit(&sink, &mut host);
            } else {
                model.cancel(&mut host);
            }
        }

        prop_assert!(host.open_changes.iter().all(|open| !open));
    }

    /// Cancel leaves the record exactly as it was
    #[test]
    fn cancel_preserves_record(edits in edits_strategy(20)) {
        let mut model = ContactFormModel::new();
        apply(&mut model, &edits);
        let before = model.record().clone();

        let mut host = CountingHost::default();
        model.cancel(&mut host);

        prop_assert_eq!(host.open_changes, vec![false]);
        prop_assert_eq!(model.record(), &before);
    }
}
