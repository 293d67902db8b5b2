//! Contact Form Component
//!
//! Modal dialog collecting a lead: company, name, email, phone, budget
//! and message. Visibility is controlled by the caller.

use dioxus::prelude::*;
use leadform_core::{ContactFormModel, FieldCopy, FormField, FormHost, InputKind, Submission};
use leadform_ui::{Button, ButtonType, ButtonVariant, Dialog, Form, Input, TextArea};

use crate::context::{use_form_copy, use_lead_sink, use_notice, Notice};

/// Bridges the model's requests to the component's props and the toast.
struct DialogHost {
    on_open_change: EventHandler<bool>,
    notice: Signal<Option<Notice>>,
    thanks: &'static str,
}

impl FormHost for DialogHost {
    fn acknowledge(&mut self, submission: &Submission) {
        self.notice.set(Some(Notice {
            id: submission.id.to_string(),
            message: self.thanks.to_string(),
        }));
    }

    fn request_open_change(&mut self, open: bool) {
        self.on_open_change.call(open);
    }
}

/// Contact Form
///
/// The form keeps its values while closed; only a successful submit
/// clears them.
///
/// # Example
///
/// ```rust,ignore
/// let mut open = use_signal(|| false);
///
/// rsx! {
///     ContactForm {
///         open: open(),
///         on_open_change: move |next| open.set(next),
///     }
/// }
/// ```
#[component]
pub fn ContactForm(
    /// Whether the dialog is visible
    open: bool,
    /// Called with `false` whenever the form wants to close
    on_open_change: EventHandler<bool>,
) -> Element {
    let copy = use_form_copy();
    let sink = use_lead_sink();
    let notice = use_notice();
    let mut model = use_signal(ContactFormModel::new);

    let thanks = copy.thanks;

    let handle_submit = move |_: FormEvent| {
        let mut host = DialogHost {
            on_open_change,
            notice,
            thanks,
        };
        let result = model.write().submit(sink.as_ref(), &mut host);
        if let Err(e) = result {
            if e.is_transport() {
                tracing::warn!("Contact form not delivered: {}", e);
            } else {
                tracing::debug!("Contact form incomplete: {}", e);
            }
        }
    };

    let handle_cancel = move |_: ()| {
        let mut host = DialogHost {
            on_open_change,
            notice,
            thanks,
        };
        model.write().cancel(&mut host);
    };

    // Backdrop, Escape and the close button bypass the form
    let handle_dismiss = move |next: bool| {
        if !next {
            model.write().dismiss();
        }
        on_open_change.call(next);
    };

    let on_field_input = move |(field, value): (FormField, String)| {
        model.write().update_field(field, value);
    };

    let record = model.read().record().clone();
    let error_text = model.read().last_error().map(|e| copy.submit_error(e));

    rsx! {
        Dialog {
            open,
            on_open_change: handle_dismiss,
            title: copy.title.to_string(),
            description: copy.description.to_string(),
            class: "contact-dialog".to_string(),

            Form { onsubmit: handle_submit, class: "contact-form".to_string(),
                LeadField {
                    field: FormField::Company,
                    value: record.company.clone(),
                    copy: copy.company.clone(),
                    oninput: on_field_input,
                }
                LeadField {
                    field: FormField::Name,
                    value: record.name.clone(),
                    copy: copy.name.clone(),
                    oninput: on_field_input,
                }

                div { class: "form-grid",
                    LeadField {
                        field: FormField::Email,
                        value: record.email.clone(),
                        copy: copy.email.clone(),
                        oninput: on_field_input,
                    }
                    LeadField {
                        field: FormField::Phone,
                        value: record.phone.clone(),
                        copy: copy.phone.clone(),
                        oninput: on_field_input,
                    }
                }

                LeadField {
                    field: FormField::Budget,
                    value: record.budget.clone(),
                    copy: copy.budget.clone(),
                    oninput: on_field_input,
                }
                LeadField {
                    field: FormField::Message,
                    value: record.message.clone(),
                    copy: copy.message.clone(),
                    oninput: on_field_input,
                }

                if let Some(err) = error_text {
                    p { class: "error-text", role: "alert", "{err}" }
                }

                div { class: "form-actions",
                    Button {
                        button_type: ButtonType::Submit,
                        class: "flex-1".to_string(),
                        "{copy.submit}"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_cancel,
                        "{copy.cancel}"
                    }
                }

                p { class: "consent-note", "{copy.consent}" }
            }
        }
    }
}

/// One labeled input, reporting edits together with its field
#[component]
fn LeadField(
    field: FormField,
    value: String,
    copy: FieldCopy,
    oninput: EventHandler<(FormField, String)>,
) -> Element {
    let id = field_id(field);
    let name = field.key().to_string();
    let label = copy.label.to_string();
    let placeholder = copy.placeholder.to_string();

    match field.input_kind() {
        InputKind::Multiline => rsx! {
            TextArea {
                id,
                name,
                value,
                label,
                placeholder,
                rows: 4,
                required: field.is_required(),
                oninput: move |v: String| oninput.call((field, v)),
            }
        },
        kind => rsx! {
            Input {
                id,
                name,
                kind,
                value,
                label,
                placeholder,
                required: field.is_required(),
                autofocus: field == INITIAL_FOCUS,
                oninput: move |v: String| oninput.call((field, v)),
            }
        },
    }
}

/// Field focused when the dialog opens, so Escape reaches the overlay
const INITIAL_FOCUS: FormField = FormField::Company;

/// Element id of a field's control
fn field_id(field: FormField) -> String {
    format!("lead-{}", field.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_unique() {
        let mut ids: Vec<_> = FormField::ALL.into_iter().map(field_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FormField::ALL.len());
        assert_eq!(field_id(FormField::Email), "lead-email");
    }

    #[test]
    fn initial_focus_is_first_single_line_field() {
        assert_eq!(INITIAL_FOCUS, FormField::ALL[0]);
        assert_ne!(INITIAL_FOCUS.input_kind(), InputKind::Multiline);
    }
}
