//! Input Field Components
//!
//! Labeled text inputs and textareas for the dialog.
//! Features:
//! - Dark translucent background with zinc border
//! - Red asterisk after the label of required fields
//! - Native `required` / `type` so the webview gates submission

use dioxus::prelude::*;
use leadform_core::InputKind;

/// Properties for the Label component
#[derive(Clone, PartialEq, Props)]
pub struct LabelProps {
    /// Id of the control this label describes
    pub for_id: String,
    /// Append a required marker
    #[props(default = false)]
    pub required: bool,
    /// Label content
    pub children: Element,
}

/// Field label with optional required marker
#[component]
pub fn Label(props: LabelProps) -> Element {
    rsx! {
        label {
            class: "input-label",
            r#for: "{props.for_id}",
            {props.children}
            if props.required {
                " "
                span { class: "required-mark", "*" }
            }
        }
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Form control name
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called with the new value on every input event
    pub oninput: EventHandler<String>,
    /// Which single-line control to render
    #[props(default = InputKind::Text)]
    pub kind: InputKind,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Take focus when mounted, so keyboard events reach the dialog
    #[props(default = false)]
    pub autofocus: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// `kind` selects the HTML `type`; a [`InputKind::Multiline`] kind falls
/// back to `text`, use [`TextArea`] for multi-line values.
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "email".to_string(),
///         name: "email".to_string(),
///         kind: InputKind::Email,
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_type = input_type(props.kind);
    let input_class = with_extra_class("input-field", props.class.as_deref());
    let autofocus = props.autofocus;

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                Label { for_id: props.id.clone(), required: props.required, "{label}" }
            }
            input {
                id: "{props.id}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                autofocus,
                // The attribute alone is ignored for nodes inserted after page load
                onmounted: move |evt: MountedEvent| async move {
                    if autofocus {
                        if let Err(e) = evt.set_focus(true).await {
                            tracing::debug!("Could not focus input: {:?}", e);
                        }
                    }
                },
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Form control name
    pub name: String,
    /// Current textarea value
    pub value: String,
    /// Handler called with the new value on every input event
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                Label { for_id: props.id.clone(), required: props.required, "{label}" }
            }
            textarea {
                id: "{props.id}",
                name: "{props.name}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// HTML `type` for a single-line input
pub fn input_type(kind: InputKind) -> &'static str {
    kind.html_type().unwrap_or("text")
}

pub(crate) fn with_extra_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
