//! Modal Dialog Component
//!
//! Controlled modal: the caller owns `open` and receives every close
//! request through `on_open_change(false)`. Backdrop click, the close
//! button and Escape all go through that one callback.
//!
//! Escape only arrives while focus is inside the overlay, so the body
//! should contain a control with `autofocus` (see [`super::Input`]).

use dioxus::prelude::*;

use super::button::CloseButton;
use super::input::with_extra_class;

/// How the user closed the dialog without using the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Backdrop,
    CloseButton,
    Escape,
}

impl Dismissal {
    /// Dismissal triggered by a key press, if any
    pub fn from_key(key: &Key) -> Option<Dismissal> {
        match key {
            Key::Escape => Some(Dismissal::Escape),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dismissal::Backdrop => "backdrop",
            Dismissal::CloseButton => "close button",
            Dismissal::Escape => "escape",
        }
    }
}

/// Ask the owner to close. Dismissal never requests `true`.
fn dismiss(on_open_change: EventHandler<bool>, via: Dismissal) {
    tracing::debug!(via = via.as_str(), "Dialog dismissed");
    on_open_change.call(false);
}

/// Properties for the Dialog component
#[derive(Clone, PartialEq, Props)]
pub struct DialogProps {
    /// Whether the dialog is visible
    pub open: bool,
    /// Called with `false` when the user dismisses the dialog
    pub on_open_change: EventHandler<bool>,
    /// Heading text
    pub title: String,
    /// Text under the heading
    #[props(default)]
    pub description: Option<String>,
    /// Optional additional CSS classes for the panel
    #[props(default)]
    pub class: Option<String>,
    /// Dialog body
    pub children: Element,
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// let mut open = use_signal(|| false);
///
/// rsx! {
///     Dialog {
///         open: open(),
///         on_open_change: move |next| open.set(next),
///         title: "Connect".to_string(),
///         p { "body" }
///     }
/// }
/// ```
#[component]
pub fn Dialog(props: DialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let panel_class = with_extra_class("dialog-content", props.class.as_deref());
    let on_open_change = props.on_open_change;

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onclick: move |_| dismiss(on_open_change, Dismissal::Backdrop),
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(via) = Dismissal::from_key(&evt.key()) {
                    dismiss(on_open_change, via);
                }
            },

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "dialog-title",
                onclick: move |e| e.stop_propagation(),

                div { class: "dialog-header",
                    h2 { id: "dialog-title", class: "dialog-title", "{props.title}" }
                    if let Some(description) = &props.description {
                        p { class: "dialog-description", "{description}" }
                    }
                    CloseButton { onclick: move |_| dismiss(on_open_change, Dismissal::CloseButton) }
                }

                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses() {
        assert_eq!(Dismissal::from_key(&Key::Escape), Some(Dismissal::Escape));
    }

    #[test]
    fn other_keys_do_not_dismiss() {
        assert_eq!(Dismissal::from_key(&Key::Enter), None);
        assert_eq!(Dismissal::from_key(&Key::Tab), None);
        assert_eq!(Dismissal::from_key(&Key::Character("q".to_string())), None);
    }

    #[test]
    fn dismissal_labels() {
        assert_eq!(Dismissal::Backdrop.as_str(), "backdrop");
        assert_eq!(Dismissal::CloseButton.as_str(), "close button");
        assert_eq!(Dismissal::Escape.as_str(), "escape");
    }
}
