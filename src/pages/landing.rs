//! Landing page - hosts the contact dialog.
//!
//! Owns the dialog's `open` flag; the form only asks to close.

use dioxus::prelude::*;

use crate::app_config;
use crate::components::ContactForm;
use crate::context::{use_form_copy, use_session_leads};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let copy = use_form_copy();
    let session_leads = use_session_leads();
    let mut open = use_signal(|| app_config().start_open);

    let on_open_change = move |next: bool| {
        tracing::debug!(open = next, "Contact dialog visibility changed");
        open.set(next);
    };

    let delivered = session_leads().0;

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "{copy.title}" }
                p { class: "tagline", "{copy.description}" }

                button {
                    class: "btn-primary btn-open",
                    r#type: "button",
                    onclick: move |_| open.set(true),
                    "{copy.open_dialog}"
                }

                if delivered > 0 {
                    p { class: "session-count", "\u{2713} {delivered}" }
                }
            }

            ContactForm {
                open: open(),
                on_open_change: on_open_change,
            }
        }
    }
}
