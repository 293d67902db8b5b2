//! Toast notice shown after a successful submission.

use std::time::Duration;

use dioxus::prelude::*;

use crate::context::use_notice;

/// How long a notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Corner notice, non-blocking.
///
/// Clears itself after [`NOTICE_TTL`] unless a newer notice replaced it.
#[component]
pub fn Toast() -> Element {
    let mut notice = use_notice();

    use_effect(move || {
        if let Some(current) = notice() {
            spawn(async move {
                tokio::time::sleep(NOTICE_TTL).await;
                let still_current = matches!(&*notice.peek(), Some(n) if n.id == current.id);
                if still_current {
                    notice.set(None);
                }
            });
        }
    });

    let Some(current) = notice() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "toast",
            role: "status",
            onclick: move |_| notice.set(None),
            span { class: "toast-icon", "\u{2713}" }
            "{current.message}"
        }
    }
}
