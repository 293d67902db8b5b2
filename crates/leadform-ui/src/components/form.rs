//! Form wrapper that keeps submission inside the app.

use dioxus::prelude::*;

use super::input::with_extra_class;

/// `<form>` that prevents the webview's default submit navigation.
///
/// The native `required` checks still run before `onsubmit` fires.
#[component]
pub fn Form(
    /// Called after default navigation has been prevented
    onsubmit: EventHandler<FormEvent>,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let class = with_extra_class("form", class.as_deref());

    rsx! {
        form {
            class: "{class}",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            {children}
        }
    }
}
