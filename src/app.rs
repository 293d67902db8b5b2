use std::sync::Arc;

use dioxus::prelude::*;
use leadform_core::{ChannelSink, LeadSink, TracingSink};

use crate::app_config;
use crate::components::Toast;
use crate::context::{Notice, SessionLeads, SharedSink};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page hosting the contact dialog
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, the reporting sink and the dialog text.
#[component]
pub fn App() -> Element {
    let config = app_config();
    let mut session_leads: Signal<SessionLeads> = use_signal(SessionLeads::default);
    let notice: Signal<Option<Notice>> = use_signal(|| None);

    // Submissions are queued by the form and drained here, off the click handler
    let sink: SharedSink = use_hook(|| {
        let (sink, mut rx) = ChannelSink::new();
        spawn(async move {
            while let Some(submission) = rx.recv().await {
                match TracingSink::new().report(&submission) {
                    Ok(()) => session_leads.write().0 += 1,
                    Err(e) => tracing::error!(id = %submission.id, "Failed to log submission: {}", e),
                }
            }
            tracing::debug!("Submission queue closed");
        });
        Arc::new(sink) as SharedSink
    });

    use_context_provider(|| sink);
    use_context_provider(|| config.locale.copy());
    use_context_provider(|| notice);
    use_context_provider(|| session_leads);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        Toast {}
    }
}
