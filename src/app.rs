use dioxus::prelude::*;
use linkpage_core::{build_page, PageContext, PageState, SystemClock};

use crate::components::PageShell;
use crate::context::get_launch_options;
use crate::platform::{probe_environment, Environment};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page state, then runs the two-phase
/// startup once: probe the webview, load the configuration, compose.
#[component]
pub fn App() -> Element {
    let mut page: Signal<PageState> = use_signal(|| PageState::Loading);
    let mut environment: Signal<Environment> = use_signal(Environment::default);

    use_context_provider(|| page);
    use_context_provider(|| environment);

    // Load configuration on mount
    use_effect(move || {
        spawn(async move {
            let env = probe_environment().await;
            environment.set(env.clone());

            let options = get_launch_options();
            let ctx = PageContext::default()
                .with_device_pixel_ratio(env.device_pixel_ratio)
                .with_user_agent(env.user_agent);

            let state = build_page(
                &options.source,
                options.page_url.as_deref(),
                ctx,
                &SystemClock,
            )
            .await;

            match &state {
                PageState::Ready(view) => tracing::info!(
                    "Rendered '{}' with {} diagnostic(s)",
                    view.header.title,
                    view.diagnostics.len()
                ),
                PageState::Failed(diagnostic) => tracing::error!("{}", diagnostic.message),
                PageState::Loading => {}
            }
            page.set(state);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        PageShell {}
    }
}
