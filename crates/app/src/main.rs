use dioxus::prelude::*;
use shared_types::AppSettings;

mod routes;
use routes::Route;

const THEME_CSS: Asset = asset!("/assets/theme.css");

/// Application settings shared across routes. The form reads it to decide
/// whether submission is possible; the settings page refreshes it after a
/// save.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: Signal<AppSettings>,
}

impl SettingsContext {
    /// Re-fetch settings from the server and update the shared signal.
    pub fn refresh(mut self) {
        spawn(async move {
            match server::api::get_settings().await {
                Ok(fresh) => self.settings.set(fresh),
                Err(e) => tracing::warn!(error = %e, "Failed to load settings"),
            }
        });
    }
}

/// Read the shared settings context.
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
}

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let _ = dotenvy::dotenv();
        server::telemetry::init_tracing();
        server::config::load_settings();

        Ok(dioxus::server::router(App))
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Settings are fetched server-side on first render so the form knows
    // immediately whether the app is configured.
    let settings_resource =
        use_server_future(move || async move { server::api::get_settings().await })?;

    let initial = settings_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(AppSettings::default()))
        .unwrap_or_default();

    let ctx = use_context_provider(|| SettingsContext {
        settings: Signal::new(initial),
    });

    // Pick up external edits to the settings file after hydration.
    use_effect(move || {
        ctx.refresh();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "app-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
