pub mod not_found;
pub mod settings;
pub mod work_items;

use dioxus::prelude::*;

use not_found::NotFound;
use settings::Settings;
use work_items::WorkItemCreate;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    WorkItemCreate {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shared shell: top navbar plus the routed page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "app-shell",
            header { class: "app-navbar",
                span { class: "app-brand", "Quickitem" }
                nav { class: "app-nav",
                    Link { to: Route::WorkItemCreate {}, "New Work Item" }
                    Link { to: Route::Settings {}, "Settings" }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
