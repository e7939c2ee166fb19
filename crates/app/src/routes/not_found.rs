use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p {
                "The page "
                code { "{path}" }
                " could not be found."
            }
            Link { to: Route::WorkItemCreate {}, "Back to the form" }
        }
    }
}
