use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    /// Secondary line rendered under the title.
    #[props(default)]
    pub subtitle: Option<String>,
    /// Action buttons, aligned to the right edge of the header row.
    #[props(default)]
    pub actions: Option<Element>,
}

/// Header row for a routed page: title and optional subtitle on the left,
/// actions on the right.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{props.title}" }
                if let Some(subtitle) = props.subtitle.as_ref() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            if let Some(actions) = props.actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}
