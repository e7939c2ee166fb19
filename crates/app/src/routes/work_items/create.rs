use dioxus::prelude::*;
use shared_types::{
    parse_parent_id, CreatedWorkItem, Credentials, WorkItemDraft, DEFAULT_WORK_ITEM_TYPE,
    WORK_ITEM_TYPES,
};
use shared_ui::components::{
    Button, Card, CardContent, CardHeader, Form, FormSelect, Input, PageHeader, Separator,
    Textarea,
};
use shared_ui::{use_toast, ToastOptions, Toasts};

use super::submit::{self, Notifier, SubmitOutcome, TrackedClient, WorkItemClient};
use crate::routes::Route;
use crate::use_settings;

/// Calls the create server function. The page wraps this in a
/// `TrackedClient` so the in-flight flag spans exactly the network call.
struct ServerClient;

impl WorkItemClient for ServerClient {
    async fn create(
        &mut self,
        credentials: Credentials,
        draft: WorkItemDraft,
    ) -> Result<CreatedWorkItem, String> {
        server::api::create_work_item(credentials, draft)
            .await
            .map_err(|e| submit::friendly_message(&e))
    }
}

/// Routes notifications to the toast stack.
struct ToastNotifier {
    toast: Toasts,
}

impl Notifier for ToastNotifier {
    fn success(&mut self, message: String) {
        self.toast.success(message, ToastOptions::new());
    }
    fn error(&mut self, message: String) {
        self.toast.error(message, ToastOptions::new());
    }
}

/// The work item entry form.
#[component]
pub fn WorkItemCreate() -> Element {
    let ctx = use_settings();
    let toast = use_toast();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut acceptance_criteria = use_signal(String::new);
    let mut item_type = use_signal(|| DEFAULT_WORK_ITEM_TYPE.to_string());
    let mut parent_input = use_signal(String::new);
    let mut project_config_id = use_signal(|| None::<String>);
    let in_flight = use_signal(|| false);

    // Seed the project selection from the configuration chosen on the
    // settings page, once settings arrive.
    use_effect(move || {
        let selected = ctx.settings.read().selected_config_id.clone();
        if project_config_id.read().is_none() {
            if let Some(id) = selected {
                project_config_id.set(Some(id));
            }
        }
    });

    let handle_submit = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let settings = ctx.settings.read().clone();
        let selected = project_config_id.read().clone();
        let draft = WorkItemDraft {
            title: title.read().clone(),
            description: description.read().clone(),
            acceptance_criteria: acceptance_criteria.read().clone(),
            item_type: item_type.read().clone(),
            parent_id: parse_parent_id(&parent_input.read()),
        };

        spawn(async move {
            let mut flag = in_flight;
            let mut client = TrackedClient::new(ServerClient, move |busy| flag.set(busy));
            let mut notifier = ToastNotifier { toast };
            let outcome = submit::submit_draft(
                &settings,
                selected.as_deref(),
                &draft,
                &mut client,
                &mut notifier,
            )
            .await;

            if let SubmitOutcome::Created(_) = outcome {
                let reset = draft.reset_keeping_type();
                title.set(reset.title);
                description.set(reset.description);
                acceptance_criteria.set(reset.acceptance_criteria);
                item_type.set(reset.item_type);
                parent_input.set(String::new());
            }
        });
    };

    let settings = ctx.settings.read().clone();
    let configured = settings.is_configured();
    let busy = *in_flight.read();
    let no_project = project_config_id.read().is_none();

    rsx! {
        div { class: "container",
            PageHeader {
                title: "New Work Item",
                subtitle: "Straight to the board: one form, one create call.",
            }

            if !configured {
                div { class: "notice",
                    "Azure DevOps is not configured yet. "
                    Link { to: Route::Settings {}, "Open settings" }
                }
            }

            Card {
                CardHeader { "Work Item Details" }
                CardContent {
                    Form {
                        onsubmit: handle_submit,

                        Input {
                            label: "Title *",
                            value: title.read().clone(),
                            on_input: move |evt: FormEvent| title.set(evt.value()),
                            placeholder: "Short summary of the work",
                        }

                        Textarea {
                            label: "Description",
                            value: description.read().clone(),
                            on_input: move |evt: FormEvent| description.set(evt.value()),
                            placeholder: "What needs to happen and why...",
                        }

                        Textarea {
                            label: "Acceptance Criteria",
                            value: acceptance_criteria.read().clone(),
                            on_input: move |evt: FormEvent| acceptance_criteria.set(evt.value()),
                            placeholder: "How we know it is done...",
                        }

                        Separator {}

                        FormSelect {
                            label: "Type *",
                            value: item_type.read().clone(),
                            onchange: move |evt: Event<FormData>| item_type.set(evt.value()),
                            for t in WORK_ITEM_TYPES {
                                option { value: *t, "{t}" }
                            }
                        }

                        Input {
                            label: "Parent ID",
                            value: parent_input.read().clone(),
                            on_input: move |evt: FormEvent| parent_input.set(evt.value()),
                            placeholder: "Existing work item id (optional)",
                        }

                        FormSelect {
                            label: "Project *",
                            value: project_config_id.read().clone().unwrap_or_default(),
                            onchange: move |evt: Event<FormData>| {
                                let value = evt.value();
                                project_config_id.set(if value.is_empty() { None } else { Some(value) });
                            },
                            option { value: "", "Select a project" }
                            for config in settings.project_configs.iter() {
                                option { value: config.id.clone(), "{config.name}" }
                            }
                        }

                        Separator {}

                        Button {
                            button_type: "submit",
                            disabled: busy || !configured || no_project,
                            if busy { "Creating..." } else { "Create Work Item" }
                        }
                    }
                }
            }
        }
    }
}
