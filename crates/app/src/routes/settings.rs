use dioxus::prelude::*;
use shared_types::{AppSettings, ProjectConfig};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, Input, PageHeader, Separator,
};
use shared_ui::{use_toast, ToastOptions};

use crate::use_settings;

/// Whether fetched settings carry anything worth copying into the editing
/// signals. A token-less file with saved projects must still hydrate, or a
/// later save would overwrite the stored configurations with the empty
/// editing copy.
fn has_stored_values(settings: &AppSettings) -> bool {
    *settings != AppSettings::default()
}

/// Settings page: the personal access token plus the list of project
/// configurations the form can target.
#[component]
pub fn Settings() -> Element {
    let ctx = use_settings();
    let toast = use_toast();

    let mut token = use_signal(String::new);
    let mut configs = use_signal(Vec::<ProjectConfig>::new);
    let mut selected_id = use_signal(|| None::<String>);

    let mut new_name = use_signal(String::new);
    let mut new_organization = use_signal(String::new);
    let mut new_project = use_signal(String::new);

    let mut saving = use_signal(|| false);

    // Hydrate the local editing copy once from the shared settings.
    let mut hydrated = use_signal(|| false);
    use_effect(move || {
        let settings = ctx.settings.read().clone();
        if !hydrated() && has_stored_values(&settings) {
            hydrated.set(true);
            token.set(settings.personal_access_token.clone());
            configs.set(settings.project_configs.clone());
            selected_id.set(settings.selected_config_id.clone());
        }
    });

    let mut add_config = move || {
        let name = new_name.read().trim().to_string();
        let organization = new_organization.read().trim().to_string();
        let project = new_project.read().trim().to_string();
        if name.is_empty() || organization.is_empty() || project.is_empty() {
            toast.error(
                "Name, organization and project are all required".to_string(),
                ToastOptions::new(),
            );
            return;
        }

        let config = ProjectConfig {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            organization,
            project,
        };
        // First configuration becomes the selected one.
        if selected_id.read().is_none() {
            selected_id.set(Some(config.id.clone()));
        }
        configs.write().push(config);
        new_name.set(String::new());
        new_organization.set(String::new());
        new_project.set(String::new());
    };

    let handle_save = move |_| {
        if *saving.read() {
            return;
        }
        let settings = AppSettings {
            personal_access_token: token.read().clone(),
            selected_config_id: selected_id.read().clone(),
            project_configs: configs.read().clone(),
        };

        spawn(async move {
            saving.set(true);
            match server::api::save_settings(settings).await {
                Ok(()) => {
                    ctx.refresh();
                    toast.success("Settings saved".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(format!("{e}"), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let config_list = configs.read().clone();

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Settings",
                subtitle: "The token and projects the form creates items with.",
            }

            Card {
                CardHeader { "Azure DevOps" }
                CardContent {
                    div { class: "settings-form",
                        Input {
                            label: "Personal Access Token",
                            input_type: "password",
                            value: token.read().clone(),
                            on_input: move |evt: FormEvent| token.set(evt.value()),
                            placeholder: "PAT with work item read/write scope",
                        }

                        Separator {}

                        h3 { class: "settings-section-title", "Projects" }

                        if config_list.is_empty() {
                            p { class: "settings-empty", "No projects configured yet." }
                        }

                        for config in config_list.iter().cloned() {
                            div { key: "{config.id}", class: "project-row",
                                label { class: "project-row-pick",
                                    input {
                                        r#type: "radio",
                                        name: "selected-project",
                                        checked: selected_id.read().as_deref() == Some(config.id.as_str()),
                                        onchange: {
                                            let id = config.id.clone();
                                            move |_| selected_id.set(Some(id.clone()))
                                        },
                                    }
                                    span { class: "project-row-name", "{config.name}" }
                                    span { class: "project-row-detail", "{config.organization} / {config.project}" }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: {
                                        let id = config.id.clone();
                                        move |_| {
                                            configs.write().retain(|c| c.id != id);
                                            if selected_id.read().as_deref() == Some(id.as_str()) {
                                                let fallback = configs.read().first().map(|c| c.id.clone());
                                                selected_id.set(fallback);
                                            }
                                        }
                                    },
                                    "Remove"
                                }
                            }
                        }

                        Separator {}

                        div { class: "project-add",
                            Input {
                                label: "Name",
                                value: new_name.read().clone(),
                                on_input: move |evt: FormEvent| new_name.set(evt.value()),
                                placeholder: "e.g., Main board",
                            }
                            Input {
                                label: "Organization",
                                value: new_organization.read().clone(),
                                on_input: move |evt: FormEvent| new_organization.set(evt.value()),
                                placeholder: "e.g., contoso",
                            }
                            Input {
                                label: "Project",
                                value: new_project.read().clone(),
                                on_input: move |evt: FormEvent| new_project.set(evt.value()),
                                placeholder: "e.g., Platform",
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| add_config(),
                                "Add Project"
                            }
                        }

                        Separator {}

                        Button {
                            disabled: *saving.read(),
                            onclick: handle_save,
                            if *saving.read() { "Saving..." } else { "Save Settings" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_projects_without_a_token_still_hydrate() {
        // A file can hold projects but no token yet; skipping hydration
        // here would let a later save wipe the stored projects.
        let settings = AppSettings {
            personal_access_token: String::new(),
            selected_config_id: Some("p1".to_string()),
            project_configs: vec![ProjectConfig {
                id: "p1".to_string(),
                name: "Main board".to_string(),
                organization: "org".to_string(),
                project: "proj".to_string(),
            }],
        };
        assert!(has_stored_values(&settings));
    }

    #[test]
    fn token_without_projects_hydrates() {
        let settings = AppSettings {
            personal_access_token: "TOKEN".to_string(),
            ..AppSettings::default()
        };
        assert!(has_stored_values(&settings));
    }

    #[test]
    fn pristine_settings_do_not_hydrate() {
        assert!(!has_stored_values(&AppSettings::default()));
    }
}
