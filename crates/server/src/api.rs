use dioxus::prelude::*;
use shared_types::{AppSettings, CreatedWorkItem, Credentials, WorkItemDraft};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Get the current application settings.
#[server]
pub async fn get_settings() -> Result<AppSettings, ServerFnError> {
    Ok(crate::config::settings())
}

/// Persist new application settings.
#[server]
pub async fn save_settings(settings: AppSettings) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    for config in &settings.project_configs {
        if config.name.is_empty() || config.organization.is_empty() || config.project.is_empty() {
            return Err(AppError::validation(
                "Project configurations need a name, organization and project",
            )
            .into_server_fn_error());
        }
    }

    crate::config::store_settings(settings).map_err(|e| e.into_server_fn_error())
}

/// Create a work item in Azure DevOps using one-shot credentials resolved
/// by the form from the chosen project configuration.
#[cfg_attr(feature = "server", tracing::instrument(skip(credentials)))]
#[server]
pub async fn create_work_item(
    credentials: Credentials,
    draft: WorkItemDraft,
) -> Result<CreatedWorkItem, ServerFnError> {
    use shared_types::{is_valid_work_item_type, AppError};

    if draft.title.is_empty() {
        return Err(AppError::validation("Title is required").into_server_fn_error());
    }
    if !is_valid_work_item_type(&draft.item_type) {
        return Err(
            AppError::bad_request(format!("Unknown work item type: {}", draft.item_type))
                .into_server_fn_error(),
        );
    }

    crate::devops::create_work_item(&credentials, &draft)
        .await
        .map_err(|e| e.into_server_fn_error())
}
