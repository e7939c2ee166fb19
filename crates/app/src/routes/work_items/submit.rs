use dioxus::prelude::ServerFnError;
use shared_types::{AppError, AppSettings, CreatedWorkItem, Credentials, WorkItemDraft};
use std::fmt;

/// Local guard failures, checked in order before any network activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    NotConfigured,
    MissingTitle,
    NoProjectSelected,
    UnknownProject,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotConfigured => {
                write!(f, "Please configure Azure DevOps settings first")
            }
            ValidationError::MissingTitle => write!(f, "Title is required"),
            ValidationError::NoProjectSelected => write!(f, "Please select a project"),
            ValidationError::UnknownProject => write!(f, "Invalid project name"),
        }
    }
}

/// Run the submit guards. On success, returns the one-shot credentials for
/// the chosen project configuration.
pub fn validate(
    settings: &AppSettings,
    project_config_id: Option<&str>,
    draft: &WorkItemDraft,
) -> Result<Credentials, ValidationError> {
    if !settings.is_configured() {
        return Err(ValidationError::NotConfigured);
    }
    if draft.title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    let id = project_config_id
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::NoProjectSelected)?;
    let config = settings
        .config_by_id(id)
        .ok_or(ValidationError::UnknownProject)?;

    Ok(Credentials::for_config(
        &settings.personal_access_token,
        config,
    ))
}

/// User-facing notification sink. The page wires this to the toast handle;
/// tests substitute a recording double.
pub trait Notifier {
    fn success(&mut self, message: String);
    fn error(&mut self, message: String);
}

/// The create-work-item operation. The page wires this to the server
/// function; tests substitute a recording double.
#[allow(async_fn_in_trait)]
pub trait WorkItemClient {
    async fn create(
        &mut self,
        credentials: Credentials,
        draft: WorkItemDraft,
    ) -> Result<CreatedWorkItem, String>;
}

/// Wraps a client so a busy flag spans exactly the create call. Guard
/// rejections happen before the client is touched, so the flag never moves
/// for them.
pub struct TrackedClient<C, F> {
    inner: C,
    set_busy: F,
}

impl<C, F> TrackedClient<C, F>
where
    C: WorkItemClient,
    F: FnMut(bool),
{
    pub fn new(inner: C, set_busy: F) -> Self {
        Self { inner, set_busy }
    }
}

impl<C, F> WorkItemClient for TrackedClient<C, F>
where
    C: WorkItemClient,
    F: FnMut(bool),
{
    async fn create(
        &mut self,
        credentials: Credentials,
        draft: WorkItemDraft,
    ) -> Result<CreatedWorkItem, String> {
        (self.set_busy)(true);
        let result = self.inner.create(credentials, draft).await;
        (self.set_busy)(false);
        result
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A guard failed; no network call happened.
    Rejected,
    /// The work item was created; the form should reset (keeping the type).
    Created(CreatedWorkItem),
    /// The remote call failed; the draft is preserved for a retry.
    Failed,
}

/// One full submission attempt: guards, at most one create call, exactly
/// one notification.
pub async fn submit_draft<C: WorkItemClient, N: Notifier>(
    settings: &AppSettings,
    project_config_id: Option<&str>,
    draft: &WorkItemDraft,
    client: &mut C,
    notify: &mut N,
) -> SubmitOutcome {
    let credentials = match validate(settings, project_config_id, draft) {
        Ok(credentials) => credentials,
        Err(reason) => {
            notify.error(reason.to_string());
            return SubmitOutcome::Rejected;
        }
    };

    match client.create(credentials, draft.clone()).await {
        Ok(item) => {
            notify.success(format!("Work item #{} created", item.id));
            SubmitOutcome::Created(item)
        }
        Err(message) => {
            notify.error(message);
            SubmitOutcome::Failed
        }
    }
}

/// Recover the human-readable message from a server function error. Server
/// functions serialize `AppError` as JSON; fall back to the raw text.
pub fn friendly_message(err: &ServerFnError) -> String {
    let raw = err.to_string();
    if let Some(start) = raw.find('{') {
        if let Ok(app_err) = serde_json::from_str::<AppError>(&raw[start..]) {
            return app_err.message;
        }
    }
    raw
}
