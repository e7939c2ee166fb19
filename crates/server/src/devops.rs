use serde::Deserialize;
use shared_types::{AppError, CreatedWorkItem, Credentials, WorkItemDraft};

/// Azure DevOps REST API version used for work item tracking calls.
const API_VERSION: &str = "7.1";

// --- Request construction ---

/// URL for the work item create endpoint. The type lives in the path,
/// prefixed with `$` and percent-encoded ("PBI Feature" → "$PBI%20Feature").
pub fn create_url(organization: &str, project: &str, item_type: &str) -> String {
    format!(
        "https://dev.azure.com/{}/{}/_apis/wit/workitems/${}?api-version={}",
        urlencoding::encode(organization),
        urlencoding::encode(project),
        urlencoding::encode(item_type),
        API_VERSION
    )
}

/// Build the JSON Patch document for a work item create.
///
/// Title is always present (the form guards it). Description and acceptance
/// criteria are included only when non-empty. A parent id becomes a
/// Hierarchy-Reverse relation pointing at the parent work item.
pub fn patch_document(draft: &WorkItemDraft, organization: &str) -> serde_json::Value {
    let mut ops = vec![serde_json::json!({
        "op": "add",
        "path": "/fields/System.Title",
        "value": draft.title,
    })];

    if !draft.description.is_empty() {
        ops.push(serde_json::json!({
            "op": "add",
            "path": "/fields/System.Description",
            "value": draft.description,
        }));
    }

    if !draft.acceptance_criteria.is_empty() {
        ops.push(serde_json::json!({
            "op": "add",
            "path": "/fields/Microsoft.VSTS.Common.AcceptanceCriteria",
            "value": draft.acceptance_criteria,
        }));
    }

    if let Some(parent_id) = draft.parent_id {
        ops.push(serde_json::json!({
            "op": "add",
            "path": "/relations/-",
            "value": {
                "rel": "System.LinkTypes.Hierarchy-Reverse",
                "url": format!(
                    "https://dev.azure.com/{}/_apis/wit/workItems/{}",
                    urlencoding::encode(organization),
                    parent_id
                ),
            },
        }));
    }

    serde_json::Value::Array(ops)
}

// --- Response shapes ---

#[derive(Debug, Deserialize)]
struct WorkItemResponse {
    id: i64,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

// --- Create call ---

/// Create a work item through the Azure DevOps REST API.
#[tracing::instrument(skip(credentials), fields(organization = %credentials.organization, project = %credentials.project))]
pub async fn create_work_item(
    credentials: &Credentials,
    draft: &WorkItemDraft,
) -> Result<CreatedWorkItem, AppError> {
    let url = create_url(
        &credentials.organization,
        &credentials.project,
        &draft.item_type,
    );
    let body = patch_document(draft, &credentials.organization);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        // PAT auth: empty username, token as password
        .basic_auth("", Some(&credentials.personal_access_token))
        .header("Content-Type", "application/json-patch+json")
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::remote(format!("Azure DevOps request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        return Err(match status.as_u16() {
            401 | 403 => AppError::unauthorized(format!(
                "Azure DevOps rejected the personal access token: {message}"
            )),
            404 => AppError::not_found(format!("Organization or project not found: {message}")),
            _ => AppError::remote(format!("Azure DevOps API error ({status}): {message}")),
        });
    }

    let created: WorkItemResponse = response
        .json()
        .await
        .map_err(|e| AppError::remote(format!("Unexpected Azure DevOps response: {e}")))?;

    tracing::info!(id = created.id, item_type = %draft.item_type, "Work item created");
    Ok(CreatedWorkItem {
        id: created.id,
        url: created.url,
    })
}
