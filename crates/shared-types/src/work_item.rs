use serde::{Deserialize, Serialize};

// ── Validation constants ────────────────────────────────────────────

/// Work item types accepted by the form, matching the process template
/// configured on the target Azure DevOps projects.
pub const WORK_ITEM_TYPES: &[&str] = &[
    "Epic", "Feature", "PBI Feature", "PBI Spike", "Task", "Theme", "User Story",
];

/// Default type pre-selected in the form and preserved across submissions.
pub const DEFAULT_WORK_ITEM_TYPE: &str = "PBI Feature";

/// Check whether a type string is a valid work item type.
pub fn is_valid_work_item_type(s: &str) -> bool {
    WORK_ITEM_TYPES.contains(&s)
}

/// Parse the parent-id text input.
///
/// Empty or whitespace-only input means "no parent". Unparseable input is
/// also treated as absent — the remote API is the authority on whether a
/// parent id actually exists.
pub fn parse_parent_id(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

// ── Draft and result types ──────────────────────────────────────────

/// The in-progress work item record held in form state and sent to the
/// create call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItemDraft {
    pub title: String,
    pub description: String,
    pub acceptance_criteria: String,
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl Default for WorkItemDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            acceptance_criteria: String::new(),
            item_type: DEFAULT_WORK_ITEM_TYPE.to_string(),
            parent_id: None,
        }
    }
}

impl WorkItemDraft {
    /// The post-success reset: everything cleared except the item type, so
    /// entering several items of the same type in a row stays fast.
    pub fn reset_keeping_type(&self) -> Self {
        Self {
            item_type: self.item_type.clone(),
            ..Self::default()
        }
    }
}

/// Result of a successful create call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedWorkItem {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
