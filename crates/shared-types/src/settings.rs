use serde::{Deserialize, Serialize};

/// A named pairing of organization and project identifying where a work
/// item will be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub project: String,
}

/// Application settings: the shared personal access token plus the list of
/// project configurations. Persisted by the server-side settings store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub personal_access_token: String,
    // Scalar fields stay ahead of the array so TOML serialization emits
    // them before the [[project_configs]] tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_config_id: Option<String>,
    #[serde(default)]
    pub project_configs: Vec<ProjectConfig>,
}

impl AppSettings {
    /// True only when both a token and at least one project configuration
    /// exist — the form refuses to submit otherwise.
    pub fn is_configured(&self) -> bool {
        !self.personal_access_token.is_empty() && !self.project_configs.is_empty()
    }

    pub fn config_by_id(&self, id: &str) -> Option<&ProjectConfig> {
        self.project_configs.iter().find(|c| c.id == id)
    }

    /// The configuration chosen on the settings page, if it still exists.
    pub fn selected_config(&self) -> Option<&ProjectConfig> {
        self.selected_config_id
            .as_deref()
            .and_then(|id| self.config_by_id(id))
    }
}

/// Ephemeral credentials for one create call: the global token combined
/// with the organization/project of the chosen configuration. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub personal_access_token: String,
    pub organization: String,
    pub project: String,
}

impl Credentials {
    pub fn for_config(token: &str, config: &ProjectConfig) -> Self {
        Self {
            personal_access_token: token.to_string(),
            organization: config.organization.clone(),
            project: config.project.clone(),
        }
    }
}
