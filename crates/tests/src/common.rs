use shared_types::{AppSettings, ProjectConfig};
use std::path::PathBuf;

/// A unique settings path under the system temp dir, so tests never touch
/// each other's files or a developer's real settings.
pub fn temp_settings_path() -> PathBuf {
    std::env::temp_dir().join(format!("quickitem-settings-{}.toml", uuid::Uuid::new_v4()))
}

pub fn sample_settings() -> AppSettings {
    AppSettings {
        personal_access_token: "TOKEN".to_string(),
        selected_config_id: Some("p1".to_string()),
        project_configs: vec![
            ProjectConfig {
                id: "p1".to_string(),
                name: "Main board".to_string(),
                organization: "contoso".to_string(),
                project: "Platform".to_string(),
            },
            ProjectConfig {
                id: "p2".to_string(),
                name: "Side project".to_string(),
                organization: "contoso".to_string(),
                project: "Tools".to_string(),
            },
        ],
    }
}
