use shared_types::{AppError, AppSettings};
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};

static STORE: OnceLock<RwLock<AppSettings>> = OnceLock::new();

/// Default settings file, relative to the working directory.
const SETTINGS_PATH: &str = "settings.toml";

/// Resolve the settings file path. `QUICKITEM_SETTINGS_PATH` overrides the
/// default, which keeps tests isolated from a developer's real settings.
pub fn settings_path() -> PathBuf {
    std::env::var("QUICKITEM_SETTINGS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(SETTINGS_PATH))
}

/// Read settings from `path`.
///
/// A missing file is normal on first run and yields defaults; a malformed
/// file is logged and also yields defaults so the app still starts.
pub fn read_settings_file(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<AppSettings>(&contents).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to parse settings file, starting unconfigured"
            );
            AppSettings::default()
        }),
        Err(e) => {
            tracing::info!(
                path = %path.display(),
                error = %e,
                "No settings file found, starting unconfigured"
            );
            AppSettings::default()
        }
    }
}

/// Serialize settings as TOML and write them to `path`.
pub fn write_settings_file(path: &Path, settings: &AppSettings) -> Result<(), AppError> {
    let text = toml::to_string_pretty(settings)
        .map_err(|e| AppError::internal(format!("Failed to serialize settings: {e}")))?;
    std::fs::write(path, text)
        .map_err(|e| AppError::internal(format!("Failed to write {}: {e}", path.display())))
}

/// Read the settings file into the process-wide cache. Safe to call
/// multiple times — only the first call has effect.
pub fn load_settings() {
    STORE.get_or_init(|| RwLock::new(read_settings_file(&settings_path())));
}

fn store() -> &'static RwLock<AppSettings> {
    STORE.get_or_init(|| RwLock::new(AppSettings::default()))
}

/// A clone of the cached settings.
pub fn settings() -> AppSettings {
    store().read().map(|s| s.clone()).unwrap_or_default()
}

/// Persist new settings to disk and update the cache.
pub fn store_settings(settings: AppSettings) -> Result<(), AppError> {
    let path = settings_path();
    write_settings_file(&path, &settings)?;

    if let Ok(mut guard) = store().write() {
        *guard = settings;
    }
    tracing::info!(path = %path.display(), "Settings saved");
    Ok(())
}
