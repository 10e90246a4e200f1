use std::path::Path;

use anyhow::Context;

use crate::models::settings::AppSettings;

/// Reads settings from `path`; a missing file yields the defaults.
pub fn load_settings(path: &Path) -> anyhow::Result<AppSettings> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Ok(AppSettings::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading settings from {}", path.display()))
        }
    };

    serde_json::from_str(&raw).with_context(|| format!("parsing settings in {}", path.display()))
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
    Ok(())
}
