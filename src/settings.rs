//! Persisted default inputs, round-tripped through a small JSON file.

use crate::plan::PlanInputs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Resolve the settings file path: `PLANSIM_SETTINGS` wins, then
/// `$HOME/.config/plansim/settings.json`, then the current directory.
pub fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os("PLANSIM_SETTINGS") {
        return PathBuf::from(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".config")
            .join("plansim")
            .join("settings.json"),
        None => PathBuf::from("plansim-settings.json"),
    }
}

/// Load saved inputs, or `None` when no settings file exists yet.
pub fn load(path: &Path) -> Result<Option<PlanInputs>, SettingsError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let inputs = serde_json::from_str(&contents)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(Some(inputs))
}

pub fn save(path: &Path, inputs: &PlanInputs) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(inputs)?;
    fs::write(path, json)?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

/// Remove the settings file. Returns `false` when there was none.
pub fn clear(path: &Path) -> Result<bool, SettingsError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}
