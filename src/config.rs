use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::settings::Settings;
use crate::error::{AppError, AppResult};

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Directory holding the settings file. `SPRIG_CONFIG_DIR` overrides the
/// default of `$HOME/.config/sprig`.
pub fn config_directory() -> AppResult<PathBuf> {
    if let Some(dir) = env::var_os("SPRIG_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = env::var_os("HOME")
        .ok_or_else(|| AppError::Configuration("HOME is not set".to_string()))?;
    Ok(PathBuf::from(home).join(".config").join("sprig"))
}

pub fn settings_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(SETTINGS_FILE_NAME))
}

/// Loads settings from `path`, falling back to defaults when the file
/// does not exist yet. Loaded settings are validated before use.
pub fn load_settings_from(path: &Path) -> AppResult<Settings> {
    let settings = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str::<Settings>(&contents)
            .map_err(|err| AppError::Configuration(format!("invalid settings file: {err}")))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(err) => return Err(AppError::Io(err)),
    };
    settings.validate()?;
    Ok(settings)
}

pub fn load_settings() -> AppResult<Settings> {
    load_settings_from(&settings_file_path()?)
}

/// Validates and writes settings to `path`, creating parent directories.
pub fn save_settings_to(settings: &Settings, path: &Path) -> AppResult<()> {
    settings.validate()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(settings)
        .map_err(|err| AppError::Configuration(format!("failed to encode settings: {err}")))?;
    fs::write(path, data)?;
    Ok(())
}

pub fn save_settings(settings: &Settings) -> AppResult<()> {
    save_settings_to(settings, &settings_file_path()?)
}
