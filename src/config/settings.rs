use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_base: Option<String>,
}

impl Settings {
    pub fn with_override(mut self, api_base: Option<String>) -> Self {
        let api_base = api_base
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        if api_base.is_some() {
            self.api_base = api_base;
        }
        self
    }

    pub fn api_base(&self) -> AppResult<&str> {
        self.api_base
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "missing api base url. pass --api-base, set SALON_API_BASE, or run `salon config set-base <url>`"
                        .to_string(),
                )
            })
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: PathBuf, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(&path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}
