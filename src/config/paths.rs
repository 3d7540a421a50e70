use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "salon";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    profiles_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Ok(Self::at(config_root.join(APP_DIR)))
    }

    pub fn at(config_dir: PathBuf) -> Self {
        let profiles_dir = config_dir.join("profiles");
        Self {
            config_dir,
            profiles_dir,
        }
    }

    pub fn ensure_dirs(&self) -> AppResult<()> {
        fs::create_dir_all(&self.profiles_dir)?;
        Ok(())
    }

    pub fn settings_file(&self, profile: &str) -> PathBuf {
        self.profiles_dir.join(format!("{profile}.json"))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
