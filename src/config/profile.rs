use crate::error::{AppError, AppResult};

pub const DEFAULT_PROFILE: &str = "default";

// Profile names double as file names under the profiles directory.
pub fn resolve_profile(requested: &str) -> AppResult<String> {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PROFILE.to_string());
    }

    if trimmed.contains(['/', '\\']) || trimmed.starts_with('.') {
        return Err(AppError::InvalidInput(format!(
            "profile name `{trimmed}` must not contain path separators or start with a dot"
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_profile_falls_back_to_default() {
        assert_eq!(resolve_profile("  ").ok().as_deref(), Some(DEFAULT_PROFILE));
    }

    #[test]
    fn trims_profile_name() {
        assert_eq!(resolve_profile(" staging ").ok().as_deref(), Some("staging"));
    }

    #[test]
    fn rejects_path_like_names() {
        assert!(resolve_profile("../etc").is_err());
        assert!(resolve_profile("a/b").is_err());
    }
}
