use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A persistent browser profile directory.
///
/// The directory holds cookies and session state owned entirely by Chrome;
/// reusing it across runs is what keeps the Google login alive. It is created
/// on first use and never deleted by us.
pub struct ProfileDir {
    path: PathBuf,
}

impl ProfileDir {
    /// Resolve a raw profile path, expanding a leading `~`, and create the
    /// directory if it does not exist yet.
    pub fn resolve(raw: &str) -> Result<Self> {
        let path = expand_user(raw, dirs::home_dir())?;

        if !path.exists() {
            tracing::debug!("Creating profile directory: {}", path.display());
            std::fs::create_dir_all(&path)?;
        }

        Ok(Self { path })
    }

    /// The resolved profile directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn expand_user(raw: &str, home: Option<PathBuf>) -> Result<PathBuf> {
    let no_home = || Error::Browser("Could not determine home directory".to_string());

    if raw == "~" {
        return home.ok_or_else(no_home);
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return Ok(home.ok_or_else(no_home)?.join(rest));
    }
    Ok(PathBuf::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_user_with_tilde_prefix() {
        let home = Some(PathBuf::from("/home/alex"));
        let path = expand_user("~/.browser_automation", home).unwrap();
        assert_eq!(path, PathBuf::from("/home/alex/.browser_automation"));
    }

    #[test]
    fn test_expand_user_plain_path_unchanged() {
        let home = Some(PathBuf::from("/home/alex"));
        let path = expand_user("/tmp/profile", home).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/profile"));
    }

    #[test]
    fn test_expand_user_without_home_fails() {
        let result = expand_user("~/.browser_automation", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("new-profile");

        assert!(!profile_path.exists());

        let profile = ProfileDir::resolve(profile_path.to_str().unwrap()).unwrap();
        assert!(profile.path().is_dir());
    }

    #[test]
    fn test_resolve_keeps_existing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("profile");
        std::fs::create_dir_all(profile_path.join("Default")).unwrap();

        let profile = ProfileDir::resolve(profile_path.to_str().unwrap()).unwrap();
        assert!(profile.path().join("Default").is_dir());
    }
}
