use crate::error::{HostError, IoContext, Result};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::{Path, PathBuf}};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub output_directory: String,
    /// Prefix for stylesheet links, e.g. `/` or `/frontend/`.
    pub base_path: String,
    pub debug_logs: bool,
    #[serde(default = "default_write_manifest")]
    pub write_manifest: bool,
}

fn default_write_manifest() -> bool { true }

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_directory: "dist".to_string(),
            base_path: "/".to_string(),
            debug_logs: false,
            write_manifest: true,
        }
    }
}

impl Settings {
    /// Rejects a `base_path` that does not start with `/`.
    pub fn validate(&self) -> Result<()> {
        if !self.base_path.starts_with('/') {
            return Err(HostError::InvalidBasePath(self.base_path.clone()));
        }
        Ok(())
    }
}

fn app_support_dir() -> PathBuf {
    // Linux: ~/.config/microservices_frontend
    // macOS: ~/Library/Application Support/microservices_frontend
    // Windows: %APPDATA%\microservices_frontend
    dirs::config_dir().unwrap_or_else(|| dirs::home_dir().unwrap_or_default()).join("microservices_frontend")
}

pub fn settings_path() -> PathBuf { app_support_dir().join("settings.json") }

pub fn load() -> Settings { load_from(&settings_path()) }

/// Missing files are created with defaults. Unreadable or malformed ones
/// fall back to defaults and are left untouched on disk.
pub fn load_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "malformed settings, using defaults");
            Settings::default()
        }),
        Err(e) if e.kind() != io::ErrorKind::NotFound => {
            warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
            Settings::default()
        }
        Err(_) => {
            let s = Settings::default();
            if let Err(e) = save_to(path, &s) {
                warn!(path = %path.display(), error = %e, "could not write default settings");
            } else {
                debug!(path = %path.display(), "wrote default settings");
            }
            s
        }
    }
}

pub fn save(s: &Settings) -> Result<()> { save_to(&settings_path(), s) }

pub fn save_to(path: &Path, s: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).at(parent)?;
    }
    let body = serde_json::to_string_pretty(s)?;
    fs::write(path, body).at(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_and_persists_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let s = load_from(&path);
        assert_eq!(s, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let s = Settings {
            output_directory: "public".to_string(),
            base_path: "/frontend/".to_string(),
            debug_logs: true,
            write_manifest: false,
        };

        save_to(&path, &s).unwrap();
        assert_eq!(load_from(&path), s);
    }

    #[test]
    fn write_manifest_defaults_to_true() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"output_directory":"out","base_path":"/","debug_logs":false}"#).unwrap();

        let s = load_from(&path);
        assert_eq!(s.output_directory, "out");
        assert!(s.write_manifest);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn non_utf8_file_is_left_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let bytes = b"{\"output_directory\":\"caf\xe9\",\"base_path\":\"/\",\"debug_logs\":false}".to_vec();
        fs::write(&path, &bytes).unwrap();

        assert_eq!(load_from(&path), Settings::default());
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn directory_path_is_not_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::create_dir(&path).unwrap();

        assert_eq!(load_from(&path), Settings::default());
        assert!(path.is_dir());
    }

    #[test]
    fn validate_requires_leading_slash() {
        assert!(Settings::default().validate().is_ok());
        let s = Settings { base_path: "static".to_string(), ..Settings::default() };
        assert!(matches!(s.validate(), Err(HostError::InvalidBasePath(p)) if p == "static"));
    }
}
