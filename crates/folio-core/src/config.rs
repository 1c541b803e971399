//! Configuration
//!
//! Loaded from `--config <path>` or `~/.folio/config.toml`, with environment
//! overrides applied on top. A missing default file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::debounce::DEFAULT_QUIESCENCE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Content file replacing the builtin content (JSON or TOML)
    pub content_path: Option<PathBuf>,
    pub search: SearchConfig,
    /// Where logs are written; resolved at load time, never read from the file
    #[serde(skip)]
    pub state_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiescence window before a typed query is evaluated
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_QUIESCENCE.as_millis() as u64,
        }
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            search: SearchConfig::default(),
            state_dir: default_state_dir(),
        }
    }
}

impl FolioConfig {
    /// Load from an explicit path (must exist) or the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// `~/.folio/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
    }

    /// Apply `FOLIO_*` overrides. Unparseable values are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("FOLIO_CONTENT").filter(|v| !v.is_empty()) {
            self.content_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("FOLIO_DEBOUNCE_MS") {
            match raw.trim().parse() {
                Ok(ms) => self.search.debounce_ms = ms,
                Err(_) => tracing::warn!(value = %raw, "Ignoring invalid FOLIO_DEBOUNCE_MS"),
            }
        }

        if let Some(dir) = lookup("FOLIO_STATE_DIR").filter(|v| !v.is_empty()) {
            self.state_dir = PathBuf::from(dir);
        }
    }

    pub fn quiescence(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join("folio.log")
    }
}

fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".folio"))
        .unwrap_or_else(|| PathBuf::from(".folio"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.quiescence(), Duration::from_millis(300));
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
content_path = "/srv/folio/content.json"

[search]
debounce_ms = 150
"#
        )
        .unwrap();

        let config = FolioConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.content_path,
            Some(PathBuf::from("/srv/folio/content.json"))
        );
        assert_eq!(config.search.debounce_ms, 150);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]").unwrap();

        let config = FolioConfig::from_file(file.path()).unwrap();
        assert_eq!(config.search.debounce_ms, 300);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        assert!(FolioConfig::load(Some(Path::new("/nonexistent/folio.toml"))).is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search = 12").unwrap();
        assert!(FolioConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("FOLIO_CONTENT", "/tmp/content.toml"),
            ("FOLIO_DEBOUNCE_MS", "50"),
            ("FOLIO_STATE_DIR", "/tmp/folio-state"),
        ]
        .into_iter()
        .collect();

        let mut config = FolioConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.content_path, Some(PathBuf::from("/tmp/content.toml")));
        assert_eq!(config.quiescence(), Duration::from_millis(50));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/folio-state/folio.log"));
    }

    #[test]
    fn test_invalid_override_ignored() {
        let mut config = FolioConfig::default();
        config.apply_overrides(|k| (k == "FOLIO_DEBOUNCE_MS").then(|| "soon".to_string()));
        assert_eq!(config.search.debounce_ms, 300);
    }
}
