//! Content file parsing and validation

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ContentData;

/// Errors raised while building a content store
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    #[error("Empty id in {collection}")]
    EmptyId { collection: &'static str },
}

/// Read a content file, choosing the format by extension (JSON by default)
pub(super) fn read_file(path: &Path) -> Result<ContentData, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&raw).map_err(|e| ContentError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        _ => parse_json(&raw, path),
    }
}

pub(super) fn parse_json(raw: &str, path: &Path) -> Result<ContentData, ContentError> {
    serde_json::from_str(raw).map_err(|e| ContentError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Ids must be non-empty and unique within their own collection
pub(super) fn validate(data: &ContentData) -> Result<(), ContentError> {
    check_ids("projects", data.projects.iter().map(|p| p.id.as_str()))?;
    check_ids("publications", data.publications.iter().map(|p| p.id.as_str()))?;
    check_ids("experience", data.experience.iter().map(|e| e.id.as_str()))?;
    check_ids("talks", data.talks.iter().map(|t| t.id.as_str()))?;
    check_ids("blog", data.blog.iter().map(|b| b.slug.as_str()))?;
    check_ids("education", data.education.iter().map(|e| e.id.as_str()))?;
    check_ids("services", data.services.iter().map(|s| s.id.as_str()))?;
    Ok(())
}

fn check_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ContentError::EmptyId { collection });
        }
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
