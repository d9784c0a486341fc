//! Resource Repository: maps logical resource names to files under an explicit
//! resource root and enumerates what exists.
//!
//! Layout:
//! - `data/culture_expectations_<scale>.csv`
//! - `prompts/org_focus_areas_<org>.md`
//! - `prompts/goal_generation_system_prompt.txt`
//!
//! Path resolution never checks existence. A missing file surfaces as
//! `EngineError::ResourceNotFound` from whichever reader opens it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::assembly::error::{EngineError, EngineResult, ResourceKind};

const DATA_DIR: &str = "data";
const PROMPTS_DIR: &str = "prompts";
const SCALE_PREFIX: &str = "culture_expectations_";
const SCALE_EXTENSION: &str = "csv";
const ORG_PREFIX: &str = "org_focus_areas_";
const ORG_EXTENSION: &str = "md";
const FRAMEWORK_FILE: &str = "goal_generation_system_prompt.txt";

/// Read-only view of a resource root.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    root: PathBuf,
}

impl ResourceRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scale identifiers derived from `data/culture_expectations_*.csv`, sorted.
    pub fn list_scales(&self) -> EngineResult<Vec<String>> {
        list_identifiers(&self.root.join(DATA_DIR), SCALE_PREFIX, SCALE_EXTENSION)
    }

    /// Organization identifiers derived from `prompts/org_focus_areas_*.md`, sorted.
    pub fn list_organizations(&self) -> EngineResult<Vec<String>> {
        list_identifiers(&self.root.join(PROMPTS_DIR), ORG_PREFIX, ORG_EXTENSION)
    }

    pub fn scale_path(&self, scale: &str) -> PathBuf {
        self.root
            .join(DATA_DIR)
            .join(format!("{SCALE_PREFIX}{scale}.{SCALE_EXTENSION}"))
    }

    pub fn organization_path(&self, org: &str) -> PathBuf {
        self.root
            .join(PROMPTS_DIR)
            .join(format!("{ORG_PREFIX}{org}.{ORG_EXTENSION}"))
    }

    pub fn framework_path(&self) -> PathBuf {
        self.root.join(PROMPTS_DIR).join(FRAMEWORK_FILE)
    }

    /// Reads an organization's focus document.
    pub fn read_focus_document(&self, org: &str) -> EngineResult<String> {
        read_resource(
            &self.organization_path(org),
            ResourceKind::FocusDocument,
            org,
        )
    }

    /// Reads the framework instructions shared by every request.
    pub fn read_framework(&self) -> EngineResult<String> {
        read_resource(&self.framework_path(), ResourceKind::Framework, FRAMEWORK_FILE)
    }
}

/// Reads a UTF-8 resource, mapping a missing file to `ResourceNotFound`.
pub(crate) fn read_resource(path: &Path, kind: ResourceKind, key: &str) -> EngineResult<String> {
    debug!("Reading {kind} from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => EngineError::ResourceNotFound {
            kind,
            key: key.to_string(),
            path: path.to_path_buf(),
        },
        _ => EngineError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Lists `<prefix><id>.<extension>` files in `dir` and returns the sorted ids.
/// A missing directory yields an empty list.
fn list_identifiers(dir: &Path, prefix: &str, extension: &str) -> EngineResult<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Resource directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(EngineError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EngineError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(id) = stem.strip_prefix(prefix) {
            if !id.is_empty() {
                ids.push(id.to_string());
            }
        }
    }

    ids.sort();
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo_with(files: &[&str]) -> (TempDir, ResourceRepository) {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "x").unwrap();
        }
        let repo = ResourceRepository::new(dir.path());
        (dir, repo)
    }

    #[test]
    fn test_list_scales_sorted_and_filtered() {
        let (_dir, repo) = repo_with(&[
            "data/culture_expectations_technical.csv",
            "data/culture_expectations_leadership.csv",
            "data/culture_expectations_.csv",
            "data/culture_expectations_notes.txt",
            "data/other.csv",
        ]);
        assert_eq!(repo.list_scales().unwrap(), vec!["leadership", "technical"]);
    }

    #[test]
    fn test_list_scales_missing_dir_is_empty() {
        let (_dir, repo) = repo_with(&[]);
        assert!(repo.list_scales().unwrap().is_empty());
        assert!(repo.list_organizations().unwrap().is_empty());
    }

    #[test]
    fn test_list_organizations_sorted() {
        let (_dir, repo) = repo_with(&[
            "prompts/org_focus_areas_zeta.md",
            "prompts/org_focus_areas_acme.md",
            "prompts/goal_generation_system_prompt.txt",
        ]);
        assert_eq!(repo.list_organizations().unwrap(), vec!["acme", "zeta"]);
    }

    #[test]
    fn test_paths_follow_naming_convention() {
        let repo = ResourceRepository::new("/srv/res");
        assert_eq!(
            repo.scale_path("technical"),
            PathBuf::from("/srv/res/data/culture_expectations_technical.csv")
        );
        assert_eq!(
            repo.organization_path("demo"),
            PathBuf::from("/srv/res/prompts/org_focus_areas_demo.md")
        );
    }

    #[test]
    fn test_missing_focus_document_is_resource_not_found() {
        let (_dir, repo) = repo_with(&[]);
        let err = repo.read_focus_document("ghost").unwrap_err();
        match err {
            EngineError::ResourceNotFound { kind, key, .. } => {
                assert_eq!(kind, ResourceKind::FocusDocument);
                assert_eq!(key, "ghost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
