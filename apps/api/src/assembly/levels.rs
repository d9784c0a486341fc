//! Level/Scale Index: canonical sorted level lists derived from matrix columns.

use std::collections::BTreeMap;

use crate::assembly::culture::load_matrix;
use crate::assembly::error::{EngineError, EngineResult};
use crate::assembly::resources::ResourceRepository;

/// Sorted level labels for `scale`.
///
/// A scale without a data file yields an empty list so discovery UIs can list
/// every scale without special-casing failures. A file that exists but is
/// malformed still fails.
pub fn levels_for(repo: &ResourceRepository, scale: &str) -> EngineResult<Vec<String>> {
    match load_matrix(repo, scale) {
        Ok(matrix) => Ok(matrix.sorted_levels()),
        Err(EngineError::ResourceNotFound { .. }) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Every discovered scale mapped to its sorted levels.
pub fn levels_by_scale(repo: &ResourceRepository) -> EngineResult<BTreeMap<String, Vec<String>>> {
    let mut levels = BTreeMap::new();
    for scale in repo.list_scales()? {
        let scale_levels = levels_for(repo, &scale)?;
        levels.insert(scale, scale_levels);
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo() -> (TempDir, ResourceRepository) {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(
            data.join("culture_expectations_technical.csv"),
            "Cultural Attribute,L30–35 (Career),L10–15 (Entry),L20–25 (Developing)\n\
             Humble,c,a,b\n",
        )
        .unwrap();
        fs::write(
            data.join("culture_expectations_leadership.csv"),
            "Cultural Attribute,L60+ (Director),L40–45 (Manager)\nHumble,d,m\n",
        )
        .unwrap();
        let repo = ResourceRepository::new(dir.path());
        (dir, repo)
    }

    #[test]
    fn test_levels_for_is_sorted() {
        let (_dir, repo) = repo();
        assert_eq!(
            levels_for(&repo, "technical").unwrap(),
            vec!["L10–15 (Entry)", "L20–25 (Developing)", "L30–35 (Career)"]
        );
    }

    #[test]
    fn test_levels_for_missing_scale_is_empty() {
        let (_dir, repo) = repo();
        assert!(levels_for(&repo, "nonexistent").unwrap().is_empty());
    }

    #[test]
    fn test_levels_for_malformed_scale_fails() {
        let (dir, repo) = repo();
        fs::write(
            dir.path().join("data/culture_expectations_broken.csv"),
            "Cultural Attribute,L10 (a)\n",
        )
        .unwrap();
        assert!(matches!(
            levels_for(&repo, "broken"),
            Err(EngineError::MalformedResource { .. })
        ));
    }

    #[test]
    fn test_levels_by_scale_covers_every_scale() {
        let (_dir, repo) = repo();
        let levels = levels_by_scale(&repo).unwrap();
        assert_eq!(
            levels.keys().cloned().collect::<Vec<_>>(),
            vec!["leadership", "technical"]
        );
        assert_eq!(levels["leadership"], vec!["L40–45 (Manager)", "L60+ (Director)"]);
    }
}
