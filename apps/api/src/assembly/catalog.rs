//! Catalog verification: cross-scale consistency of the shipped culture data.
//!
//! Every scale must carry the same attribute names. Rectangularity within a
//! scale is already enforced when each matrix is loaded.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::assembly::culture::load_matrix;
use crate::assembly::error::{EngineError, EngineResult};
use crate::assembly::resources::ResourceRepository;

#[derive(Debug, Clone, Serialize)]
pub struct ScaleSummary {
    pub scale: String,
    pub attribute_count: usize,
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    /// Attribute names shared by every scale, sorted.
    pub attributes: Vec<String>,
    pub scales: Vec<ScaleSummary>,
    pub organizations: Vec<String>,
}

/// Loads every discovered scale and checks that attribute sets match.
///
/// The first scale (in sorted order) is the baseline. An empty catalog is
/// reported as such, not treated as an error.
pub fn verify_catalog(repo: &ResourceRepository) -> EngineResult<CatalogReport> {
    let mut baseline: Option<(String, BTreeSet<String>)> = None;
    let mut scales = Vec::new();

    for scale in repo.list_scales()? {
        let matrix = load_matrix(repo, &scale)?;
        let names: BTreeSet<String> = matrix
            .attribute_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let (baseline_scale, baseline_names) =
            &*baseline.get_or_insert_with(|| (scale.clone(), names.clone()));
        if names != *baseline_names {
            return Err(EngineError::InconsistentCatalog {
                scale,
                baseline: baseline_scale.clone(),
                missing: baseline_names.difference(&names).cloned().collect(),
                extra: names.difference(baseline_names).cloned().collect(),
            });
        }

        scales.push(ScaleSummary {
            attribute_count: matrix.attributes().len(),
            levels: matrix.sorted_levels(),
            scale,
        });
    }

    Ok(CatalogReport {
        attributes: baseline
            .map(|(_, names)| names.into_iter().collect())
            .unwrap_or_default(),
        scales,
        organizations: repo.list_organizations()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo(files: &[(&str, &str)]) -> (TempDir, ResourceRepository) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        for (name, body) in files {
            fs::write(dir.path().join("data").join(name), body).unwrap();
        }
        let repo = ResourceRepository::new(dir.path());
        (dir, repo)
    }

    #[test]
    fn test_consistent_catalog_reports_every_scale() {
        let (_dir, repo) = repo(&[
            (
                "culture_expectations_technical.csv",
                "A,L10 (a),L20 (b)\nHumble,x,y\nOwnership,x,y\n",
            ),
            (
                "culture_expectations_leadership.csv",
                "A,L40 (m)\nOwnership,z\nHumble,z\n",
            ),
        ]);
        let report = verify_catalog(&repo).unwrap();
        assert_eq!(report.attributes, vec!["Humble", "Ownership"]);
        assert_eq!(report.scales.len(), 2);
        assert_eq!(report.scales[0].scale, "leadership");
        assert_eq!(report.scales[1].levels, vec!["L10 (a)", "L20 (b)"]);
    }

    #[test]
    fn test_inconsistent_attributes_are_reported() {
        let (_dir, repo) = repo(&[
            (
                "culture_expectations_a.csv",
                "A,L10 (a)\nHumble,x\nOwnership,x\n",
            ),
            ("culture_expectations_b.csv", "A,L10 (a)\nHumble,x\nGrit,x\n"),
        ]);
        match verify_catalog(&repo).unwrap_err() {
            EngineError::InconsistentCatalog {
                scale,
                baseline,
                missing,
                extra,
            } => {
                assert_eq!(scale, "b");
                assert_eq!(baseline, "a");
                assert_eq!(missing, vec!["Ownership"]);
                assert_eq!(extra, vec!["Grit"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_catalog_is_ok() {
        let (_dir, repo) = repo(&[]);
        let report = verify_catalog(&repo).unwrap();
        assert!(report.scales.is_empty());
        assert!(report.attributes.is_empty());
    }
}
