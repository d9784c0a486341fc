//! Culture Matrix: the attribute × level table of expectation text for one scale.
//!
//! Source format is CSV: the first column holds the attribute name, every other
//! header is a level label. The matrix is validated as rectangular when it is
//! built, so call sites never deal with ragged shapes.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::assembly::error::{EngineError, EngineResult, ResourceKind};
use crate::assembly::resources::{read_resource, ResourceRepository};

/// One attribute row: the attribute name and one expectation per level column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureAttribute {
    pub name: String,
    expectations: Vec<String>,
}

/// A single attribute's expectation at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expectation {
    pub attribute: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureMatrix {
    scale: String,
    /// Level labels in source column order.
    levels: Vec<String>,
    /// Attribute rows in source row order.
    attributes: Vec<CultureAttribute>,
}

impl CultureMatrix {
    /// Builds a matrix from a header of level labels and `(attribute, cells)` rows.
    ///
    /// Rejects duplicate levels or attributes, empty labels, and any row whose
    /// cell count differs from the level count or that has an empty cell.
    pub fn from_rows(
        scale: &str,
        levels: Vec<String>,
        rows: Vec<(String, Vec<String>)>,
        source: &Path,
    ) -> EngineResult<Self> {
        let malformed = |reason: String| EngineError::MalformedResource {
            path: source.to_path_buf(),
            reason,
        };

        if levels.is_empty() {
            return Err(malformed("header has no level columns".to_string()));
        }
        let mut seen_levels = HashSet::new();
        for level in &levels {
            if level.is_empty() {
                return Err(malformed("header contains an empty level label".to_string()));
            }
            if !seen_levels.insert(level.as_str()) {
                return Err(malformed(format!("duplicate level column '{level}'")));
            }
        }

        if rows.is_empty() {
            return Err(malformed("no attribute rows".to_string()));
        }

        let mut seen_attributes = HashSet::new();
        let mut attributes = Vec::with_capacity(rows.len());
        for (name, expectations) in rows {
            if !seen_attributes.insert(name.clone()) {
                return Err(malformed(format!("duplicate attribute '{name}'")));
            }
            if expectations.len() != levels.len() {
                return Err(malformed(format!(
                    "attribute '{name}' has {} values, expected {}",
                    expectations.len(),
                    levels.len()
                )));
            }
            if let Some(idx) = expectations.iter().position(|e| e.trim().is_empty()) {
                return Err(malformed(format!(
                    "attribute '{name}' has no expectation for level '{}'",
                    levels[idx]
                )));
            }
            attributes.push(CultureAttribute { name, expectations });
        }

        Ok(Self {
            scale: scale.to_string(),
            levels,
            attributes,
        })
    }

    pub fn scale(&self) -> &str {
        &self.scale
    }

    /// Level labels in source column order (unsorted).
    pub fn level_columns(&self) -> &[String] {
        &self.levels
    }

    /// Level labels sorted lexicographically.
    ///
    /// Byte-wise string order: `L100` sorts before `L20`. Numeric ordering is not applied.
    pub fn sorted_levels(&self) -> Vec<String> {
        let mut levels = self.levels.clone();
        levels.sort();
        levels
    }

    pub fn attributes(&self) -> &[CultureAttribute] {
        &self.attributes
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Expectation text for one attribute at one level, if both exist.
    pub fn expectation(&self, attribute: &str, level: &str) -> Option<&str> {
        let column = self.levels.iter().position(|l| l == level)?;
        self.attributes
            .iter()
            .find(|a| a.name == attribute)
            .map(|a| a.expectations[column].as_str())
    }

    /// Every attribute's expectation at `level`, in row order.
    /// A level that is not a literal column label yields an empty list.
    pub fn for_level(&self, level: &str) -> Vec<Expectation> {
        let Some(column) = self.levels.iter().position(|l| l == level) else {
            return Vec::new();
        };
        self.attributes
            .iter()
            .map(|a| Expectation {
                attribute: a.name.clone(),
                text: a.expectations[column].clone(),
            })
            .collect()
    }
}

/// Parses CSV text into a `CultureMatrix`.
///
/// Rows whose attribute cell is empty or whitespace are skipped as formatting blanks.
pub fn parse_culture_csv(scale: &str, text: &str, source: &Path) -> EngineResult<CultureMatrix> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| csv_error(source, e))?,
        None => {
            return Err(EngineError::MalformedResource {
                path: source.to_path_buf(),
                reason: "no header row".to_string(),
            })
        }
    };

    let levels: Vec<String> = header.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| csv_error(source, e))?;
        let attribute = record.get(0).unwrap_or_default().trim();
        if attribute.is_empty() {
            continue;
        }
        let cells = record.iter().skip(1).map(str::to_string).collect();
        rows.push((attribute.to_string(), cells));
    }

    CultureMatrix::from_rows(scale, levels, rows, source)
}

fn csv_error(source: &Path, e: csv::Error) -> EngineError {
    EngineError::Csv {
        path: source.to_path_buf(),
        source: e,
    }
}

/// Loads the culture matrix for `scale` from the repository.
pub fn load_matrix(repo: &ResourceRepository, scale: &str) -> EngineResult<CultureMatrix> {
    let path = repo.scale_path(scale);
    let text = read_resource(&path, ResourceKind::CultureMatrix, scale)?;
    let matrix = parse_culture_csv(scale, &text, &path)?;
    debug!(
        "Loaded culture matrix '{scale}': {} attributes x {} levels",
        matrix.attributes().len(),
        matrix.level_columns().len()
    );
    Ok(matrix)
}

/// Expectations for every attribute at `level`.
///
/// An unknown level is not an error: the result is simply empty, and the
/// composer decides whether that invalidates a request.
pub fn extract_culture_for_level(
    repo: &ResourceRepository,
    scale: &str,
    level: &str,
) -> EngineResult<Vec<Expectation>> {
    Ok(load_matrix(repo, scale)?.for_level(level))
}
