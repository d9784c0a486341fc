// Prompt assembly engine.
// Reads culture matrices, org focus documents and the framework prompt from a
// resource root and composes the framework/user-context pair for a goal request.
// Synchronous and stateless: every call re-reads its files.

pub mod catalog;
pub mod composer;
pub mod culture;
pub mod error;
pub mod focus;
pub mod guidance;
pub mod levels;
pub mod prompts;
pub mod resources;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use catalog::CatalogReport;
pub use composer::{AssembledPrompt, GoalRequest};
pub use culture::{CultureMatrix, Expectation};
pub use error::{EngineError, EngineResult, ResourceKind};
pub use resources::ResourceRepository;

/// Entry point used by the HTTP and CLI collaborators.
///
/// Holds only the resource root, so it is cheap to clone and safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct PromptEngine {
    repo: ResourceRepository,
}

impl PromptEngine {
    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            repo: ResourceRepository::new(resource_root),
        }
    }

    pub fn repository(&self) -> &ResourceRepository {
        &self.repo
    }

    pub fn discover_scales(&self) -> EngineResult<Vec<String>> {
        self.repo.list_scales()
    }

    /// Sorted levels for `scale`; empty when the scale has no data file.
    pub fn discover_levels(&self, scale: &str) -> EngineResult<Vec<String>> {
        levels::levels_for(&self.repo, scale)
    }

    pub fn discover_levels_by_scale(&self) -> EngineResult<BTreeMap<String, Vec<String>>> {
        levels::levels_by_scale(&self.repo)
    }

    pub fn discover_organizations(&self) -> EngineResult<Vec<String>> {
        self.repo.list_organizations()
    }

    /// The org's focus document. Fails with `ResourceNotFound` when absent.
    pub fn load_focus_document(&self, org: &str) -> EngineResult<String> {
        self.repo.read_focus_document(org)
    }

    pub fn load_framework(&self) -> EngineResult<String> {
        self.repo.read_framework()
    }

    pub fn load_matrix(&self, scale: &str) -> EngineResult<CultureMatrix> {
        culture::load_matrix(&self.repo, scale)
    }

    pub fn extract_culture_for_level(
        &self,
        scale: &str,
        level: &str,
    ) -> EngineResult<Vec<Expectation>> {
        culture::extract_culture_for_level(&self.repo, scale, level)
    }

    pub fn assemble(&self, request: &GoalRequest) -> EngineResult<AssembledPrompt> {
        composer::assemble_prompt(&self.repo, request)
    }

    pub fn verify_catalog(&self) -> EngineResult<CatalogReport> {
        catalog::verify_catalog(&self.repo)
    }
}
