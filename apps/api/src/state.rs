use std::sync::Arc;

use crate::assembly::PromptEngine;
use crate::config::Config;
use crate::goals::generator::GoalGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PromptEngine>,
    /// Pluggable goal generator. `None` runs in prompts-only mode.
    pub generator: Option<Arc<dyn GoalGenerator>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, generator: Option<Arc<dyn GoalGenerator>>) -> Self {
        Self {
            engine: Arc::new(PromptEngine::new(config.resource_root.clone())),
            generator,
            config,
        }
    }
}
