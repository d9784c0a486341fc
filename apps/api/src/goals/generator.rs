//! Goal generation: pluggable, trait-based backend that turns an assembled
//! prompt into goal text.
//!
//! Default: none (prompts-only mode). `LlmGoalGenerator` is installed at
//! startup when an Anthropic API key is configured.
//!
//! `AppState` holds an `Option<Arc<dyn GoalGenerator>>`.

use async_trait::async_trait;

use crate::assembly::AssembledPrompt;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Implement this to swap generation backends without touching handlers.
#[async_trait]
pub trait GoalGenerator: Send + Sync {
    /// Reported to clients as `powered_by`.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String, AppError>;
}

/// Sends the framework as the system message and the user context as the user message.
pub struct LlmGoalGenerator(pub LlmClient);

#[async_trait]
impl GoalGenerator for LlmGoalGenerator {
    fn name(&self) -> &str {
        self.0.model()
    }

    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String, AppError> {
        self.0
            .call_text(&prompt.user_context, &prompt.framework)
            .await
            .map_err(|e| AppError::Llm(format!("Goal generation failed: {e}")))
    }
}
