//! Axum route handlers for the Goals API.
//!
//! Engine calls do blocking file I/O, so they run on the blocking pool.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assembly::guidance::{goal_style_labels, growth_intensity_labels};
use crate::assembly::{EngineError, EngineResult, GoalRequest, PromptEngine};
use crate::errors::AppError;
use crate::state::AppState;

const DEFAULT_ORG: &str = "demo";
const DEFAULT_GOAL_STYLE: &str = "independent";
const PROMPTS_ONLY: &str = "prompts-only";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub scales: Vec<String>,
    pub levels: BTreeMap<String, Vec<String>>,
    pub growth_intensities: Vec<&'static str>,
    pub goal_styles: Vec<&'static str>,
    pub organizations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FocusAreasResponse {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub scale: String,
    pub level: String,
    pub growth_intensity: String,
    #[serde(default = "default_org")]
    pub org: String,
    #[serde(default, alias = "theme")]
    pub focus_area: Option<String>,
    #[serde(default = "default_goal_style")]
    pub goal_style: String,
}

fn default_org() -> String {
    DEFAULT_ORG.to_string()
}

fn default_goal_style() -> String {
    DEFAULT_GOAL_STYLE.to_string()
}

impl GenerateRequest {
    fn to_goal_request(&self) -> GoalRequest {
        let request = GoalRequest::new(
            self.scale.as_str(),
            self.level.as_str(),
            self.growth_intensity.as_str(),
            self.org.as_str(),
            self.goal_style.as_str(),
        );
        match &self.focus_area {
            Some(focus) => request.with_theme(focus.as_str()),
            None => request,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub inputs: GenerateRequest,
    pub framework: String,
    pub user_context: String,
    pub prompts: [String; 2],
    pub result: Option<String>,
    pub powered_by: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/metadata
///
/// Everything a client needs to build a request form.
pub async fn handle_metadata(
    State(state): State<AppState>,
) -> Result<Json<MetadataResponse>, AppError> {
    let (scales, levels, organizations) = run_engine(&state, |engine| {
        Ok((
            engine.discover_scales()?,
            engine.discover_levels_by_scale()?,
            engine.discover_organizations()?,
        ))
    })
    .await?;

    Ok(Json(MetadataResponse {
        scales,
        levels,
        growth_intensities: growth_intensity_labels(),
        goal_styles: goal_style_labels(),
        organizations,
    }))
}

/// GET /api/orgs/:org/focus-areas
///
/// Returns the org's focus document, or `null` content when it has none.
pub async fn handle_focus_areas(
    State(state): State<AppState>,
    Path(org): Path<String>,
) -> Result<Json<FocusAreasResponse>, AppError> {
    let content = run_engine(&state, move |engine| {
        match engine.load_focus_document(&org) {
            Ok(doc) => Ok(Some(doc)),
            Err(EngineError::ResourceNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    })
    .await?;

    Ok(Json(FocusAreasResponse { content }))
}

/// POST /api/goals/generate
///
/// Assembles the framework/user-context pair and, when a generator is
/// configured, asks it for goal text.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    validate_request(&request, state.config.max_focus_area_chars)?;

    let scales = run_engine(&state, |engine| engine.discover_scales()).await?;
    if !scales.contains(&request.scale) {
        return Err(AppError::Validation(format!(
            "Unknown scale '{}'. Available scales: {}",
            request.scale,
            scales.join(", ")
        )));
    }

    let goal_request = request.to_goal_request();
    let prompt = run_engine(&state, move |engine| engine.assemble(&goal_request)).await?;

    let (result, powered_by) = match &state.generator {
        Some(generator) => {
            info!("Generating goals with {}", generator.name());
            (
                Some(generator.generate(&prompt).await?),
                generator.name().to_string(),
            )
        }
        None => (None, PROMPTS_ONLY.to_string()),
    };

    Ok(Json(GenerateResponse {
        inputs: request,
        prompts: [prompt.framework.clone(), prompt.user_context.clone()],
        framework: prompt.framework,
        user_context: prompt.user_context,
        result,
        powered_by,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn validate_request(request: &GenerateRequest, max_focus_chars: usize) -> Result<(), AppError> {
    for (field, value) in [
        ("scale", &request.scale),
        ("level", &request.level),
        ("growth_intensity", &request.growth_intensity),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }

    if let Some(focus) = &request.focus_area {
        let len = focus.chars().count();
        if len > max_focus_chars {
            return Err(AppError::UnprocessableEntity(format!(
                "focus_area is {len} characters; the limit is {max_focus_chars}"
            )));
        }
    }

    Ok(())
}

/// Runs an engine call on the blocking pool.
async fn run_engine<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    F: FnOnce(&PromptEngine) -> EngineResult<T> + Send + 'static,
    T: Send + 'static,
{
    let engine = state.engine.clone();
    tokio::task::spawn_blocking(move || f(&engine))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("engine task failed: {e}")))?
        .map_err(AppError::from)
}
