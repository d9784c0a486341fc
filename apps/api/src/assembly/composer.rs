//! Prompt Composer: builds the framework and user-context blocks for one request.
//!
//! Flow: culture slice for (scale, level) → org focus document (optional) →
//!       theme section (optional) → guidance lookups → concatenation.
//!
//! Deterministic given the request and the current resource files. No network I/O.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::assembly::culture::{extract_culture_for_level, Expectation};
use crate::assembly::error::{EngineError, EngineResult};
use crate::assembly::focus::extract_theme_section;
use crate::assembly::guidance::{GoalStyle, GrowthIntensity};
use crate::assembly::prompts::{
    CONTEXT_HEADING, FOCUS_LEAD_IN, FOCUS_SECTION_LEAD_IN, TASK_DIRECTIVE,
};
use crate::assembly::resources::ResourceRepository;

/// A fully specified assembly request. Nothing else influences the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalRequest {
    pub scale: String,
    pub level: String,
    pub growth_intensity: String,
    pub organization: String,
    pub goal_style: String,
    pub theme: Option<String>,
}

impl GoalRequest {
    pub fn new(
        scale: impl Into<String>,
        level: impl Into<String>,
        growth_intensity: impl Into<String>,
        organization: impl Into<String>,
        goal_style: impl Into<String>,
    ) -> Self {
        Self {
            scale: scale.into(),
            level: level.into(),
            growth_intensity: growth_intensity.into(),
            organization: organization.into(),
            goal_style: goal_style.into(),
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// The requested theme, trimmed. Blank themes count as absent.
    pub fn focus_theme(&self) -> Option<&str> {
        self.theme
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// The two text blocks handed to a generative model as system/user messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledPrompt {
    pub framework: String,
    pub user_context: String,
}

/// Assembles the prompt pair for `request` from the resources in `repo`.
///
/// Errors:
/// - `ResourceNotFound` when the scale has no matrix or the framework file is missing
/// - `InvalidLevel` when the matrix loads but has no column for the level
///
/// A missing org document or a theme that cannot be found degrades the
/// corresponding section to empty.
pub fn assemble_prompt(
    repo: &ResourceRepository,
    request: &GoalRequest,
) -> EngineResult<AssembledPrompt> {
    let culture = extract_culture_for_level(repo, &request.scale, &request.level)?;
    if culture.is_empty() {
        return Err(EngineError::InvalidLevel {
            scale: request.scale.clone(),
            level: request.level.clone(),
        });
    }

    let org_document = match repo.read_focus_document(&request.organization) {
        Ok(doc) => Some(doc),
        Err(EngineError::ResourceNotFound { .. }) => {
            warn!(
                "No focus document for org '{}'; continuing without organizational context",
                request.organization
            );
            None
        }
        Err(e) => return Err(e),
    };

    let theme_section = match (request.focus_theme(), org_document.as_deref()) {
        (Some(theme), Some(doc)) => {
            let section = extract_theme_section(doc, theme);
            if section.is_empty() {
                debug!(
                    "Theme '{theme}' not found in focus document for '{}'",
                    request.organization
                );
            }
            section
        }
        _ => String::new(),
    };

    let framework = repo.read_framework()?;

    let user_context = render_user_context(
        request,
        &culture,
        org_document.as_deref(),
        &theme_section,
    );

    info!(
        "Assembled prompt: scale={} level={} org={} attributes={} theme={}",
        request.scale,
        request.level,
        request.organization,
        culture.len(),
        request.focus_theme().is_some()
    );

    Ok(AssembledPrompt {
        framework,
        user_context,
    })
}

/// Renders the user-context block. Pure: every input is already loaded.
pub fn render_user_context(
    request: &GoalRequest,
    culture: &[Expectation],
    org_document: Option<&str>,
    theme_section: &str,
) -> String {
    let growth = GrowthIntensity::from_label(&request.growth_intensity);
    let style = GoalStyle::from_label(&request.goal_style);

    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{CONTEXT_HEADING}\n");
    let _ = writeln!(out, "**Scale/Track**: {}", request.scale);
    let _ = writeln!(out, "**Job Level**: {}", request.level);
    let _ = writeln!(out, "**Growth Intensity**: {}", request.growth_intensity);
    let _ = writeln!(out, "**Goal Style**: {}", request.goal_style);
    let _ = writeln!(out, "**Organization**: {}", request.organization);

    let _ = writeln!(out, "\n### Cultural Expectations for {}", request.level);
    for e in culture {
        let _ = writeln!(out, "- **{}**: {}", e.attribute, e.text);
    }

    let _ = writeln!(out, "\n### Growth Intensity Guidance\n{}", growth.guidance());
    let _ = writeln!(out, "\n### Goal Style Guidance\n{}", style.guidance());

    if let Some(doc) = org_document.map(str::trim).filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "\n### Organizational Strategic Focus Areas\n{doc}");
    }

    if let Some(theme) = request.focus_theme() {
        let _ = writeln!(out, "\n### Your Focus Areas\n{FOCUS_LEAD_IN}\n{theme}");
        if !theme_section.is_empty() {
            let _ = writeln!(out, "\n{FOCUS_SECTION_LEAD_IN}\n{theme_section}");
        }
    }

    let _ = writeln!(out, "\n{TASK_DIRECTIVE}");
    out
}
