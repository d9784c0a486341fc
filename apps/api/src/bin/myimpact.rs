//! `myimpact`: command-line wrapper around the prompt assembly engine.
//!
//! Prints the assembled framework/user-context pair, lists available options,
//! shows org focus documents, and verifies the resource catalog.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use myimpact_api::assembly::focus::extract_theme_section;
use myimpact_api::assembly::guidance::{GoalStyle, GrowthIntensity};
use myimpact_api::assembly::{EngineResult, GoalRequest, PromptEngine};
use myimpact_api::config::default_resource_root;

const BANNER_WIDTH: usize = 80;

/// MyImpact: culture- and level-aligned prompts for quarterly goal generation.
#[derive(Parser, Debug)]
#[command(name = "myimpact")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding `data/` and `prompts/`.
    #[arg(long, global = true, env = "MYIMPACT_RESOURCE_ROOT")]
    resource_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a goal-generation prompt.
    Generate(GenerateArgs),

    /// List available scales, levels, growth intensities, goal styles and organizations.
    ListOptions,

    /// Show an organization's focus document, or one theme section of it.
    Focus(FocusArgs),

    /// Check that every scale's culture matrix is well formed and consistent.
    Verify,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Scale / job track (e.g. technical, leadership).
    scale: String,

    /// Level label exactly as listed, e.g. "L30–35 (Career)".
    level: String,

    #[arg(value_parser = ["minimal", "moderate", "aggressive"])]
    growth_intensity: String,

    /// Organization name.
    #[arg(long, default_value = "demo")]
    org: String,

    /// Strategic focus area to emphasize.
    #[arg(long, alias = "theme")]
    focus_area: Option<String>,

    #[arg(long, default_value = "independent", value_parser = ["independent", "progressive"])]
    goal_style: String,
}

#[derive(Args, Debug)]
struct FocusArgs {
    org: String,

    /// Print only the section describing this theme.
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = PromptEngine::new(cli.resource_root.unwrap_or_else(default_resource_root));

    let output = match cli.command {
        Command::Generate(args) => render_generate(&engine, args),
        Command::ListOptions => render_options(&engine),
        Command::Focus(args) => render_focus(&engine, &args),
        Command::Verify => render_verify(&engine),
    };

    match output {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    let _ = writeln!(out, "{rule}\n{title}\n{rule}");
}

fn render_generate(engine: &PromptEngine, args: GenerateArgs) -> EngineResult<String> {
    let mut request = GoalRequest::new(
        args.scale,
        args.level,
        args.growth_intensity,
        args.org,
        args.goal_style,
    );
    request.theme = args.focus_area;

    let prompt = engine.assemble(&request)?;

    let mut out = String::new();
    banner(&mut out, "GOAL FRAMEWORK");
    let _ = writeln!(out, "{}\n", prompt.framework.trim_end());
    banner(&mut out, "USER CONTEXT");
    let _ = writeln!(out, "{}", prompt.user_context.trim_end());
    Ok(out)
}

fn render_options(engine: &PromptEngine) -> EngineResult<String> {
    let mut out = String::new();

    banner(&mut out, "AVAILABLE JOB LEVEL SCALES");
    for (scale, levels) in engine.discover_levels_by_scale()? {
        let _ = writeln!(out, "\n{}", scale.to_uppercase());
        for level in levels {
            let _ = writeln!(out, "  - {level}");
        }
    }

    let _ = writeln!(out);
    banner(&mut out, "GROWTH INTENSITIES");
    for intensity in GrowthIntensity::ALL {
        let _ = writeln!(out, "  - {}", intensity.as_str());
    }

    let _ = writeln!(out);
    banner(&mut out, "GOAL STYLES");
    for style in GoalStyle::ALL {
        let _ = writeln!(out, "  - {} ({})", style.as_str(), style.summary());
    }

    let _ = writeln!(out);
    banner(&mut out, "ORGANIZATIONS");
    for org in engine.discover_organizations()? {
        let _ = writeln!(out, "  - {org}");
    }

    Ok(out)
}

fn render_focus(engine: &PromptEngine, args: &FocusArgs) -> EngineResult<String> {
    let document = engine.load_focus_document(&args.org)?;
    let text = match &args.theme {
        Some(theme) => {
            let section = extract_theme_section(&document, theme);
            if section.is_empty() {
                format!("Theme '{theme}' not found in focus areas for '{}'", args.org)
            } else {
                section
            }
        }
        None => document.trim_end().to_string(),
    };
    Ok(format!("{text}\n"))
}

fn render_verify(engine: &PromptEngine) -> EngineResult<String> {
    let report = engine.verify_catalog()?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Catalog OK: {} scales, {} shared attributes, {} organizations",
        report.scales.len(),
        report.attributes.len(),
        report.organizations.len()
    );
    for summary in &report.scales {
        let _ = writeln!(
            out,
            "  - {}: {} attributes x {} levels",
            summary.scale,
            summary.attribute_count,
            summary.levels.len()
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn shipped() -> PromptEngine {
        PromptEngine::new(default_resource_root())
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args_defaults() {
        let cli = Cli::parse_from([
            "myimpact",
            "generate",
            "technical",
            "L30–35 (Career)",
            "moderate",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.org, "demo");
        assert_eq!(args.goal_style, "independent");
        assert!(args.focus_area.is_none());
    }

    #[test]
    fn test_generate_rejects_unknown_intensity() {
        let result = Cli::try_parse_from([
            "myimpact",
            "generate",
            "technical",
            "L30–35 (Career)",
            "extreme",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_alias_for_focus_area() {
        let cli = Cli::parse_from([
            "myimpact",
            "generate",
            "technical",
            "L30–35 (Career)",
            "moderate",
            "--theme",
            "Customer Trust",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.focus_area.as_deref(), Some("Customer Trust"));
    }

    #[test]
    fn test_render_generate_has_both_blocks() {
        let args = GenerateArgs {
            scale: "technical".to_string(),
            level: "L30–35 (Career)".to_string(),
            growth_intensity: "moderate".to_string(),
            org: "demo".to_string(),
            focus_area: None,
            goal_style: "independent".to_string(),
        };
        let out = render_generate(&shipped(), args).unwrap();
        let framework = out.find("GOAL FRAMEWORK").unwrap();
        let user = out.find("USER CONTEXT").unwrap();
        assert!(framework < user);
        assert!(out.contains("L30–35 (Career)"));
    }

    #[test]
    fn test_render_options_lists_everything() {
        let out = render_options(&shipped()).unwrap();
        assert!(out.contains("TECHNICAL"));
        assert!(out.contains("  - L30–35 (Career)"));
        assert!(out.contains("  - aggressive"));
        assert!(out.contains("  - progressive"));
        assert!(out.contains("  - demo"));
    }

    #[test]
    fn test_render_focus_theme_section() {
        let args = FocusArgs {
            org: "demo".to_string(),
            theme: Some("Customer Trust".to_string()),
        };
        let out = render_focus(&shipped(), &args).unwrap();
        assert!(out.starts_with("Customer Trust"));
        assert!(!out.contains("People Growth"));
    }

    #[test]
    fn test_render_focus_missing_org_fails() {
        let args = FocusArgs {
            org: "no-such-org".to_string(),
            theme: None,
        };
        assert!(render_focus(&shipped(), &args).is_err());
    }

    #[test]
    fn test_render_verify_reports_scales() {
        let out = render_verify(&shipped()).unwrap();
        assert!(out.starts_with("Catalog OK"));
        assert!(out.contains("technical"));
    }
}
