//! CLI command logic - extracted for testability
//!
//! Loading, step resolution, and output formatting live here so they can be
//! unit tested; argument parsing and dispatch stay in main.rs.

use crate::guided::{display_name, normalize, GuidedTutorial, ValidationResult};
use crate::types::{ProblemDefinition, SystemGraph};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

// ============================================================================
// Input Loading
// ============================================================================

/// Load and validate a problem definition from a JSON file.
pub fn load_problem(path: &Path) -> Result<ProblemDefinition> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read problem file {}", path.display()))?;
    ProblemDefinition::from_json(&json)
        .with_context(|| format!("invalid problem definition in {}", path.display()))
}

/// Load and validate a system graph from a JSON file.
pub fn load_graph(path: &Path) -> Result<SystemGraph> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    SystemGraph::from_json(&json)
        .with_context(|| format!("invalid system graph in {}", path.display()))
}

/// Resolve a 1-based user-supplied step number to a step index, defaulting
/// to the final step.
pub fn resolve_step_index(tutorial: &GuidedTutorial, requested: Option<usize>) -> Result<usize> {
    if tutorial.is_empty() {
        bail!(
            "tutorial for '{}' has no steps; the problem content is broken",
            tutorial.problem_id
        );
    }
    match requested {
        None => Ok(tutorial.total_steps - 1),
        Some(n) if (1..=tutorial.total_steps).contains(&n) => Ok(n - 1),
        Some(n) => bail!("step {} out of range (1..={})", n, tutorial.total_steps),
    }
}

// ============================================================================
// Display Formatting
// ============================================================================

/// Render a tutorial as a step-by-step terminal listing.
pub fn format_tutorial(tutorial: &GuidedTutorial) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("📋 {}", tutorial.problem_title).bright_cyan().bold()
    ));
    out.push_str(&format!("{}\n", "─".repeat(50).dimmed()));

    for step in &tutorial.steps {
        out.push_str(&format!(
            "\n{} {}\n",
            format!("Step {}:", step.step_number).bold(),
            step.fr_text
        ));
        for component in &step.components_needed {
            out.push_str(&format!(
                "  + {}: {}\n",
                display_name(&normalize(&component.component_type)).green(),
                component.reason
            ));
        }
        for conn in &step.connections_needed {
            out.push_str(&format!(
                "  ~ {} -> {}\n",
                display_name(&normalize(&conn.from)),
                display_name(&normalize(&conn.to))
            ));
        }
    }

    out.push_str(&format!(
        "\n{} steps total\n",
        tutorial.total_steps.to_string().bold()
    ));
    out
}

/// Render a validation result for one step.
pub fn format_validation(step_number: usize, result: &ValidationResult) -> String {
    if result.passed {
        format!(
            "{} step {} satisfied\n",
            "✓".green().bold(),
            step_number
        )
    } else {
        format!(
            "{} step {} not satisfied\n  {}\n",
            "✗".red().bold(),
            step_number,
            result.feedback
        )
    }
}

/// Render overall progress plus the first failing step, if any.
pub fn format_progress(
    tutorial: &GuidedTutorial,
    percent: u8,
    first_failing: Option<usize>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("📊 {}", tutorial.problem_title).bright_cyan().bold()
    ));
    match first_failing {
        None => {
            out.push_str(&format!(
                "Progress: {}% ({}/{} steps) {}\n",
                percent,
                tutorial.total_steps,
                tutorial.total_steps,
                "complete".green().bold()
            ));
        }
        Some(index) => {
            out.push_str(&format!(
                "Progress: {}% ({}/{} steps)\n",
                percent, index, tutorial.total_steps
            ));
            out.push_str(&format!(
                "Next: step {} - {}\n",
                index + 1,
                tutorial.steps[index].fr_text
            ));
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
