//! Guided tutorial output types.

use super::normalize::{display_name, normalize};
use crate::types::{ComponentRequirement, ConnectionRequirement};
use serde::{Deserialize, Serialize};

/// One teaching step of a guided tutorial.
///
/// `components_needed` / `connections_needed` are what this step newly
/// introduces; `required_components` / `required_connections` are the full
/// cumulative validation target up to and including this step. Cumulative
/// fields never shrink across the step sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedStep {
    /// 1-based position in the tutorial
    pub step_number: usize,
    /// Requirement text driving this step, or a synthesized label in
    /// fallback mode
    pub fr_text: String,
    pub components_needed: Vec<ComponentRequirement>,
    pub connections_needed: Vec<ConnectionRequirement>,
    pub required_components: Vec<String>,
    pub required_connections: Vec<ConnectionRequirement>,
}

/// The full ordered teaching sequence for one problem. Built once,
/// read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedTutorial {
    pub problem_id: String,
    pub problem_title: String,
    pub total_steps: usize,
    pub steps: Vec<GuidedStep>,
}

impl GuidedTutorial {
    /// Tutorials are empty only when the problem supplied no mandatory
    /// components, which is upstream configuration breakage.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Outcome of checking a system graph against one step's cumulative
/// requirements. Stateless; recomputed fresh on every check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub passed: bool,
    pub missing_components: Vec<String>,
    pub missing_connections: Vec<ConnectionRequirement>,
    /// Presentation text; callers should rely on the structured lists
    pub feedback: String,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn pass() -> Self {
        Self {
            passed: true,
            missing_components: Vec::new(),
            missing_connections: Vec::new(),
            feedback: "All required components and connections are in place.".into(),
        }
    }

    /// Build a result from whatever is missing; passes when both lists are
    /// empty.
    pub fn from_missing(
        missing_components: Vec<String>,
        missing_connections: Vec<ConnectionRequirement>,
    ) -> Self {
        if missing_components.is_empty() && missing_connections.is_empty() {
            return Self::pass();
        }
        let feedback = compose_feedback(&missing_components, &missing_connections);
        Self {
            passed: false,
            missing_components,
            missing_connections,
            feedback,
        }
    }
}

fn compose_feedback(
    missing_components: &[String],
    missing_connections: &[ConnectionRequirement],
) -> String {
    let mut parts = Vec::new();

    if !missing_components.is_empty() {
        let names: Vec<String> = missing_components
            .iter()
            .map(|t| display_name(&normalize(t)))
            .collect();
        parts.push(format!("Missing components: {}.", names.join(", ")));
    }

    if !missing_connections.is_empty() {
        let pairs: Vec<String> = missing_connections
            .iter()
            .map(|c| {
                format!(
                    "{} -> {}",
                    display_name(&normalize(&c.from)),
                    display_name(&normalize(&c.to))
                )
            })
            .collect();
        parts.push(format!("Missing connections: {}.", pairs.join(", ")));
    }

    parts.join(" ")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_result() {
        let result = ValidationResult::pass();
        assert!(result.passed);
        assert!(result.missing_components.is_empty());
        assert!(result.missing_connections.is_empty());
    }

    #[test]
    fn test_from_missing_empty_passes() {
        let result = ValidationResult::from_missing(Vec::new(), Vec::new());
        assert!(result.passed);
    }

    #[test]
    fn test_from_missing_components_fails() {
        let result = ValidationResult::from_missing(vec!["storage".into()], Vec::new());
        assert!(!result.passed);
        assert!(result.feedback.contains("Database"));
    }

    #[test]
    fn test_feedback_uses_display_names() {
        let result = ValidationResult::from_missing(
            vec!["cdn".into()],
            vec![ConnectionRequirement::new("client", "compute")],
        );
        assert!(result.feedback.contains("CDN"));
        assert!(result.feedback.contains("Client -> App Server"));
    }

    #[test]
    fn test_step_serializes_camel_case() {
        let step = GuidedStep {
            step_number: 1,
            fr_text: "Users can upload videos".into(),
            components_needed: Vec::new(),
            connections_needed: Vec::new(),
            required_components: vec!["object_storage".into()],
            required_connections: Vec::new(),
        };
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("stepNumber"));
        assert!(json.contains("requiredComponents"));
        assert!(json.contains("frText"));
    }
}
