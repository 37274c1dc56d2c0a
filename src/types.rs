//! Shared data model for the guided tutorial engine.
//!
//! These types mirror the JSON interface of the two external collaborators:
//! the problem definition content (what the target architecture must
//! contain) and the graph editor (what the learner has actually built).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised at the problem/graph loading boundary.
///
/// The engine itself is total and never fails; malformed or unusable input
/// is rejected here, before any tutorial is built.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("problem '{0}' has an empty mustHave component list")]
    EmptyMustHave(String),

    #[error("graph contains duplicate component id '{0}'")]
    DuplicateComponentId(String),
}

// =============================================================================
// Problem Definition
// =============================================================================

/// One abstract component the finished architecture must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRequirement {
    /// Abstract component type, e.g. "storage" or "object_storage"
    #[serde(rename = "type")]
    pub component_type: String,
    /// Human-readable justification, shown to the learner as a hint
    pub reason: String,
}

impl ComponentRequirement {
    pub fn new(component_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            reason: reason.into(),
        }
    }
}

/// A directed connection the finished architecture must contain.
///
/// Endpoints are abstract component types, or the literal `"client"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequirement {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConnectionRequirement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// The target-architecture requirements of a problem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalRequirements {
    pub must_have: Vec<ComponentRequirement>,
    #[serde(default)]
    pub must_connect: Vec<ConnectionRequirement>,
}

/// A complete problem definition, as supplied by the content layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDefinition {
    pub id: String,
    pub title: String,
    /// Ordered teaching sequence; when absent, default requirement strings
    /// are derived from `must_have`
    #[serde(default, rename = "userFacingFRs")]
    pub user_facing_frs: Option<Vec<String>>,
    pub functional_requirements: FunctionalRequirements,
}

impl ProblemDefinition {
    /// Parse a problem definition from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ProblemError> {
        let problem: Self = serde_json::from_str(json)?;
        problem.validate()?;
        Ok(problem)
    }

    /// Reject problem content the engine cannot teach from.
    pub fn validate(&self) -> Result<(), ProblemError> {
        if self.functional_requirements.must_have.is_empty() {
            return Err(ProblemError::EmptyMustHave(self.id.clone()));
        }
        Ok(())
    }

    pub fn must_have(&self) -> &[ComponentRequirement] {
        &self.functional_requirements.must_have
    }

    pub fn must_connect(&self) -> &[ConnectionRequirement] {
        &self.functional_requirements.must_connect
    }
}

// =============================================================================
// System Graph
// =============================================================================

/// A component the learner has placed on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphComponent {
    pub id: String,
    /// Concrete type name, e.g. "postgresql" or "app_server"
    #[serde(rename = "type")]
    pub component_type: String,
}

impl GraphComponent {
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
        }
    }
}

/// A directed edge between two placed components.
///
/// `from`/`to` reference component ids, or the literal `"client"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphConnection {
    pub from: String,
    pub to: String,
}

impl GraphConnection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The learner's live architecture. Owned and mutated by the graph editor;
/// this engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemGraph {
    #[serde(default)]
    pub components: Vec<GraphComponent>,
    #[serde(default)]
    pub connections: Vec<GraphConnection>,
}

impl SystemGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a system graph from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ProblemError> {
        let graph: Self = serde_json::from_str(json)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Reject graphs with duplicate component ids; connection matching
    /// resolves endpoints by id and needs them to be unambiguous.
    pub fn validate(&self) -> Result<(), ProblemError> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                return Err(ProblemError::DuplicateComponentId(component.id.clone()));
            }
        }
        Ok(())
    }

    pub fn add_component(&mut self, id: impl Into<String>, component_type: impl Into<String>) {
        self.components.push(GraphComponent::new(id, component_type));
    }

    pub fn add_connection(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.connections.push(GraphConnection::new(from, to));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PROBLEM_JSON: &str = r#"{
        "id": "video-sharing",
        "title": "Design a Video Sharing Service",
        "userFacingFRs": ["Users can upload short videos"],
        "functionalRequirements": {
            "mustHave": [
                {"type": "object_storage", "reason": "store video files"}
            ],
            "mustConnect": [
                {"from": "client", "to": "object_storage"}
            ]
        }
    }"#;

    #[test]
    fn test_problem_from_json() {
        let problem = ProblemDefinition::from_json(PROBLEM_JSON).unwrap();
        assert_eq!(problem.id, "video-sharing");
        assert_eq!(problem.must_have().len(), 1);
        assert_eq!(problem.must_have()[0].component_type, "object_storage");
        assert_eq!(problem.must_connect()[0].from, "client");
    }

    #[test]
    fn test_problem_empty_must_have_rejected() {
        let json = r#"{
            "id": "empty",
            "title": "Empty",
            "functionalRequirements": {"mustHave": [], "mustConnect": []}
        }"#;
        let err = ProblemDefinition::from_json(json).unwrap_err();
        assert!(matches!(err, ProblemError::EmptyMustHave(id) if id == "empty"));
    }

    #[test]
    fn test_problem_frs_optional() {
        let json = r#"{
            "id": "p",
            "title": "P",
            "functionalRequirements": {
                "mustHave": [{"type": "storage", "reason": "keep records"}]
            }
        }"#;
        let problem = ProblemDefinition::from_json(json).unwrap();
        assert!(problem.user_facing_frs.is_none());
        assert!(problem.must_connect().is_empty());
    }

    #[test]
    fn test_graph_from_json() {
        let json = r#"{
            "components": [
                {"id": "db1", "type": "postgresql"},
                {"id": "web1", "type": "app_server"}
            ],
            "connections": [{"from": "web1", "to": "db1"}]
        }"#;
        let graph = SystemGraph::from_json(json).unwrap();
        assert_eq!(graph.components.len(), 2);
        assert_eq!(graph.connections.len(), 1);
    }

    #[test]
    fn test_graph_duplicate_id_rejected() {
        let json = r#"{
            "components": [
                {"id": "db1", "type": "postgresql"},
                {"id": "db1", "type": "redis"}
            ],
            "connections": []
        }"#;
        let err = SystemGraph::from_json(json).unwrap_err();
        assert!(matches!(err, ProblemError::DuplicateComponentId(id) if id == "db1"));
    }

    #[test]
    fn test_graph_mutation_helpers() {
        let mut graph = SystemGraph::new();
        graph.add_component("db1", "postgresql");
        graph.add_connection("client", "db1");
        assert_eq!(graph.components[0].component_type, "postgresql");
        assert_eq!(graph.connections[0].from, "client");
    }

    #[test]
    fn test_connection_requirement_serializes_without_reason() {
        let conn = ConnectionRequirement::new("compute", "storage");
        let json = serde_json::to_string(&conn).unwrap();
        assert!(!json.contains("reason"));

        let conn = conn.with_reason("app servers read and write records");
        let json = serde_json::to_string(&conn).unwrap();
        assert!(json.contains("reason"));
    }
}
