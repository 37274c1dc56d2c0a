//! Graph validation against a step's cumulative requirements.
//!
//! Checks the learner's live architecture for the presence of every
//! required component and connection, resolving abstract requirements
//! through the equivalence classes in [`super::normalize`]. Pure and
//! deterministic; a graph missing everything produces a failed result,
//! never an error.

use super::normalize::{acceptable_types, normalize, Category, CLIENT_TYPE};
use super::types::{GuidedStep, ValidationResult};
use crate::types::{ConnectionRequirement, SystemGraph};
use tracing::trace;

/// Validate the learner's graph against one step's cumulative requirements.
pub fn validate_step(step: &GuidedStep, graph: &SystemGraph) -> ValidationResult {
    let missing_components: Vec<String> = step
        .required_components
        .iter()
        .filter(|required| !component_satisfied(required, graph))
        .cloned()
        .collect();

    let missing_connections: Vec<ConnectionRequirement> = step
        .required_connections
        .iter()
        .filter(|conn| !connection_satisfied(conn, graph))
        .cloned()
        .collect();

    trace!(
        step = step.step_number,
        missing_components = missing_components.len(),
        missing_connections = missing_connections.len(),
        "validated graph against step"
    );

    ValidationResult::from_missing(missing_components, missing_connections)
}

/// A required type is satisfied by any graph component whose concrete type
/// falls in its equivalence class.
fn component_satisfied(required: &str, graph: &SystemGraph) -> bool {
    let class = acceptable_types(&normalize(required));
    graph.components.iter().any(|component| {
        let concrete = component.component_type.trim().to_lowercase();
        class.iter().any(|accepted| *accepted == concrete)
    })
}

/// Graph node ids that can stand in for the given requirement endpoint.
///
/// The literal client is special: it matches only nodes of literal type
/// "client", plus the bare "client" endpoint graph edges may use directly.
fn candidate_ids<'a>(endpoint: &str, graph: &'a SystemGraph) -> Vec<&'a str> {
    if endpoint == CLIENT_TYPE {
        let mut ids: Vec<&str> = graph
            .components
            .iter()
            .filter(|c| matches!(normalize(&c.component_type), Category::Client))
            .map(|c| c.id.as_str())
            .collect();
        // Edges may reference the literal "client" instead of a node id.
        ids.push(CLIENT_TYPE);
        return ids;
    }

    let class = acceptable_types(&normalize(endpoint));
    graph
        .components
        .iter()
        .filter(|c| {
            let concrete = c.component_type.trim().to_lowercase();
            class.iter().any(|accepted| *accepted == concrete)
        })
        .map(|c| c.id.as_str())
        .collect()
}

/// A connection requirement is satisfied by any edge running from a
/// from-candidate to a to-candidate.
fn connection_satisfied(required: &ConnectionRequirement, graph: &SystemGraph) -> bool {
    let from_ids = candidate_ids(&required.from, graph);
    if from_ids.is_empty() {
        return false;
    }
    let to_ids = candidate_ids(&required.to, graph);
    if to_ids.is_empty() {
        return false;
    }

    graph.connections.iter().any(|edge| {
        from_ids.contains(&edge.from.as_str()) && to_ids.contains(&edge.to.as_str())
    })
}

// =============================================================================
// Tests
// =============================================================================
