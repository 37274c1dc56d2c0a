//! Tutorial step assembly.
//!
//! Converts a problem definition into an ordered, immutable list of
//! teaching steps. Each functional requirement introduces the components
//! its text matches, and every step carries the full cumulative validation
//! target built so far. When keyword matching introduces nothing across
//! the whole requirement list, the fallback builder teaches straight off
//! the mandatory component list instead.

use super::keywords::match_components;
use super::normalize::{display_name, normalize, CLIENT_TYPE};
use super::types::{GuidedStep, GuidedTutorial};
use crate::types::{ConnectionRequirement, ProblemDefinition};
use indexmap::IndexSet;
use tracing::debug;

/// Build the guided tutorial for a problem.
///
/// One step per functional requirement, keyword-driven. Falls back to
/// [`build_tutorial_from_components`] when no requirement text introduces
/// any component. An empty `mustHave` list yields a zero-step tutorial;
/// callers treat that as broken upstream content.
pub fn build_tutorial(problem: &ProblemDefinition) -> GuidedTutorial {
    let frs = effective_frs(problem);
    let must_have = problem.must_have();
    let must_connect = problem.must_connect();

    let mut introduced: IndexSet<String> = IndexSet::new();
    let mut steps = Vec::with_capacity(frs.len());

    for (index, fr_text) in frs.iter().enumerate() {
        let newly_needed = match_components(fr_text, must_have, &introduced);
        let new_types: Vec<String> = newly_needed
            .iter()
            .map(|c| c.component_type.clone())
            .collect();

        for component_type in &new_types {
            introduced.insert(component_type.clone());
        }

        let connections_needed = newly_relevant_connections(must_connect, &new_types, &introduced);
        // Recomputed from the full mustConnect list on purpose: a component
        // introduced at this step can retroactively complete a connection
        // declared relevant to an earlier one.
        let required_connections = cumulative_connections(must_connect, &introduced);

        debug!(
            step = index + 1,
            components = ?new_types,
            "assembled tutorial step"
        );

        steps.push(GuidedStep {
            step_number: index + 1,
            fr_text: fr_text.clone(),
            components_needed: newly_needed,
            connections_needed,
            required_components: introduced.iter().cloned().collect(),
            required_connections,
        });
    }

    if steps.iter().all(|s| s.components_needed.is_empty()) {
        debug!("keyword matching introduced nothing; using component-list fallback");
        return build_tutorial_from_components(problem);
    }

    GuidedTutorial {
        problem_id: problem.id.clone(),
        problem_title: problem.title.clone(),
        total_steps: steps.len(),
        steps,
    }
}

/// Build a tutorial directly from the mandatory component list: exactly one
/// step per `mustHave` entry, in its given order.
pub fn build_tutorial_from_components(problem: &ProblemDefinition) -> GuidedTutorial {
    let must_connect = problem.must_connect();

    let mut introduced: IndexSet<String> = IndexSet::new();
    let mut steps = Vec::with_capacity(problem.must_have().len());

    for (index, requirement) in problem.must_have().iter().enumerate() {
        introduced.insert(requirement.component_type.clone());
        let new_types = vec![requirement.component_type.clone()];

        let connections_needed = newly_relevant_connections(must_connect, &new_types, &introduced);
        let required_connections = cumulative_connections(must_connect, &introduced);

        steps.push(GuidedStep {
            step_number: index + 1,
            fr_text: format!(
                "Add {}",
                display_name(&normalize(&requirement.component_type))
            ),
            components_needed: vec![requirement.clone()],
            connections_needed,
            required_components: introduced.iter().cloned().collect(),
            required_connections,
        });
    }

    GuidedTutorial {
        problem_id: problem.id.clone(),
        problem_title: problem.title.clone(),
        total_steps: steps.len(),
        steps,
    }
}

/// The teaching sequence: the problem's own requirement strings, or labels
/// derived from `mustHave` when the content supplies none.
fn effective_frs(problem: &ProblemDefinition) -> Vec<String> {
    match &problem.user_facing_frs {
        Some(frs) if !frs.is_empty() => frs.clone(),
        _ => problem
            .must_have()
            .iter()
            .map(|req| {
                format!(
                    "Add {}: {}",
                    display_name(&normalize(&req.component_type)),
                    req.reason
                )
            })
            .collect(),
    }
}

/// An endpoint counts as introduced when it is the literal client or when
/// some introduced type normalizes to the same category.
fn endpoint_introduced(endpoint: &str, introduced: &IndexSet<String>) -> bool {
    if endpoint == CLIENT_TYPE {
        return true;
    }
    let category = normalize(endpoint);
    introduced.iter().any(|t| normalize(t) == category)
}

fn touches_new_component(conn: &ConnectionRequirement, new_types: &[String]) -> bool {
    new_types.iter().any(|t| {
        let category = normalize(t);
        normalize(&conn.from) == category || normalize(&conn.to) == category
    })
}

/// Connections that become teachable at this step: they touch a component
/// introduced right now, and every endpoint is present (or the client).
fn newly_relevant_connections(
    must_connect: &[ConnectionRequirement],
    new_types: &[String],
    introduced: &IndexSet<String>,
) -> Vec<ConnectionRequirement> {
    must_connect
        .iter()
        .filter(|conn| {
            touches_new_component(conn, new_types)
                && endpoint_introduced(&conn.from, introduced)
                && endpoint_introduced(&conn.to, introduced)
        })
        .cloned()
        .collect()
}

/// Every connection whose endpoints are all introduced so far.
fn cumulative_connections(
    must_connect: &[ConnectionRequirement],
    introduced: &IndexSet<String>,
) -> Vec<ConnectionRequirement> {
    must_connect
        .iter()
        .filter(|conn| {
            endpoint_introduced(&conn.from, introduced)
                && endpoint_introduced(&conn.to, introduced)
        })
        .cloned()
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
