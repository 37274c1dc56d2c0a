//! Tutorial progress helpers.

use super::types::GuidedStep;
use super::validator::validate_step;
use crate::types::SystemGraph;

/// Completion ratio as a rounded 0-100 percentage. A zero-step tutorial
/// reports zero progress rather than dividing by zero.
pub fn tutorial_progress(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (completed as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// First step index (inclusive of `up_to_index`) whose validation fails
/// against the graph, or `None` when every checked step passes.
///
/// Used to catch regressions: a learner removing a component makes an
/// earlier, previously-passing step fail again.
pub fn first_failing_step(
    steps: &[GuidedStep],
    graph: &SystemGraph,
    up_to_index: usize,
) -> Option<usize> {
    let end = up_to_index.min(steps.len().saturating_sub(1));
    steps
        .iter()
        .take(end + 1)
        .position(|step| !validate_step(step, graph).passed)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn step(number: usize, components: Vec<&str>) -> GuidedStep {
        GuidedStep {
            step_number: number,
            fr_text: format!("step {number}"),
            components_needed: Vec::new(),
            connections_needed: Vec::new(),
            required_components: components.into_iter().map(String::from).collect(),
            required_connections: Vec::new(),
        }
    }

    #[test]
    fn test_progress_ratio() {
        assert_eq!(tutorial_progress(0, 4), 0);
        assert_eq!(tutorial_progress(1, 4), 25);
        assert_eq!(tutorial_progress(1, 3), 33);
        assert_eq!(tutorial_progress(2, 3), 67);
        assert_eq!(tutorial_progress(4, 4), 100);
    }

    #[test]
    fn test_progress_zero_total() {
        assert_eq!(tutorial_progress(0, 0), 0);
        assert_eq!(tutorial_progress(3, 0), 0);
    }

    #[test]
    fn test_progress_overshoot_clamped() {
        assert_eq!(tutorial_progress(5, 4), 100);
    }

    #[test]
    fn test_first_failing_step_finds_regression() {
        // Graph satisfies step 0 (storage) but not step 1 (adds cache).
        let steps = vec![
            step(1, vec!["storage"]),
            step(2, vec!["storage", "cache"]),
            step(3, vec!["storage", "cache", "compute"]),
        ];
        let mut graph = SystemGraph::new();
        graph.add_component("db1", "postgresql");

        assert_eq!(first_failing_step(&steps, &graph, 2), Some(1));
    }

    #[test]
    fn test_first_failing_step_all_pass() {
        let steps = vec![step(1, vec!["storage"]), step(2, vec!["storage", "cache"])];
        let mut graph = SystemGraph::new();
        graph.add_component("db1", "postgresql");
        graph.add_component("k1", "redis");

        assert_eq!(first_failing_step(&steps, &graph, 1), None);
    }

    #[test]
    fn test_first_failing_step_respects_upper_bound() {
        let steps = vec![step(1, vec!["storage"]), step(2, vec!["storage", "cache"])];
        let mut graph = SystemGraph::new();
        graph.add_component("db1", "postgresql");

        // Only step 0 is checked, and it passes.
        assert_eq!(first_failing_step(&steps, &graph, 0), None);
    }

    #[test]
    fn test_first_failing_step_bound_clamped() {
        let steps = vec![step(1, vec!["cache"])];
        assert_eq!(first_failing_step(&steps, &SystemGraph::new(), 99), Some(0));
    }

    #[test]
    fn test_first_failing_step_empty_steps() {
        assert_eq!(first_failing_step(&[], &SystemGraph::new(), 5), None);
    }
}
