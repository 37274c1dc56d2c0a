// Library exports for the Guiar guided-tutorial engine
pub mod cli;
pub mod guided;
pub mod types;

// Re-export key types for convenience
pub use guided::{
    acceptable_types, build_tutorial, build_tutorial_from_components, display_name,
    first_failing_step, match_components, normalize, tutorial_progress, validate_step, Category,
    GuidedStep, GuidedTutorial, ValidationResult, CLIENT_TYPE,
};
pub use types::{
    ComponentRequirement, ConnectionRequirement, FunctionalRequirements, GraphComponent,
    GraphConnection, ProblemDefinition, ProblemError, SystemGraph,
};
