//! Guided tutorial engine.
//!
//! Provides:
//! - Component type normalization and equivalence classes
//! - Keyword matching between requirement text and components
//! - Step-by-step tutorial assembly with cumulative validation targets
//! - Graph validation and progress tracking

mod builder;
mod keywords;
mod normalize;
mod progress;
mod types;
mod validator;

pub use builder::{build_tutorial, build_tutorial_from_components};
pub use keywords::match_components;
pub use normalize::{acceptable_types, display_name, normalize, Category, CLIENT_TYPE};
pub use progress::{first_failing_step, tutorial_progress};
pub use types::{GuidedStep, GuidedTutorial, ValidationResult};
pub use validator::validate_step;
