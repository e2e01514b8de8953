//! Scenario engine for SupportDesk.
//!
//! Holds an ordered, load-once table of scenarios. Each scenario pairs an
//! action scope and a set of conditions over a nested JSON context with a
//! response template. Evaluation walks the table in order and renders the
//! template of the first scenario whose conditions all hold.

pub mod engine;
pub mod error;
pub mod loader;
pub mod path;
pub mod predicate;
pub mod scenario;
pub mod template;

pub use engine::ScenarioEngine;
pub use error::{LoadError, RenderError, TemplateError};
pub use loader::{load_file, load_str};
pub use path::FieldPath;
pub use predicate::{Comparison, Predicate};
pub use scenario::{ANY_ACTION, ActionScope, Condition, Scenario};
pub use template::{Template, render};
