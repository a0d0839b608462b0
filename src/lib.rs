//! shrub - programmatic builder for CI pipeline definitions

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use commands::Command;
pub use crate::core::{
    CommandDefinition, CommandSequence, Configuration, OutputFormat, Params, Task,
    TaskDependency, TaskGroup, TaskSpec, Variant, Vars,
};
pub use error::{Result, ShrubError};
