//! Core domain models for pipeline configurations
//!
//! This module defines the entity graph that is built incrementally and
//! rendered into the engine's document: steps, sequences, tasks, groups,
//! variants, and the configuration that owns them.

pub mod config;
pub mod definition;
pub mod group;
pub mod sequence;
pub mod task;
pub mod variant;

pub use config::*;
pub use definition::*;
pub use group::*;
pub use sequence::*;
pub use task::*;
pub use variant::*;
