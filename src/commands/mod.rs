//! Strongly-typed built-in commands
//!
//! Every command knows how to validate its own fields and resolve itself into
//! a generic [`CommandDefinition`]. Resolution projects the command's
//! serialized fields into `params` under their engine-facing names; fields
//! marked `#[serde(skip)]` are build-time only and never reach the document.

pub mod archive;
pub mod artifacts;
pub mod exec;
pub mod expansions;
pub mod project;
pub mod results;
pub mod s3;

pub use archive::{ArchiveCreate, ArchiveExtract, ArchiveFormat};
pub use artifacts::AttachArtifacts;
pub use exec::{ShellExec, SubprocessExec};
pub use expansions::{ExpansionUpdate, ExpansionsUpdate, ExpansionsWrite, TimeoutUpdate};
pub use project::GetProject;
pub use results::{ResultsGoTest, ResultsJson, ResultsXunit, TestOutputFormat};
pub use s3::{S3Copy, S3CopyFile, S3Get, S3Location, S3Put};

use crate::core::CommandDefinition;
use crate::error::{Result, ShrubError};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// A command description that can be turned into a pipeline step
pub trait Command {
    /// Check the command's required fields
    fn validate(&self) -> Result<()>;

    /// Validate and convert into the generic step shape
    fn resolve(&self) -> Result<CommandDefinition>;
}

impl Command for CommandDefinition {
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        Ok(self.clone())
    }
}

impl<T: Command + ?Sized> Command for &T {
    fn validate(&self) -> Result<()> {
        (**self).validate()
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        (**self).resolve()
    }
}

impl<T: Command + ?Sized> Command for Box<T> {
    fn validate(&self) -> Result<()> {
        (**self).validate()
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        (**self).resolve()
    }
}

/// Which step key a built-in command is referenced through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// Emitted as `func`
    Function(&'static str),
    /// Emitted as `command`
    Command(&'static str),
}

impl Target {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Target::Function(name) | Target::Command(name) => name,
        }
    }
}

/// Build a definition for `target` with the command's fields as params.
/// Callers validate first.
pub(crate) fn resolve_builtin<C: Serialize>(cmd: &C, target: Target) -> Result<CommandDefinition> {
    let params = match serde_json::to_value(cmd)? {
        Value::Object(map) => map,
        _ => return Err(ShrubError::NonMappingParams { command: target.name() }),
    };

    debug!("Resolved {} with {} params", target.name(), params.len());

    let mut def = match target {
        Target::Function(name) => CommandDefinition::with_function(name),
        Target::Command(name) => CommandDefinition::with_command(name),
    };
    def.extend_params(params);
    Ok(def)
}

/// Fail with `MissingField` when `value` is empty
pub(crate) fn require(command: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ShrubError::missing(command, field));
    }
    Ok(())
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}
