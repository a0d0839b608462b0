//! Shell and subprocess execution

use super::{is_false, require, resolve_builtin, Command, Target};
use crate::core::CommandDefinition;
use crate::error::{Result, ShrubError};
use serde::Serialize;
use std::collections::BTreeMap;

const SHELL_EXEC: &str = "shell.exec";
const SUBPROCESS_EXEC: &str = "subprocess.exec";

/// Run a script through a shell
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShellExec {
    pub script: String,

    #[serde(rename = "working_dir", skip_serializing_if = "String::is_empty")]
    pub working_directory: String,

    /// Shell binary, e.g. "bash"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shell: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "is_false")]
    pub background: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub silent: bool,

    #[serde(rename = "continue_on_err", skip_serializing_if = "is_false")]
    pub continue_on_error: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub system_log: bool,

    #[serde(rename = "redirect_standard_error_to_output", skip_serializing_if = "is_false")]
    pub combine_output: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub ignore_standard_error: bool,

    #[serde(rename = "ignore_standard_out", skip_serializing_if = "is_false")]
    pub ignore_standard_output: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub add_expansions_to_env: bool,
}

impl ShellExec {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }
}

impl Command for ShellExec {
    fn validate(&self) -> Result<()> {
        require(SHELL_EXEC, "script", &self.script)
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Function(SHELL_EXEC))
    }
}

/// Run a binary directly, without a shell
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubprocessExec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub binary: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Full command line, split by the engine
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command: String,

    #[serde(rename = "working_dir", skip_serializing_if = "String::is_empty")]
    pub working_directory: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "is_false")]
    pub background: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub silent: bool,

    #[serde(rename = "continue_on_err", skip_serializing_if = "is_false")]
    pub continue_on_error: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub system_log: bool,

    #[serde(rename = "redirect_standard_error_to_output", skip_serializing_if = "is_false")]
    pub combine_output: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub ignore_standard_error: bool,

    #[serde(rename = "ignore_standard_out", skip_serializing_if = "is_false")]
    pub ignore_standard_output: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub keep_empty_args: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub add_expansions_to_env: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_expansions_in_env: Vec<String>,
}

impl SubprocessExec {
    pub fn binary<I, S>(binary: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            binary: binary.into(),
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }
}

impl Command for SubprocessExec {
    fn validate(&self) -> Result<()> {
        match (self.binary.is_empty(), self.command.is_empty()) {
            (true, true) => Err(ShrubError::invalid(
                SUBPROCESS_EXEC,
                "one of 'binary' or 'command' must be specified",
            )),
            (false, false) => Err(ShrubError::invalid(
                SUBPROCESS_EXEC,
                "'binary' and 'command' are mutually exclusive",
            )),
            _ => Ok(()),
        }
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Function(SUBPROCESS_EXEC))
    }
}
