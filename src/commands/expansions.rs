//! Expansion and timeout updates made at run time

use super::{is_false, require, resolve_builtin, Command, Target};
use crate::core::CommandDefinition;
use crate::error::{Result, ShrubError};
use serde::Serialize;

const EXPANSIONS_UPDATE: &str = "expansions.update";
const EXPANSIONS_WRITE: &str = "expansions.write";
const TIMEOUT_UPDATE: &str = "timeout.update";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpansionUpdate {
    pub key: String,
    pub value: String,

    /// Append to an existing value instead of replacing it
    #[serde(skip_serializing_if = "is_false")]
    pub concat: bool,
}

impl ExpansionUpdate {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            concat: false,
        }
    }
}

/// Set expansions from inline pairs and/or a YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpansionsUpdate {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<ExpansionUpdate>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,

    #[serde(skip_serializing_if = "is_false")]
    pub ignore_missing_file: bool,
}

impl Command for ExpansionsUpdate {
    fn validate(&self) -> Result<()> {
        if self.updates.is_empty() && self.file.is_empty() {
            return Err(ShrubError::invalid(
                EXPANSIONS_UPDATE,
                "one of 'updates' or 'file' must be specified",
            ));
        }

        if let Some(update) = self.updates.iter().find(|u| u.key.is_empty()) {
            return Err(ShrubError::invalid(
                EXPANSIONS_UPDATE,
                format!("update with value '{}' has no key", update.value),
            ));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(EXPANSIONS_UPDATE))
    }
}

/// Write the current expansions to a YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpansionsWrite {
    pub file: String,

    #[serde(skip_serializing_if = "is_false")]
    pub redacted: bool,
}

impl Command for ExpansionsWrite {
    fn validate(&self) -> Result<()> {
        require(EXPANSIONS_WRITE, "file", &self.file)
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(EXPANSIONS_WRITE))
    }
}

/// Change the running task's timeouts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeoutUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec_timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Command for TimeoutUpdate {
    fn validate(&self) -> Result<()> {
        if self.exec_timeout_secs.is_none() && self.timeout_secs.is_none() {
            return Err(ShrubError::invalid(
                TIMEOUT_UPDATE,
                "one of 'exec_timeout_secs' or 'timeout_secs' must be specified",
            ));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(TIMEOUT_UPDATE))
    }
}
