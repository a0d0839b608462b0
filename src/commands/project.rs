//! Project checkout

use super::{require, resolve_builtin, Command, Target};
use crate::core::CommandDefinition;
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

const GET_PROJECT: &str = "git.get_project";

/// Clone the project (and optional module revisions) into a directory
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetProject {
    pub directory: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Module name to revision
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub revisions: BTreeMap<String, String>,
}

impl GetProject {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

impl Command for GetProject {
    fn validate(&self) -> Result<()> {
        require(GET_PROJECT, "directory", &self.directory)
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(GET_PROJECT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_project() {
        let mut cmd = GetProject::new("src");
        cmd.revisions.insert("docs".to_string(), "abc123".to_string());

        let def = cmd.resolve().unwrap();
        assert_eq!(def.command_name.as_deref(), Some("git.get_project"));
        assert_eq!(
            serde_json::to_value(def.params).unwrap(),
            json!({"directory": "src", "revisions": {"docs": "abc123"}})
        );
    }

    #[test]
    fn test_get_project_requires_directory() {
        assert!(GetProject::default().resolve().is_err());
    }
}
