//! Artifact attachment

use super::{is_false, resolve_builtin, Command, Target};
use crate::core::CommandDefinition;
use crate::error::{Result, ShrubError};
use serde::Serialize;

const ATTACH_ARTIFACTS: &str = "attach.artifacts";

/// Attach artifact description files to the task
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttachArtifacts {
    pub files: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,

    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl Command for AttachArtifacts {
    fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(ShrubError::missing(ATTACH_ARTIFACTS, "files"));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(ATTACH_ARTIFACTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attach_artifacts() {
        assert!(AttachArtifacts::default().validate().is_err());

        let def = AttachArtifacts {
            files: vec!["artifacts.json".to_string()],
            optional: true,
            ..AttachArtifacts::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(def.command_name.as_deref(), Some("attach.artifacts"));
        assert_eq!(
            serde_json::to_value(def.params).unwrap(),
            json!({"files": ["artifacts.json"], "optional": true})
        );
    }
}
