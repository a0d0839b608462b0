//! Test result attachment

use super::{require, resolve_builtin, Command, Target};
use crate::core::CommandDefinition;
use crate::error::{Result, ShrubError};
use serde::Serialize;

const ATTACH_RESULTS: &str = "attach.results";
const ATTACH_XUNIT: &str = "attach.xunit_results";
const GOTEST_PARSE_JSON: &str = "gotest.parse_json";
const GOTEST_PARSE_FILES: &str = "gotest.parse_files";

/// Attach results already in the engine's JSON report format
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsJson {
    #[serde(rename = "file_location")]
    pub file: String,
}

impl Command for ResultsJson {
    fn validate(&self) -> Result<()> {
        require(ATTACH_RESULTS, "file_location", &self.file)
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(ATTACH_RESULTS))
    }
}

/// Attach one or more xUnit XML reports
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsXunit {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl Command for ResultsXunit {
    fn validate(&self) -> Result<()> {
        if self.file.is_empty() && self.files.is_empty() {
            return Err(ShrubError::invalid(
                ATTACH_XUNIT,
                "one of 'file' or 'files' must be specified",
            ));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(ATTACH_XUNIT))
    }
}

/// Output format of the go test runner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestOutputFormat {
    /// `go test -json` event stream
    #[default]
    Structured,
    /// Plain verbose text output
    Legacy,
}

/// Parse go test output files
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsGoTest {
    #[serde(skip)]
    pub format: TestOutputFormat,

    pub files: Vec<String>,
}

impl ResultsGoTest {
    fn command_name(&self) -> &'static str {
        match self.format {
            TestOutputFormat::Structured => GOTEST_PARSE_JSON,
            TestOutputFormat::Legacy => GOTEST_PARSE_FILES,
        }
    }
}

impl Command for ResultsGoTest {
    fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(ShrubError::missing(self.command_name(), "files"));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(self.command_name()))
    }
}
