//! Archive pack and unpack

use super::{require, resolve_builtin, Command, Target};
use crate::core::CommandDefinition;
use crate::error::{Result, ShrubError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const ARCHIVE_CREATE: &str = "archive creation";
const ARCHIVE_EXTRACT: &str = "archive extraction";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tarball,
    /// Sniff the format at extraction time
    Auto,
}

impl ArchiveFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::Tarball => "tarball",
            ArchiveFormat::Auto => "auto",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchiveFormat {
    type Err = ShrubError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zip" => Ok(ArchiveFormat::Zip),
            "tarball" => Ok(ArchiveFormat::Tarball),
            "auto" => Ok(ArchiveFormat::Auto),
            other => Err(ShrubError::InvalidArchiveFormat {
                operation: "archives",
                format: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArchiveOperation {
    Create,
    Extract,
}

impl ArchiveOperation {
    fn label(self) -> &'static str {
        match self {
            ArchiveOperation::Create => ARCHIVE_CREATE,
            ArchiveOperation::Extract => ARCHIVE_EXTRACT,
        }
    }
}

/// Built-in command for an (operation, format) pair
fn archive_command(op: ArchiveOperation, format: ArchiveFormat) -> Option<&'static str> {
    match (op, format) {
        (ArchiveOperation::Create, ArchiveFormat::Zip) => Some("archive.zip_pack"),
        (ArchiveOperation::Create, ArchiveFormat::Tarball) => Some("archive.targz_pack"),
        (ArchiveOperation::Create, ArchiveFormat::Auto) => None,
        (ArchiveOperation::Extract, ArchiveFormat::Zip) => Some("archive.zip_extract"),
        (ArchiveOperation::Extract, ArchiveFormat::Tarball) => Some("archive.targz_extract"),
        (ArchiveOperation::Extract, ArchiveFormat::Auto) => Some("archive.auto_extract"),
    }
}

fn resolve_format(op: ArchiveOperation, format: Option<ArchiveFormat>) -> Result<&'static str> {
    let format = format.ok_or_else(|| ShrubError::missing(op.label(), "format"))?;
    archive_command(op, format).ok_or_else(|| ShrubError::InvalidArchiveFormat {
        operation: op.label(),
        format: format.to_string(),
    })
}

/// Pack a directory into an archive
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArchiveCreate {
    #[serde(skip)]
    pub format: Option<ArchiveFormat>,

    pub target: String,
    pub source_dir: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(rename = "exclude_files", skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Command for ArchiveCreate {
    fn validate(&self) -> Result<()> {
        resolve_format(ArchiveOperation::Create, self.format)?;
        require(ARCHIVE_CREATE, "target", &self.target)?;
        require(ARCHIVE_CREATE, "source_dir", &self.source_dir)
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        let name = resolve_format(ArchiveOperation::Create, self.format)?;
        resolve_builtin(self, Target::Command(name))
    }
}

/// Unpack an archive into a directory
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArchiveExtract {
    #[serde(skip)]
    pub format: Option<ArchiveFormat>,

    pub path: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination: String,

    #[serde(rename = "exclude_files", skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Command for ArchiveExtract {
    fn validate(&self) -> Result<()> {
        resolve_format(ArchiveOperation::Extract, self.format)?;
        require(ARCHIVE_EXTRACT, "path", &self.path)
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        let name = resolve_format(ArchiveOperation::Extract, self.format)?;
        resolve_builtin(self, Target::Command(name))
    }
}
