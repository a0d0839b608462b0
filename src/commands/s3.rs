//! S3 transfer commands

use super::{is_false, require, resolve_builtin, Command, Target};
use crate::core::CommandDefinition;
use crate::error::{Result, ShrubError};
use serde::Serialize;

const S3_PUT: &str = "s3.put";
const S3_GET: &str = "s3.get";
const S3_COPY: &str = "s3Copy.copy";

fn require_credentials(command: &'static str, key: &str, secret: &str) -> Result<()> {
    require(command, "aws_key", key)?;
    require(command, "aws_secret", secret)
}

/// Upload one file, or every file matching the include filters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct S3Put {
    pub aws_key: String,
    pub aws_secret: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub local_file: String,

    #[serde(rename = "local_files_include_filter", skip_serializing_if = "Vec::is_empty")]
    pub local_file_include_filter: Vec<String>,

    #[serde(rename = "local_files_include_filter_prefix", skip_serializing_if = "String::is_empty")]
    pub local_file_include_filter_prefix: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_file: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub bucket: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub permissions: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_type: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub build_variants: Vec<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl Command for S3Put {
    fn validate(&self) -> Result<()> {
        require_credentials(S3_PUT, &self.aws_key, &self.aws_secret)?;

        if self.local_file.is_empty() && self.local_file_include_filter.is_empty() {
            return Err(ShrubError::invalid(
                S3_PUT,
                "one of 'local_file' or 'local_files_include_filter' must be specified",
            ));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(S3_PUT))
    }
}

/// Download a file, or a tarball to extract in place
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct S3Get {
    pub aws_key: String,
    pub aws_secret: String,
    pub remote_file: String,
    pub bucket: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub local_file: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub extract_to: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub build_variants: Vec<String>,
}

impl Command for S3Get {
    fn validate(&self) -> Result<()> {
        require_credentials(S3_GET, &self.aws_key, &self.aws_secret)?;
        require(S3_GET, "remote_file", &self.remote_file)?;
        require(S3_GET, "bucket", &self.bucket)?;

        match (self.local_file.is_empty(), self.extract_to.is_empty()) {
            (true, true) => Err(ShrubError::invalid(
                S3_GET,
                "one of 'local_file' or 'extract_to' must be specified",
            )),
            (false, false) => Err(ShrubError::invalid(
                S3_GET,
                "'local_file' and 'extract_to' are mutually exclusive",
            )),
            _ => Ok(()),
        }
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(S3_GET))
    }
}

/// A bucket/path pair
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct S3Location {
    pub bucket: String,
    pub path: String,
}

impl S3Location {
    pub fn new(bucket: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            path: path.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.bucket.is_empty() && !self.path.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct S3CopyFile {
    pub source: S3Location,
    pub destination: S3Location,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub build_variants: Vec<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
}

/// Copy objects between buckets without a local round trip
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct S3Copy {
    pub aws_key: String,
    pub aws_secret: String,

    #[serde(rename = "s3_copy_files")]
    pub files: Vec<S3CopyFile>,
}

impl Command for S3Copy {
    fn validate(&self) -> Result<()> {
        require_credentials(S3_COPY, &self.aws_key, &self.aws_secret)?;

        if self.files.is_empty() {
            return Err(ShrubError::missing(S3_COPY, "s3_copy_files"));
        }

        for (idx, file) in self.files.iter().enumerate() {
            if !file.source.is_complete() || !file.destination.is_complete() {
                return Err(ShrubError::invalid(
                    S3_COPY,
                    format!("file {} needs a bucket and path for both source and destination", idx),
                ));
            }
        }
        Ok(())
    }

    fn resolve(&self) -> Result<CommandDefinition> {
        self.validate()?;
        resolve_builtin(self, Target::Command(S3_COPY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentialed_put() -> S3Put {
        S3Put {
            aws_key: "${aws_key}".to_string(),
            aws_secret: "${aws_secret}".to_string(),
            bucket: "builds".to_string(),
            remote_file: "dist/app.tgz".to_string(),
            ..S3Put::default()
        }
    }

    #[test]
    fn test_s3_put_requires_credentials() {
        let missing_key = S3Put {
            aws_key: String::new(),
            local_file: "app.tgz".to_string(),
            ..credentialed_put()
        };
        assert!(matches!(
            missing_key.validate(),
            Err(ShrubError::MissingField { field: "aws_key", .. })
        ));

        let missing_secret = S3Put {
            aws_secret: String::new(),
            local_file: "app.tgz".to_string(),
            ..credentialed_put()
        };
        assert!(matches!(
            missing_secret.validate(),
            Err(ShrubError::MissingField { field: "aws_secret", .. })
        ));
    }

    #[test]
    fn test_s3_put_requires_file_or_filter() {
        assert!(credentialed_put().validate().is_err());

        let single = S3Put {
            local_file: "app.tgz".to_string(),
            ..credentialed_put()
        };
        assert!(single.validate().is_ok());

        let filtered = S3Put {
            local_file_include_filter: vec!["build/*.tgz".to_string()],
            ..credentialed_put()
        };
        assert!(filtered.validate().is_ok());
    }

    #[test]
    fn test_s3_put_resolves_command() {
        let put = S3Put {
            local_file: "app.tgz".to_string(),
            permissions: "public-read".to_string(),
            ..credentialed_put()
        };

        let def = put.resolve().unwrap();
        assert_eq!(def.command_name.as_deref(), Some("s3.put"));
        let params = def.params.unwrap();
        assert_eq!(params["local_file"], json!("app.tgz"));
        assert_eq!(params["permissions"], json!("public-read"));
        assert!(!params.contains_key("local_files_include_filter"));
    }

    #[test]
    fn test_s3_get_destination_rules() {
        let get = S3Get {
            aws_key: "k".to_string(),
            aws_secret: "s".to_string(),
            remote_file: "dist/app.tgz".to_string(),
            bucket: "builds".to_string(),
            ..S3Get::default()
        };
        assert!(get.validate().is_err());

        let to_file = S3Get {
            local_file: "app.tgz".to_string(),
            ..get.clone()
        };
        assert_eq!(to_file.resolve().unwrap().command_name.as_deref(), Some("s3.get"));

        let both = S3Get {
            extract_to: "app".to_string(),
            ..to_file
        };
        assert!(both.validate().is_err());
    }

    #[test]
    fn test_s3_copy_files() {
        let mut copy = S3Copy {
            aws_key: "k".to_string(),
            aws_secret: "s".to_string(),
            files: Vec::new(),
        };
        assert!(copy.validate().is_err());

        copy.files.push(S3CopyFile {
            source: S3Location::new("staging", "app.tgz"),
            destination: S3Location::new("release", "app.tgz"),
            ..S3CopyFile::default()
        });

        let def = copy.resolve().unwrap();
        assert_eq!(def.command_name.as_deref(), Some("s3Copy.copy"));
        assert_eq!(
            def.params.unwrap()["s3_copy_files"],
            json!([{
                "source": {"bucket": "staging", "path": "app.tgz"},
                "destination": {"bucket": "release", "path": "app.tgz"}
            }])
        );
    }

    #[test]
    fn test_s3_copy_rejects_incomplete_location() {
        let copy = S3Copy {
            aws_key: "k".to_string(),
            aws_secret: "s".to_string(),
            files: vec![S3CopyFile {
                source: S3Location::new("staging", ""),
                destination: S3Location::new("release", "app.tgz"),
                ..S3CopyFile::default()
            }],
        };
        assert!(matches!(copy.validate(), Err(ShrubError::InvalidCommand { .. })));
    }
}
