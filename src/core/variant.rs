//! Build variant domain model

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A task scheduled on a variant.
///
/// Serializes as a bare name when no overrides are set, and as a mapping
/// otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: String,
    pub stepback: Option<bool>,
    /// Run on these distros instead of the variant's
    pub distros: Vec<String>,
}

impl TaskSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn stepback(mut self, enabled: bool) -> Self {
        self.stepback = Some(enabled);
        self
    }

    pub fn distro(mut self, distro: impl Into<String>) -> Self {
        self.distros.push(distro.into());
        self
    }

    fn is_plain(&self) -> bool {
        self.stepback.is_none() && self.distros.is_empty()
    }
}

impl Serialize for TaskSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_plain() {
            return serializer.serialize_str(&self.name);
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        if let Some(stepback) = self.stepback {
            map.serialize_entry("stepback", &stepback)?;
        }
        if !self.distros.is_empty() {
            map.serialize_entry("distros", &self.distros)?;
        }
        map.end()
    }
}

/// Groups execution tasks under one name in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayTaskDefinition {
    pub name: String,
    #[serde(rename = "execution_tasks")]
    pub components: Vec<String>,
}

/// A named execution environment and the tasks it runs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    build_name: String,

    #[serde(rename = "display_name", skip_serializing_if = "String::is_empty")]
    pub build_display_name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub run_on: Vec<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub expansions: BTreeMap<String, Value>,

    pub tasks: Vec<TaskSpec>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub display_tasks: Vec<DisplayTaskDefinition>,
}

impl Variant {
    pub(crate) fn new(build_name: impl Into<String>) -> Self {
        Self {
            build_name: build_name.into(),
            build_display_name: String::new(),
            run_on: Vec::new(),
            expansions: BTreeMap::new(),
            tasks: Vec::new(),
            display_tasks: Vec::new(),
        }
    }

    pub fn build_name(&self) -> &str {
        &self.build_name
    }

    pub fn display_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.build_display_name = name.into();
        self
    }

    /// Add a distro to run on
    pub fn run_on(&mut self, distro: impl Into<String>) -> &mut Self {
        self.run_on.push(distro.into());
        self
    }

    pub fn expansion(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.expansions.insert(key.into(), value.into());
        self
    }

    /// Replace all expansions
    pub fn set_expansions(&mut self, expansions: BTreeMap<String, Value>) -> &mut Self {
        self.expansions = expansions;
        self
    }

    pub fn add_tasks<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks.extend(names.into_iter().map(TaskSpec::new));
        self
    }

    pub fn task_spec(&mut self, spec: TaskSpec) -> &mut Self {
        self.tasks.push(spec);
        self
    }

    pub fn display_task<I, S>(&mut self, name: impl Into<String>, components: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.display_tasks.push(DisplayTaskDefinition {
            name: name.into(),
            components: components.into_iter().map(Into::into).collect(),
        });
        self
    }
}
