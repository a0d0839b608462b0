//! The root aggregate and its rendered document

use crate::core::{CommandSequence, Task, TaskGroup, Variant};
use crate::error::Result;
use indexmap::IndexMap;
use serde::ser::Serializer;
use serde::Serialize;
use tracing::debug;

/// Document encoding produced by [`Configuration::render`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    JsonPretty,
    #[default]
    Yaml,
}

/// A whole pipeline: functions, tasks, groups, variants and global hooks.
///
/// Named entities are acquired with lookup-or-create methods. The first
/// acquisition fixes an entity's position in the document; later calls return
/// the same entity for further mutation. Entities cannot be renamed or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Configuration {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    functions: IndexMap<String, CommandSequence>,

    #[serde(serialize_with = "serialize_values", skip_serializing_if = "IndexMap::is_empty")]
    tasks: IndexMap<String, Task>,

    #[serde(serialize_with = "serialize_values", skip_serializing_if = "IndexMap::is_empty")]
    groups: IndexMap<String, TaskGroup>,

    #[serde(serialize_with = "serialize_values", skip_serializing_if = "IndexMap::is_empty")]
    variants: IndexMap<String, Variant>,

    pre: CommandSequence,
    post: CommandSequence,
    timeout: CommandSequence,
}

/// Emit an ordered map as a list of its values
fn serialize_values<S, T>(map: &IndexMap<String, T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_seq(map.values())
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the task called `name`
    pub fn task(&mut self, name: &str) -> &mut Task {
        self.tasks.entry(name.to_string()).or_insert_with(|| {
            debug!("Creating task: {}", name);
            Task::new(name)
        })
    }

    /// Get or create the task group called `name`
    pub fn task_group(&mut self, name: &str) -> &mut TaskGroup {
        self.groups.entry(name.to_string()).or_insert_with(|| {
            debug!("Creating task group: {}", name);
            TaskGroup::new(name)
        })
    }

    /// Get or create the variant with the given build name
    pub fn variant(&mut self, build_name: &str) -> &mut Variant {
        self.variants.entry(build_name.to_string()).or_insert_with(|| {
            debug!("Creating variant: {}", build_name);
            Variant::new(build_name)
        })
    }

    /// Get or create the body of the function called `name`
    pub fn function(&mut self, name: &str) -> &mut CommandSequence {
        self.functions.entry(name.to_string()).or_insert_with(|| {
            debug!("Creating function: {}", name);
            CommandSequence::new()
        })
    }

    /// Commands run before every task
    pub fn pre(&mut self) -> &mut CommandSequence {
        &mut self.pre
    }

    /// Commands run after every task
    pub fn post(&mut self) -> &mut CommandSequence {
        &mut self.post
    }

    /// Commands run when any task times out
    pub fn timeout(&mut self) -> &mut CommandSequence {
        &mut self.timeout
    }

    pub fn get_task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub fn get_group(&self, name: &str) -> Option<&TaskGroup> {
        self.groups.get(name)
    }

    pub fn get_variant(&self, build_name: &str) -> Option<&Variant> {
        self.variants.get(build_name)
    }

    pub fn get_function(&self, name: &str) -> Option<&CommandSequence> {
        self.functions.get(name)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn groups(&self) -> impl Iterator<Item = &TaskGroup> {
        self.groups.values()
    }

    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.values()
    }

    pub fn functions(&self) -> impl Iterator<Item = (&str, &CommandSequence)> {
        self.functions.iter().map(|(name, seq)| (name.as_str(), seq))
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Encode the configuration; does not modify it
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        debug!(
            "Rendering configuration ({} tasks, {} groups, {} variants, {} functions) as {:?}",
            self.tasks.len(),
            self.groups.len(),
            self.variants.len(),
            self.functions.len(),
            format
        );

        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::JsonPretty => self.to_json_pretty(),
            OutputFormat::Yaml => self.to_yaml(),
        }
    }
}
