//! Task domain model

use crate::commands::Command;
use crate::core::{CommandDefinition, CommandSequence, Vars};
use crate::error::Result;
use serde::Serialize;

/// Edge to another task, optionally pinned to a variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskDependency {
    pub name: String,

    /// Empty means the depending task's own variant
    pub variant: String,
}

impl TaskDependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: String::new(),
        }
    }

    pub fn on_variant(name: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: variant.into(),
        }
    }
}

fn is_default_priority(priority: &Option<i64>) -> bool {
    matches!(priority, None | Some(0))
}

/// A named unit of work
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    name: String,

    /// Unset and zero both leave the engine default
    #[serde(rename = "priority", skip_serializing_if = "is_default_priority")]
    pub priority_override: Option<i64>,

    #[serde(rename = "depends_on", skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<TaskDependency>,

    pub commands: CommandSequence,
}

impl Task {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority_override: None,
            dependencies: Vec::new(),
            commands: CommandSequence::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate, resolve and append a command
    pub fn command<C: Command + ?Sized>(&mut self, cmd: &C) -> Result<&mut Self> {
        self.commands.add(cmd)?;
        Ok(self)
    }

    /// Validate, resolve and append several commands in order
    pub fn commands<I>(&mut self, cmds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Command,
    {
        self.commands.extend(cmds)?;
        Ok(self)
    }

    /// Append an empty step and return it for editing
    pub fn add_command(&mut self) -> &mut CommandDefinition {
        self.commands.add_definition()
    }

    pub fn dependency<I>(&mut self, deps: I) -> &mut Self
    where
        I: IntoIterator<Item = TaskDependency>,
    {
        self.dependencies.extend(deps);
        self
    }

    /// Append one function call per name
    pub fn function<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands
            .append(names.into_iter().map(CommandDefinition::with_function));
        self
    }

    /// Append a function call with expansion variables
    pub fn function_with_vars(&mut self, name: impl Into<String>, vars: Vars) -> &mut Self {
        let mut def = CommandDefinition::with_function(name);
        def.extend_vars(vars);
        self.commands.append([def]);
        self
    }

    pub fn priority(&mut self, priority: i64) -> &mut Self {
        self.priority_override = Some(priority);
        self
    }
}
