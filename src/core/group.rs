//! Task groups: tasks that share hosts and setup/teardown hooks

use crate::commands::Command;
use crate::core::{CommandDefinition, CommandSequence};
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskGroup {
    name: String,

    pub max_hosts: u32,

    #[serde(skip_serializing_if = "CommandSequence::is_empty")]
    pub setup_group: CommandSequence,

    #[serde(skip_serializing_if = "CommandSequence::is_empty")]
    pub setup_task: CommandSequence,

    pub tasks: Vec<String>,

    #[serde(skip_serializing_if = "CommandSequence::is_empty")]
    pub teardown_task: CommandSequence,

    #[serde(skip_serializing_if = "CommandSequence::is_empty")]
    pub teardown_group: CommandSequence,

    #[serde(skip_serializing_if = "CommandSequence::is_empty")]
    pub timeout: CommandSequence,
}

impl TaskGroup {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_hosts: 0,
            setup_group: CommandSequence::new(),
            setup_task: CommandSequence::new(),
            tasks: Vec::new(),
            teardown_task: CommandSequence::new(),
            teardown_group: CommandSequence::new(),
            timeout: CommandSequence::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference tasks by name; the tasks themselves live on the configuration
    pub fn add_tasks<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn max_hosts(&mut self, num: u32) -> &mut Self {
        self.max_hosts = num;
        self
    }

    /// Commands run once before the first task of the group
    pub fn setup_group<I>(&mut self, cmds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Command,
    {
        self.setup_group.extend(cmds)?;
        Ok(self)
    }

    pub fn add_setup_group(&mut self) -> &mut CommandDefinition {
        self.setup_group.add_definition()
    }

    /// Commands run before every task of the group
    pub fn setup_task<I>(&mut self, cmds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Command,
    {
        self.setup_task.extend(cmds)?;
        Ok(self)
    }

    pub fn add_setup_task(&mut self) -> &mut CommandDefinition {
        self.setup_task.add_definition()
    }

    /// Commands run after every task of the group
    pub fn teardown_task<I>(&mut self, cmds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Command,
    {
        self.teardown_task.extend(cmds)?;
        Ok(self)
    }

    pub fn add_teardown_task(&mut self) -> &mut CommandDefinition {
        self.teardown_task.add_definition()
    }

    /// Commands run once after the last task of the group
    pub fn teardown_group<I>(&mut self, cmds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Command,
    {
        self.teardown_group.extend(cmds)?;
        Ok(self)
    }

    pub fn add_teardown_group(&mut self) -> &mut CommandDefinition {
        self.teardown_group.add_definition()
    }

    /// Commands run when a task of the group times out
    pub fn timeout_handler<I>(&mut self, cmds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Command,
    {
        self.timeout.extend(cmds)?;
        Ok(self)
    }

    pub fn add_timeout_handler(&mut self) -> &mut CommandDefinition {
        self.timeout.add_definition()
    }
}
