//! Ordered lists of pipeline steps

use crate::commands::Command;
use crate::core::CommandDefinition;
use crate::error::Result;
use serde::Serialize;

/// An ordered, append-only list of steps. Order is execution order and
/// duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CommandSequence(Vec<CommandDefinition>);

impl CommandSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append already-resolved definitions without validation
    pub fn append<I>(&mut self, defs: I) -> &mut Self
    where
        I: IntoIterator<Item = CommandDefinition>,
    {
        self.0.extend(defs);
        self
    }

    /// Validate, resolve and append a single command
    pub fn add<C: Command + ?Sized>(&mut self, cmd: &C) -> Result<&mut Self> {
        cmd.validate()?;
        let def = cmd.resolve()?;
        self.0.push(def);
        Ok(self)
    }

    /// Validate, resolve and append each command in order.
    ///
    /// Stops at the first invalid command; commands before it stay appended.
    pub fn extend<I>(&mut self, cmds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Command,
    {
        for cmd in cmds {
            self.add(&cmd)?;
        }
        Ok(self)
    }

    /// Append an empty definition and return it for editing
    pub fn add_definition(&mut self) -> &mut CommandDefinition {
        let idx = self.0.len();
        self.0.push(CommandDefinition::new());
        &mut self.0[idx]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandDefinition> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CommandDefinition] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a CommandDefinition;
    type IntoIter = std::slice::Iter<'a, CommandDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<CommandDefinition> for CommandSequence {
    fn from_iter<I: IntoIterator<Item = CommandDefinition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
