//! The `Tool` trait and its argument/schema types.

use async_trait::async_trait;

use crate::interpreter::ExecResult;

use super::ExecContext;

/// Arguments passed to a tool: the whitespace-split words after the command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    pub positional: Vec<String>,
}

impl ToolArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-split words.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            positional: words.into_iter().map(str::to_owned).collect(),
        }
    }

    /// Positional argument at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// All arguments re-joined with single spaces.
    pub fn joined(&self) -> String {
        self.positional.join(" ")
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}

/// Describes a tool for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub usage: String,
}

impl ToolSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
        }
    }

    /// Override the usage line (defaults to the bare name).
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

/// A built-in command.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Lower-case command name used for dispatch.
    fn name(&self) -> &str;

    fn schema(&self) -> ToolSchema;

    /// Run the command against the session.
    ///
    /// Tools never fail outright: problems come back as
    /// `ExecResult::failure` and are shown inline.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}
