//! Interpreter building blocks: results, history, and line splitting.
//!
//! Dispatch itself lives in [`crate::kernel`]; built-in commands live in
//! [`crate::tools`].

mod command_line;
mod history;
mod result;

pub use command_line::CommandLine;
pub use history::{EntryKind, History, HistoryEntry};
pub use result::ExecResult;
