//! Tools: the built-in commands and how they are looked up.

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::{format_listing, register_builtins, FREE_BYTES, HELP_FILE};
pub use context::{EditSession, ExecContext};
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolArgs, ToolSchema};
