//! Built-in DOS commands.
//!
//! These are always available; anything else falls through to the
//! translation collaborator.

mod cd;
mod clock;
mod cls;
mod dir;
mod edit;
mod help;
mod type_;

pub use dir::{format_listing, FREE_BYTES};
pub use help::HELP_FILE;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cls::Cls);
    registry.register(dir::Dir);
    registry.register(cd::Cd);
    registry.register(type_::Type);
    registry.register(edit::Edit);
    registry.register(help::Help);
    registry.register(clock::Date);
    registry.register(clock::Time);
}
