//! gerador-kernel: the core of the gerador DOS terminal.
//!
//! This crate provides:
//!
//! - **VFS**: an in-memory `C:` drive with DOS path resolution
//! - **Tools**: the built-in commands (`dir`, `cd`, `type`, `edit`, ...)
//! - **Interpreter**: command-line parsing, results and the session transcript
//! - **Collaborators**: translation, simulated execution and suggestions
//!   for everything the builtins do not cover
//! - **Kernel**: the session object tying these together
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use gerador_kernel::Kernel;
//!
//! let kernel = Kernel::offline()?;
//! kernel.boot().await;
//! kernel.submit("cd docs").await;
//! kernel.submit("dir").await;
//! for entry in kernel.history().await {
//!     println!("{}", entry.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod collab;
pub mod config;
pub mod interpreter;
pub mod kernel;
pub mod paths;
pub mod suggest;
pub mod tools;
pub mod vfs;

pub use collab::Collaborators;
pub use config::Config;
pub use kernel::{Kernel, KernelConfig};
