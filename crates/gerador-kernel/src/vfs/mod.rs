//! Virtual filesystem for gerador.
//!
//! One drive, `C:`, held entirely in memory for the life of a session:
//!
//! ```text
//! C:\
//! ├── DOCS\
//! │   └── README.TXT
//! ├── SYSTEM\
//! │   ├── IO.SYS
//! │   └── MSDOS.SYS
//! ├── AUTOEXEC.BAT
//! └── CONFIG.SYS
//! ```
//!
//! - **DosPath**: normalized absolute paths (`C:\DOCS\README.TXT`)
//! - **PathResolver**: walks a tree for raw input relative to a cwd
//! - **FileTree**: the tree itself, with copy-on-write snapshots
//!
//! Names are case-insensitive; everything is stored upper-case. There is
//! no delete and no persistence.

mod entry;
mod error;
mod node;
mod path;
mod resolver;
pub mod seed;
mod tree;

pub use entry::{DirEntry, DirEntryKind};
pub use error::FsError;
pub use node::{Directory, Node};
pub use path::{DosPath, DRIVE, SEPARATOR};
pub use resolver::{PathResolver, Resolution};
pub use tree::FileTree;
