//! Initial contents of `C:\`.

use super::node::Directory;

pub const README_TXT: &str = "Welcome to Gerador Docs!

This is a DOS-like terminal over an in-memory disk, with an AI fallback
for commands it does not know.

Available commands:
- dir: List directory contents
- cd [path]: Change directory
- type [file]: Display file content
- edit [file]: Open a text editor for a file
- cls: Clear the screen
- date / time: Show the current date or time
- help: Show this help message

Unknown commands will be interpreted by an AI.
";

pub const SYSTEM_FILE: &str = "SYSTEM FILE - READ ONLY";

pub const AUTOEXEC_BAT: &str =
    "@ECHO OFF\nPROMPT $P$G\nPATH C:\\SYSTEM\nECHO Gerador Docs Initialized.";

pub const CONFIG_SYS: &str = "DEVICE=C:\\SYSTEM\\HIMEM.SYS\nFILES=20";

/// `DOCS`, `SYSTEM`, `AUTOEXEC.BAT`, `CONFIG.SYS`, in that order.
pub fn initial_layout() -> Directory {
    Directory::new()
        .with_dir("DOCS", Directory::new().with_file("README.TXT", README_TXT))
        .with_dir(
            "SYSTEM",
            Directory::new()
                .with_file("IO.SYS", SYSTEM_FILE)
                .with_file("MSDOS.SYS", SYSTEM_FILE),
        )
        .with_file("AUTOEXEC.BAT", AUTOEXEC_BAT)
        .with_file("CONFIG.SYS", CONFIG_SYS)
}
