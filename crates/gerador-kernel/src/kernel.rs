//! The Kernel: one terminal session.
//!
//! The Kernel owns everything a session needs:
//! - The virtual drive and the current directory (inside [`ExecContext`])
//! - The transcript ([`History`])
//! - The tool registry (builtins)
//! - The collaborators for commands it does not know
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          Kernel                          │
//! │  ┌────────────────────────┐  ┌────────────────────────┐  │
//! │  │      ExecContext       │  │      ToolRegistry      │  │
//! │  │  FileTree, cwd,        │  │  cd, dir, type, edit,  │  │
//! │  │  History, pending edit │  │  cls, help, date, time │  │
//! │  └────────────────────────┘  └────────────────────────┘  │
//! │  ┌────────────────────────┐  ┌────────────────────────┐  │
//! │  │     Collaborators      │  │       busy flag        │  │
//! │  │ translate/execute/     │  │  one command in flight │  │
//! │  │ suggest                │  │                        │  │
//! │  └────────────────────────┘  └────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::sync::RwLock;

use crate::collab::{translate_and_execute, CollabError, Collaborators};
use crate::config::Config;
use crate::interpreter::{CommandLine, ExecResult, HistoryEntry};
use crate::suggest::SuggestionDebouncer;
use crate::tools::{register_builtins, EditSession, ExecContext, ToolArgs, ToolRegistry, ToolSchema};
use crate::vfs::{DosPath, FileTree};

const BANNER: [&str; 3] = [
    "Gerador Docs [Version 1.0.0]",
    "(c) Gerador Corporation. All rights reserved.",
    "",
];

const AUTOEXEC: &str = r"C:\AUTOEXEC.BAT";

const TRANSLATE_FAILED: &str = "Failed to translate DOS command.";
const EXECUTE_FAILED: &str = "Error executing command. See log for details.";

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this session (for logs).
    pub name: String,
    /// Initial working directory. Must exist on the seeded drive.
    pub cwd: DosPath,
    /// Quiet period before a suggestion lookup.
    pub suggest_debounce: Duration,
    /// Bound on a translate + execute round-trip.
    pub collaborator_timeout: Duration,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            cwd: DosPath::root(),
            suggest_debounce: Duration::from_millis(300),
            collaborator_timeout: Duration::from_secs(30),
        }
    }
}

impl KernelConfig {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Take the timing knobs from the user's config file.
    pub fn from_config(config: &Config) -> Self {
        Self {
            suggest_debounce: config.terminal.suggest_debounce(),
            collaborator_timeout: config.terminal.collaborator_timeout(),
            ..Self::default()
        }
    }

    pub fn with_cwd(mut self, cwd: DosPath) -> Self {
        self.cwd = cwd;
        self
    }
}

/// Clears the busy flag when the command finishes, however it finishes.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A terminal session: drive, cwd, transcript and command dispatch.
pub struct Kernel {
    name: String,
    tools: Arc<ToolRegistry>,
    ctx: RwLock<ExecContext>,
    collaborators: Collaborators,
    busy: AtomicBool,
    config: KernelConfig,
}

impl Kernel {
    /// Create a session on a freshly seeded drive.
    pub fn new(config: KernelConfig, collaborators: Collaborators) -> Result<Self> {
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        let mut ctx = ExecContext::new(FileTree::seeded());
        let is_dir = ctx.tree.get(&config.cwd).is_some_and(|node| node.is_dir());
        if !is_dir {
            return Err(anyhow::anyhow!("{} is not a directory", config.cwd))
                .context("invalid initial working directory");
        }
        ctx.set_cwd(config.cwd.clone());

        tracing::debug!(name = %config.name, tools = tools.len(), "kernel created");
        Ok(Self {
            name: config.name.clone(),
            tools: Arc::new(tools),
            ctx: RwLock::new(ctx),
            collaborators,
            busy: AtomicBool::new(false),
            config,
        })
    }

    /// A default session with offline collaborators.
    pub fn offline() -> Result<Self> {
        Self::new(KernelConfig::default(), Collaborators::offline())
    }

    /// The session name carried on every log event.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Print the banner and the `echo` lines of `AUTOEXEC.BAT`.
    ///
    /// Runs once per session; later calls do nothing and return `false`.
    pub async fn boot(&self) -> bool {
        let mut ctx = self.ctx.write().await;
        if ctx.startup_done {
            return false;
        }
        ctx.startup_done = true;

        for line in BANNER {
            ctx.history.push_output(line);
        }

        // Split on `\n` only: a `\r` stays part of the echoed text.
        let autoexec = ctx.read_file(AUTOEXEC).unwrap_or_default();
        for echoed in autoexec.split('\n').filter_map(echo_text) {
            ctx.history.push_output(echoed);
        }
        true
    }

    /// Run one line of input.
    ///
    /// Returns `None` when the line was ignored because a previous command
    /// is still in flight. Otherwise the line is recorded in the history
    /// with the prompt, dispatched, and its result recorded after it.
    pub async fn submit(&self, line: &str) -> Option<ExecResult> {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!(session = %self.name, line, "busy, ignoring input");
            return None;
        };

        let mut ctx = self.ctx.write().await;
        let prompt = ctx.prompt();
        ctx.history.push_command(format!("{prompt}{line}"));

        let Some(command) = CommandLine::parse(line) else {
            return Some(ExecResult::success(""));
        };
        tracing::debug!(
            session = %self.name,
            command = %command.name,
            args = ?command.args,
            "dispatch"
        );

        if let Some(tool) = self.tools.get(&command.name) {
            let args = ToolArgs::from_words(command.args.iter().copied());
            let result = tool.execute(args, &mut ctx).await;
            ctx.history.record(&result);
            return Some(result);
        }

        // Let readers see the prompt line while the collaborators work.
        let raw = command.raw.to_string();
        drop(ctx);

        let result = self.run_unknown(&raw).await;
        self.ctx.write().await.history.record(&result);
        Some(result)
    }

    async fn run_unknown(&self, raw: &str) -> ExecResult {
        match translate_and_execute(&self.collaborators, raw, self.config.collaborator_timeout).await
        {
            Ok(translated) => ExecResult::success(translated.render()),
            Err(CollabError::EmptyTranslation) => {
                tracing::warn!(session = %self.name, command = raw, "no translation");
                ExecResult::failure(1, TRANSLATE_FAILED)
            }
            Err(e) => {
                tracing::error!(session = %self.name, command = raw, "error executing command: {e}");
                ExecResult::failure(1, EXECUTE_FAILED)
            }
        }
    }

    /// Take the edit session opened by the last `edit`, if any.
    pub async fn take_edit(&self) -> Option<EditSession> {
        self.ctx.write().await.pending_edit.take()
    }

    /// Write an edited file back and note it in the history.
    pub async fn save_edit(&self, session: EditSession) -> ExecResult {
        let mut ctx = self.ctx.write().await;
        let result = match ctx.write_file(&session.path, session.content) {
            Ok(()) => {
                tracing::debug!(session = %self.name, path = %session.path, "saved");
                ExecResult::success(format!("Saved {}", session.path))
            }
            Err(e) => {
                tracing::warn!(session = %self.name, path = %session.path, "save failed: {e}");
                ExecResult::fs_failure(&e)
            }
        };
        ctx.history.record(&result);
        result
    }

    /// A copy of the transcript.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.ctx.read().await.history.entries().to_vec()
    }

    pub async fn cwd(&self) -> DosPath {
        self.ctx.read().await.cwd.clone()
    }

    /// The prompt for the next line, e.g. `C:\DOCS\>`.
    pub async fn prompt(&self) -> String {
        self.ctx.read().await.prompt()
    }

    /// Current drive contents. Later writes are not visible through it.
    pub async fn tree_snapshot(&self) -> FileTree {
        self.ctx.read().await.tree.snapshot()
    }

    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.schemas()
    }

    /// Whether a command is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// A suggestion debouncer wired to this session's suggester.
    pub fn suggestions(&self, runtime: Handle) -> SuggestionDebouncer {
        SuggestionDebouncer::new(
            Arc::clone(&self.collaborators.suggester),
            self.config.suggest_debounce,
            self.config.collaborator_timeout,
            runtime,
        )
    }
}

/// The text after `echo ` on a batch line. Matches the first five
/// characters literally, so `@ECHO OFF` is not echoed.
fn echo_text(line: &str) -> Option<&str> {
    let head = line.get(..5)?;
    head.eq_ignore_ascii_case("echo ").then(|| &line[5..])
}
