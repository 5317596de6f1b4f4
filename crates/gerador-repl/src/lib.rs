//! gerador REPL: an interactive DOS prompt over the virtual `C:` drive.
//!
//! The REPL is a thin front end over [`Kernel`]. It provides:
//!
//! - The `C:\>` prompt with line history
//! - Rendering of each command's transcript entries, errors in red
//! - Inline hints and Tab completion from the debounced suggester
//! - A line editor for `edit` (end with `.`, Ctrl-C cancels)
//! - Meta-commands: `/help`, `/commands`, `/quit`

use std::cell::{Cell, RefCell};
use std::io::{IsTerminal, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use tokio::runtime::Runtime;

use gerador_kernel::interpreter::{EntryKind, HistoryEntry};
use gerador_kernel::suggest::SuggestionDebouncer;
use gerador_kernel::tools::EditSession;
use gerador_kernel::{paths, Collaborators, Config, Kernel, KernelConfig};

/// ANSI "erase display, cursor home", printed for `cls`.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// REPL state: the session and the runtime that drives it.
pub struct Repl {
    runtime: Runtime,
    kernel: Kernel,
    suggestions: Arc<SuggestionDebouncer>,
    color: bool,
    quit: bool,
}

impl Repl {
    /// A REPL over a default offline session.
    pub fn new() -> Result<Self> {
        Self::with_kernel(Kernel::offline()?)
    }

    pub fn with_kernel(kernel: Kernel) -> Result<Self> {
        // Suggestion lookups keep running while the main thread sits in
        // readline, so they need a worker of their own.
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        let suggestions = Arc::new(kernel.suggestions(runtime.handle().clone()));

        Ok(Self {
            runtime,
            kernel,
            suggestions,
            color: false,
            quit: false,
        })
    }

    /// Color error lines.
    pub fn set_color(&mut self, on: bool) {
        self.color = on;
    }

    /// Set once `/quit` has been entered.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run the startup sequence, returning the banner to print.
    pub fn boot(&mut self) -> Option<String> {
        if !self.runtime.block_on(self.kernel.boot()) {
            return None;
        }
        let history = self.runtime.block_on(self.kernel.history());
        self.render(&history)
    }

    pub fn prompt(&self) -> String {
        self.runtime.block_on(self.kernel.prompt())
    }

    /// Process a single line of input.
    ///
    /// Returns the text to print: the entries the command added after its
    /// prompt line, or [`CLEAR_SCREEN`] when it cleared the history.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            return self.handle_meta_command(trimmed);
        }

        self.suggestions.clear();
        let before = self.runtime.block_on(self.kernel.history()).len();
        if self.runtime.block_on(self.kernel.submit(line)).is_none() {
            return Ok(None);
        }

        let history = self.runtime.block_on(self.kernel.history());
        if history.len() <= before {
            return Ok(Some(CLEAR_SCREEN.to_string()));
        }
        // The prompt line is already on screen.
        Ok(self.render(&history[before + 1..]))
    }

    /// The edit session opened by the last `edit`, if any.
    pub fn take_edit(&mut self) -> Option<EditSession> {
        self.runtime.block_on(self.kernel.take_edit())
    }

    pub fn save_edit(&mut self, session: EditSession) -> Option<String> {
        let result = self.runtime.block_on(self.kernel.save_edit(session));
        let entry = if result.ok() {
            HistoryEntry { kind: EntryKind::Output, text: result.out }
        } else {
            HistoryEntry { kind: EntryKind::Error, text: result.err }
        };
        self.render(&[entry])
    }

    /// A rustyline helper wired to this session's suggestions.
    pub fn helper(&self) -> DosHelper {
        DosHelper::new(Arc::clone(&self.suggestions))
    }

    fn render(&self, entries: &[HistoryEntry]) -> Option<String> {
        if entries.is_empty() {
            return None;
        }
        let lines: Vec<String> = entries.iter().map(|e| self.paint(e)).collect();
        Some(lines.join("\n"))
    }

    fn paint(&self, entry: &HistoryEntry) -> String {
        match entry.kind {
            EntryKind::Error if self.color => entry.text.red().to_string(),
            EntryKind::Command if self.color => entry.text.bold().to_string(),
            _ => entry.text.clone(),
        }
    }

    /// Handle a meta-command (starts with /).
    fn handle_meta_command(&mut self, cmd: &str) -> Result<Option<String>> {
        let command = cmd.split_whitespace().next().unwrap_or("");

        match command {
            "/quit" | "/q" | "/exit" => {
                self.quit = true;
                Ok(None)
            }
            "/help" | "/h" | "/?" => Ok(Some(HELP_TEXT.to_string())),
            "/commands" => {
                let mut output = String::from("Built-in commands:\n");
                for schema in self.kernel.tool_schemas() {
                    output.push_str(&format!("  {:<20} {}\n", schema.usage, schema.description));
                }
                Ok(Some(output.trim_end().to_string()))
            }
            _ => Ok(Some(format!(
                "Unknown command: {}\nType /help for available commands.",
                command
            ))),
        }
    }
}

const HELP_TEXT: &str = r#"gerador: a DOS prompt over a virtual C: drive

Meta commands:
  /help, /h, /?     Show this help
  /commands         List the built-in DOS commands
  /quit, /q, /exit  Exit the REPL

Type HELP for the drive's own help file. Anything that is not built in
is translated to a modern command and its output simulated.
Tab applies a suggestion; `edit` ends with a line holding only "."
"#;

/// Hints and completion from the suggestion debouncer.
///
/// Every redraw reports the line to the debouncer; a lookup fires once
/// typing pauses. The hint shows the rest of the first suggestion that
/// extends the current line.
pub struct DosHelper {
    suggestions: Arc<SuggestionDebouncer>,
    last_input: RefCell<String>,
    active: Cell<bool>,
}

impl DosHelper {
    pub fn new(suggestions: Arc<SuggestionDebouncer>) -> Self {
        Self {
            suggestions,
            last_input: RefCell::new(String::new()),
            active: Cell::new(true),
        }
    }

    /// Turn suggestions off, e.g. while editing a file.
    pub fn set_active(&self, on: bool) {
        self.active.set(on);
        if !on {
            self.last_input.borrow_mut().clear();
            self.suggestions.clear();
        }
    }

    fn observe(&self, line: &str) {
        let mut last = self.last_input.borrow_mut();
        if *last != line {
            last.clear();
            last.push_str(line);
            self.suggestions.input_changed(line);
        }
    }
}

impl Hinter for DosHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if !self.active.get() {
            return None;
        }
        self.observe(line);
        if pos < line.len() {
            return None;
        }
        completion_hint(line, &self.suggestions.current())
    }
}

impl Completer for DosHelper {
    type Candidate = String;

    fn complete(
        &self,
        _line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if !self.active.get() {
            return Ok((0, Vec::new()));
        }
        // A suggestion replaces the whole line.
        let candidates = self
            .suggestions
            .current()
            .into_iter()
            .map(|s| format!("{s} "))
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for DosHelper {}

impl Validator for DosHelper {}

impl Helper for DosHelper {}

/// The remainder of the first suggestion that extends `line`.
fn completion_hint(line: &str, suggestions: &[String]) -> Option<String> {
    if line.is_empty() {
        return None;
    }
    suggestions.iter().find_map(|s| {
        let head = s.get(..line.len())?;
        (s.len() > line.len() && head.eq_ignore_ascii_case(line))
            .then(|| s[line.len()..].to_string())
    })
}

/// Let the user rework a file line by line.
///
/// Existing lines are offered one at a time for editing; after them the
/// user can keep adding lines. A line holding only `.` (or EOF) finishes.
/// Returns `None` when cancelled with Ctrl-C.
fn run_editor(
    rl: &mut Editor<DosHelper, DefaultHistory>,
    mut session: EditSession,
) -> Result<Option<EditSession>> {
    println!(
        "Editing {}. End with a line containing only \".\"; Ctrl-C cancels.",
        session.path
    );
    if let Some(helper) = rl.helper() {
        helper.set_active(false);
    }

    let existing: Vec<String> = session.content.lines().map(str::to_string).collect();
    let mut prefill = existing.into_iter();
    let mut lines = Vec::new();

    let outcome = loop {
        let initial = prefill.next().unwrap_or_default();
        match rl.readline_with_initial("", (initial.as_str(), "")) {
            Ok(line) if line == "." => break Ok(true),
            Ok(line) => lines.push(line),
            Err(ReadlineError::Eof) => break Ok(true),
            Err(ReadlineError::Interrupted) => break Ok(false),
            Err(e) => break Err(e),
        }
    };

    if let Some(helper) = rl.helper() {
        helper.set_active(true);
    }

    if !outcome.context("Editor input failed")? {
        tracing::debug!(path = %session.path, "edit cancelled");
        return Ok(None);
    }
    session.content = lines.join("\n");
    Ok(Some(session))
}

/// Run the REPL.
pub fn run() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let kernel = Kernel::new(
        KernelConfig::from_config(&config),
        Collaborators::from_config(&config.ai),
    )
    .context("Failed to create kernel")?;
    tracing::info!(session = kernel.name(), "session started");

    let mut repl = Repl::with_kernel(kernel)?;
    repl.set_color(std::io::stdout().is_terminal());

    let mut rl: Editor<DosHelper, DefaultHistory> =
        Editor::new().context("Failed to create editor")?;
    rl.set_helper(Some(repl.helper()));

    let history_path = paths::history_file();
    let _ = rl.load_history(&history_path);

    if let Some(banner) = repl.boot() {
        println!("{banner}");
    }

    while !repl.should_quit() {
        let prompt = repl.prompt();

        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                match repl.process_line(&line) {
                    Ok(Some(output)) if output == CLEAR_SCREEN => {
                        print!("{output}");
                        let _ = std::io::stdout().flush();
                    }
                    Ok(Some(output)) => println!("{output}"),
                    Ok(None) => {}
                    Err(e) => eprintln!("Error: {e:#}"),
                }

                if let Some(session) = repl.take_edit() {
                    match run_editor(&mut rl, session)? {
                        Some(edited) => {
                            if let Some(output) = repl.save_edit(edited) {
                                println!("{output}");
                            }
                        }
                        None => println!("Edit cancelled."),
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    if let Some(parent) = history_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = rl.save_history(&history_path);

    Ok(())
}
