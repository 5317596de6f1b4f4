//! Session history: the scrollback a terminal renders.

use super::result::ExecResult;

/// What a history entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The echoed prompt and input, e.g. `C:\DOCS\>dir`.
    Command,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Append-only log, cleared in bulk by `cls`.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(HistoryEntry {
            kind,
            text: text.into(),
        });
    }

    pub fn push_command(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Command, text);
    }

    pub fn push_output(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Output, text);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Error, text);
    }

    /// Append a command's output and error text, skipping whichever is empty.
    pub fn record(&mut self, result: &ExecResult) {
        if !result.out.is_empty() {
            self.push_output(result.out.clone());
        }
        if !result.err.is_empty() {
            self.push_error(result.err.clone());
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_skips_empty_streams() {
        let mut history = History::new();
        history.record(&ExecResult::success(""));
        assert!(history.is_empty());

        history.record(&ExecResult::failure(1, "File not found."));
        assert_eq!(
            history.entries(),
            &[HistoryEntry {
                kind: EntryKind::Error,
                text: "File not found.".into()
            }]
        );
    }

    #[test]
    fn clear_empties_everything() {
        let mut history = History::new();
        history.push_command(r"C:\>dir");
        history.push_output("listing");
        history.clear();
        assert_eq!(history.len(), 0);
    }
}
