//! Splitting an input line into a command and its arguments.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    /// The line as typed, trimmed.
    pub raw: &'a str,
    /// Command name, lower-cased for dispatch.
    pub name: String,
    /// Whitespace-separated arguments, as typed.
    pub args: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Split on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let raw = line.trim();
        let mut words = raw.split_whitespace();
        let name = words.next()?.to_lowercase();
        Some(Self {
            raw,
            name,
            args: words.collect(),
        })
    }
}
