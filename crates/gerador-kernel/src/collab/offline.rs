//! Collaborators that never leave the process.

use async_trait::async_trait;

use super::{CollabError, Execution, Executor, Suggester, Translator};

/// Stands in for running a command.
///
/// `ver` reports the product version; everything else gets a placeholder
/// echoing the command.
pub struct SimulatedExecutor;

#[async_trait]
impl Executor for SimulatedExecutor {
    async fn execute(&self, command: &str) -> Result<Execution, CollabError> {
        tracing::info!(command, "simulating execution");
        let output = if command.trim().eq_ignore_ascii_case("ver") {
            "GeradorDocs Version 1.0".to_string()
        } else {
            format!(
                "Simulated output for command: '{command}'\n\
                 This is a placeholder response. In a real-world scenario, this would be the actual command output."
            )
        };
        Ok(Execution { output })
    }
}

/// DOS verb to POSIX command.
const TRANSLATIONS: &[(&str, &str)] = &[
    ("attrib", "chmod"),
    ("chdir", "cd"),
    ("chkdsk", "fsck"),
    ("cls", "clear"),
    ("copy", "cp"),
    ("del", "rm"),
    ("deltree", "rm -rf"),
    ("erase", "rm"),
    ("fc", "diff"),
    ("find", "grep"),
    ("ipconfig", "ip addr"),
    ("md", "mkdir"),
    ("mem", "free -h"),
    ("mkdir", "mkdir"),
    ("more", "less"),
    ("move", "mv"),
    ("ping", "ping"),
    ("rd", "rmdir"),
    ("ren", "mv"),
    ("rename", "mv"),
    ("rmdir", "rmdir"),
    ("tasklist", "ps aux"),
    ("taskkill", "kill"),
    ("tree", "tree"),
    ("ver", "ver"),
    ("xcopy", "cp -r"),
];

/// Table-driven translation.
///
/// Switches (`/S`, `/Q`, ...) are dropped, a leading `C:` is stripped from
/// arguments and backslashes become slashes. Unknown verbs pass through.
pub struct OfflineTranslator;

impl OfflineTranslator {
    fn translate_line(line: &str) -> String {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return String::new();
        };

        let lower = verb.to_ascii_lowercase();
        let Some(&(_, posix)) = TRANSLATIONS.iter().find(|(dos, _)| *dos == lower) else {
            return line.trim().to_string();
        };

        let mut out = posix.to_string();
        for word in words.filter(|w| !is_switch(w)) {
            out.push(' ');
            out.push_str(&posix_path(word));
        }
        out
    }
}

#[async_trait]
impl Translator for OfflineTranslator {
    async fn translate(&self, dos_command: &str) -> Result<String, CollabError> {
        Ok(Self::translate_line(dos_command))
    }
}

fn is_switch(word: &str) -> bool {
    word.len() > 1 && word.starts_with('/')
}

fn posix_path(word: &str) -> String {
    let rest = match word.get(..2) {
        Some(drive) if drive.eq_ignore_ascii_case("c:") => &word[2..],
        _ => word,
    };
    rest.replace('\\', "/")
}

/// Verbs the offline suggester knows about.
pub const DOS_VERBS: &[&str] = &[
    "attrib", "cd", "chdir", "chkdsk", "cls", "copy", "date", "del", "deltree", "dir", "echo",
    "edit", "erase", "exit", "fc", "find", "format", "help", "ipconfig", "md", "mem", "mkdir",
    "more", "move", "path", "ping", "prompt", "rd", "ren", "rename", "rmdir", "set", "sort",
    "tasklist", "taskkill", "time", "tree", "type", "ver", "vol", "xcopy",
];

/// Prefix completion over [`DOS_VERBS`].
#[derive(Debug, Clone)]
pub struct OfflineSuggester {
    limit: usize,
}

impl OfflineSuggester {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for OfflineSuggester {
    fn default() -> Self {
        Self::new(5)
    }
}

#[async_trait]
impl Suggester for OfflineSuggester {
    async fn suggest(&self, partial_command: &str) -> Result<Vec<String>, CollabError> {
        // Only the verb is completed.
        let partial = partial_command.trim_start();
        if partial.is_empty() || partial.contains(char::is_whitespace) {
            return Ok(Vec::new());
        }
        let prefix = partial.to_ascii_lowercase();
        Ok(DOS_VERBS
            .iter()
            .filter(|verb| verb.starts_with(&prefix) && **verb != prefix)
            .take(self.limit)
            .map(|verb| verb.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn test_ver() {
        let out = SimulatedExecutor.execute("  VER ").await.unwrap();
        assert_eq!(out.output, "GeradorDocs Version 1.0");
    }

    #[tokio::test]
    async fn test_placeholder() {
        let out = SimulatedExecutor.execute("ls -la").await.unwrap();
        let mut lines = out.output.lines();
        assert_eq!(lines.next(), Some("Simulated output for command: 'ls -la'"));
        assert!(lines.next().unwrap().starts_with("This is a placeholder response."));
    }

    #[rstest]
    #[case("copy a.txt b.txt", "cp a.txt b.txt")]
    #[case("DEL C:\\DOCS\\OLD.TXT", "rm /DOCS/OLD.TXT")]
    #[case("xcopy src dst /S /E", "cp -r src dst")]
    #[case("mem", "free -h")]
    #[case("Ver", "ver")]
    #[case("  frobnicate --now ", "frobnicate --now")]
    #[case("   ", "")]
    #[tokio::test]
    async fn test_translate(#[case] dos: &str, #[case] expected: &str) {
        assert_eq!(OfflineTranslator.translate(dos).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_suggest_prefix() {
        let s = OfflineSuggester::default();
        assert_eq!(s.suggest("ty").await.unwrap(), vec!["type"]);
        assert_eq!(s.suggest("RE").await.unwrap(), vec!["ren", "rename"]);
    }

    #[tokio::test]
    async fn test_suggest_limit_and_arguments() {
        let s = OfflineSuggester::default();
        assert_eq!(s.suggest("c").await.unwrap().len(), 5);
        assert!(s.suggest("dir C:").await.unwrap().is_empty());
        assert!(s.suggest("").await.unwrap().is_empty());
        // An exact verb has nothing left to complete.
        assert!(s.suggest("cls").await.unwrap().is_empty());
    }
}
