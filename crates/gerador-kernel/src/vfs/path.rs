//! DOS path normalization.
//!
//! A [`DosPath`] is always absolute: upper-case segments below the `C:`
//! root. Relative input is dot-folded onto a base directory. Absolute input
//! is taken as written, so a `.` or `..` inside it stays a literal segment
//! that no directory contains.
//!
//! ```text
//! C:\                  root, no segments
//! C:\DOCS              ["DOCS"]
//! C:\DOCS\README.TXT   ["DOCS", "README.TXT"]
//! ```
//!
//! Raw input accepts either `\` or `/` as the separator and collapses
//! repeated separators.

use std::fmt;
use std::str::FromStr;

use super::error::FsError;

/// The only drive label.
pub const DRIVE: &str = "C:";

/// Canonical separator used when rendering paths.
pub const SEPARATOR: char = '\\';

/// A normalized absolute path on drive `C:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DosPath {
    segments: Vec<String>,
}

impl DosPath {
    /// The drive root, `C:\`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path such as `C:\DOCS\README.TXT`.
    ///
    /// Fails with [`FsError::InvalidPath`] when the first segment is not the
    /// drive label. `.` and `..` are kept verbatim.
    pub fn parse(raw: &str) -> Result<Self, FsError> {
        let mut segments = split_segments(raw).into_iter();
        match segments.next() {
            Some(first) if first == DRIVE => {}
            _ => return Err(FsError::InvalidPath(raw.to_string())),
        }
        Ok(Self {
            segments: segments.collect(),
        })
    }

    /// True if `raw` starts with the drive label and a separator.
    pub fn is_absolute(raw: &str) -> bool {
        let mut chars = raw.chars();
        let drive: String = chars.by_ref().take(DRIVE.len()).collect();
        drive.eq_ignore_ascii_case(DRIVE) && matches!(chars.next(), Some('\\' | '/'))
    }

    /// Resolve `raw` against this directory.
    ///
    /// Absolute input is parsed on its own, without dot-folding; anything
    /// else is applied segment by segment on top of `self`. `..` at the root stays at the
    /// root and `.` is dropped, so `""` and `"."` both yield `self`.
    pub fn resolve(&self, raw: &str) -> Result<Self, FsError> {
        if Self::is_absolute(raw) {
            Self::parse(raw)
        } else {
            Ok(self.join(raw))
        }
    }

    /// Apply relative segments on top of this path.
    pub fn join(&self, relative: &str) -> Self {
        let mut path = self.clone();
        for segment in split_segments(relative) {
            path.push_segment(segment);
        }
        path
    }

    /// The containing directory, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// The final segment; the root is named after the drive.
    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or(DRIVE)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Depth below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Render as a working-directory string: always separator-terminated.
    ///
    /// `C:\` for the root, `C:\DOCS\` below it.
    pub fn display_dir(&self) -> String {
        let mut s = self.to_string();
        if !s.ends_with(SEPARATOR) {
            s.push(SEPARATOR);
        }
        s
    }

    fn push_segment(&mut self, segment: String) {
        match segment.as_str() {
            ".." => {
                self.segments.pop();
            }
            "." => {}
            _ => self.segments.push(segment),
        }
    }
}

impl fmt::Display for DosPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DRIVE}{SEPARATOR}")?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for DosPath {
    type Err = FsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Upper-case, split on either separator, drop empty segments.
fn split_segments(raw: &str) -> Vec<String> {
    raw.to_uppercase()
        .split(['\\', '/'])
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::root(r"C:\", "C:\\")]
    #[case::nested(r"c:\docs\readme.txt", r"C:\DOCS\README.TXT")]
    #[case::forward_slashes("C:/DOCS/README.TXT", r"C:\DOCS\README.TXT")]
    #[case::doubled(r"C:\\DOCS\\\SYSTEM", r"C:\DOCS\SYSTEM")]
    #[case::dots_are_literal(r"C:\DOCS\.\..\SYSTEM", r"C:\DOCS\.\..\SYSTEM")]
    #[case::above_root_is_literal(r"C:\..\DOCS", r"C:\..\DOCS")]
    fn parse_normalizes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(DosPath::parse(raw).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case::other_drive(r"D:\DOCS")]
    #[case::relative("DOCS")]
    #[case::empty("")]
    fn parse_rejects_missing_drive(#[case] raw: &str) {
        assert!(matches!(DosPath::parse(raw), Err(FsError::InvalidPath(_))));
    }

    #[rstest]
    #[case::child("DOCS", r"C:\SYSTEM\DOCS")]
    #[case::parent("..", r"C:\")]
    #[case::current(".", r"C:\SYSTEM")]
    #[case::empty("", r"C:\SYSTEM")]
    #[case::sibling(r"..\DOCS", r"C:\DOCS")]
    #[case::pop_past_root(r"..\..\..", r"C:\")]
    #[case::absolute(r"c:\docs", r"C:\DOCS")]
    #[case::absolute_dots_unfolded(r"C:\DOCS\..", r"C:\DOCS\..")]
    #[case::leading_backslash_is_relative(r"\DOCS", r"C:\SYSTEM\DOCS")]
    fn resolve_from_system(#[case] raw: &str, #[case] expected: &str) {
        let cwd = DosPath::parse(r"C:\SYSTEM").unwrap();
        assert_eq!(cwd.resolve(raw).unwrap().to_string(), expected);
    }

    #[test]
    fn bare_drive_is_not_absolute() {
        assert!(!DosPath::is_absolute("C:"));
        assert!(DosPath::is_absolute("c:/"));
        assert!(DosPath::is_absolute(r"C:\DOCS"));
    }

    #[test]
    fn display_dir_is_separator_terminated() {
        assert_eq!(DosPath::root().display_dir(), r"C:\");
        assert_eq!(DosPath::parse(r"C:\DOCS").unwrap().display_dir(), r"C:\DOCS\");
    }

    #[test]
    fn parent_and_file_name() {
        let path = DosPath::parse(r"C:\DOCS\README.TXT").unwrap();
        assert_eq!(path.file_name(), "README.TXT");
        assert_eq!(path.parent().unwrap().to_string(), r"C:\DOCS");
        assert_eq!(DosPath::root().parent(), None);
        assert_eq!(DosPath::root().file_name(), DRIVE);
    }
}
