//! File and optional line number identifying where a diagnostic originated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file name paired with an optional 1-indexed line number.
///
/// Callers are expected to uphold two preconditions, which are not checked here:
/// the file name is non-empty, and the line number, when present, is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// The file name as it should appear in output.
    #[serde(rename = "file")]
    pub file_name: String,
    /// The line within the file (1-indexed), if known.
    #[serde(rename = "line", default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
}

impl SourceLocation {
    /// Creates a location pointing at a specific line of a file.
    pub fn new(file_name: impl Into<String>, line_number: u32) -> Self {
        Self {
            file_name: file_name.into(),
            line_number: Some(line_number),
        }
    }

    /// Creates a location naming a whole file with no line information.
    pub fn file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            line_number: None,
        }
    }

    /// Returns `true` if this location carries a line number.
    pub fn has_line_number(&self) -> bool {
        self.line_number.is_some()
    }

    /// Parses a `FILE` or `FILE:LINE` string.
    ///
    /// The suffix after the last `:` is only taken as a line number if it is a
    /// positive integer, so Windows paths like `C:\src\a.wxs` stay intact.
    pub fn parse(s: &str) -> Self {
        if let Some((file, line)) = s.rsplit_once(':') {
            if let Ok(line) = line.parse::<u32>() {
                if line > 0 && !file.is_empty() {
                    return Self::new(file, line);
                }
            }
        }
        Self::file(s)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(line) => write!(f, "{}({})", self.file_name, line),
            None => f.write_str(&self.file_name),
        }
    }
}
