use serde::{Deserialize, Serialize};

use super::wire::{RawData, RawSubmatch};

/// Shown for the derived path parts when there is nothing better to show
const CURRENT_DIR: &str = ".";

const SEPARATOR: char = '/';

/// One matched span within a matched line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submatch {
    pub text: String,
    /// Byte offset of the span start within `line_text`
    pub start: usize,
    /// Byte offset one past the span end within `line_text`
    pub end: usize,
}

impl Submatch {
    /// Length of the byte span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RawSubmatch> for Submatch {
    fn from(raw: RawSubmatch) -> Self {
        Self { text: raw.matched.text, start: raw.start, end: raw.end }
    }
}

/// A single search hit, projected from a `match` record
///
/// Fields are copied verbatim from the wire record: the path is not
/// normalized and `line_text` keeps its trailing line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub path: String,
    pub line_number: u64,
    pub line_text: String,
    pub submatches: Vec<Submatch>,
}

impl MatchRecord {
    /// Final component of the path
    ///
    /// # Examples
    ///
    /// ```
    /// use rg_matches::MatchRecord;
    ///
    /// let record = MatchRecord {
    ///     path: "a/b/main.go".to_string(),
    ///     line_number: 1,
    ///     line_text: String::new(),
    ///     submatches: Vec::new(),
    /// };
    /// assert_eq!(record.file_name(), "main.go");
    /// assert_eq!(record.directory(), "a/b");
    /// ```
    pub fn file_name(&self) -> &str {
        if self.path.is_empty() {
            return CURRENT_DIR;
        }
        let trimmed = self.path.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return "/";
        }
        match trimmed.rfind(SEPARATOR) {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }

    /// Everything before the final separator, lexically cleaned. `.` for a
    /// bare file name.
    pub fn directory(&self) -> String {
        let dir = match self.path.rfind(SEPARATOR) {
            Some(idx) => &self.path[..=idx],
            None => "",
        };
        clean_path(dir)
    }

    /// Line content without its trailing line break, for display
    pub fn trimmed_line(&self) -> &str {
        self.line_text.trim_end_matches(['\n', '\r'])
    }
}

/// Lexically clean a slash-separated path: repeated separators, `.`
/// elements and `name/..` pairs are removed, `..` directly under the root is
/// dropped. An empty result is `.`.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with(SEPARATOR);
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split(SEPARATOR) {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        joined
    }
}

impl From<RawData> for MatchRecord {
    fn from(data: RawData) -> Self {
        Self {
            path: data.path.text,
            line_number: data.line_number,
            line_text: data.lines.text,
            submatches: data.submatches.into_iter().map(Submatch::from).collect(),
        }
    }
}
