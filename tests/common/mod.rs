//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// Builder for a whole `rg --json` output stream
pub struct SearchOutputBuilder {
    lines: Vec<String>,
}

impl SearchOutputBuilder {
    /// Create a new builder with no lines
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a raw line verbatim
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add a `begin` record for the given path
    pub fn begin(self, path: &str) -> Self {
        let line = json!({"type": "begin", "data": {"path": {"text": path}}}).to_string();
        self.line(&line)
    }

    /// Add an `end` record for the given path
    pub fn end(self, path: &str) -> Self {
        let line = json!({
            "type": "end",
            "data": {
                "path": {"text": path},
                "binary_offset": null,
                "stats": {"matches": 1, "matched_lines": 1, "searches": 1}
            }
        })
        .to_string();
        self.line(&line)
    }

    /// Add a `context` record, as emitted with `rg --json -C`
    pub fn context(self, path: &str, line_number: u64, text: &str) -> Self {
        let line = json!({
            "type": "context",
            "data": {
                "path": {"text": path},
                "lines": {"text": text},
                "line_number": line_number,
                "absolute_offset": 0,
                "submatches": []
            }
        })
        .to_string();
        self.line(&line)
    }

    /// Add a trailing `summary` record
    pub fn summary(self) -> Self {
        let line = json!({
            "type": "summary",
            "data": {
                "elapsed_total": {"human": "0.001s", "nanos": 1000000, "secs": 0},
                "stats": {"matches": 0, "searches": 1, "searches_with_match": 0}
            }
        })
        .to_string();
        self.line(&line)
    }

    /// Add a `match` record
    pub fn with_match(self, entry: MatchLineBuilder) -> Self {
        let line = entry.to_json();
        self.line(&line)
    }

    /// Add a begin/match.../end block for one file
    pub fn with_file(mut self, path: &str, entries: Vec<MatchLineBuilder>) -> Self {
        self = self.begin(path);
        for entry in entries {
            self = self.with_match(entry.path(path));
        }
        self.end(path)
    }

    /// Join the lines with newlines, with a trailing newline
    pub fn build(&self) -> String {
        let mut output = self.lines.join("\n");
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    /// Write the output to a temporary file
    pub fn write_temp_file(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(self.build().as_bytes()).expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }
}

impl Default for SearchOutputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `match` record
pub struct MatchLineBuilder {
    path: String,
    lines: String,
    line_number: u64,
    submatches: Vec<(String, usize, usize)>,
}

impl MatchLineBuilder {
    /// Create a new match with default values
    pub fn new() -> Self {
        Self {
            path: "src/main.rs".to_string(),
            lines: "fn main() {}\n".to_string(),
            line_number: 1,
            submatches: Vec::new(),
        }
    }

    /// Set the path
    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Set the matched line text, including any trailing newline
    pub fn lines(mut self, lines: &str) -> Self {
        self.lines = lines.to_string();
        self
    }

    /// Set the line number
    pub fn line_number(mut self, line_number: u64) -> Self {
        self.line_number = line_number;
        self
    }

    /// Add a submatch
    pub fn submatch(mut self, text: &str, start: usize, end: usize) -> Self {
        self.submatches.push((text.to_string(), start, end));
        self
    }

    pub fn to_value(&self) -> Value {
        let submatches: Vec<Value> = self
            .submatches
            .iter()
            .map(|(text, start, end)| json!({"match": {"text": text}, "start": start, "end": end}))
            .collect();

        json!({
            "type": "match",
            "data": {
                "path": {"text": self.path},
                "lines": {"text": self.lines},
                "line_number": self.line_number,
                "absolute_offset": 0,
                "submatches": submatches
            }
        })
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl Default for MatchLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of a realistic search over two files
pub fn realistic_search_output() -> SearchOutputBuilder {
    SearchOutputBuilder::new()
        .with_file(
            "src/parser.rs",
            vec![
                MatchLineBuilder::new()
                    .line_number(12)
                    .lines("    let token = next_token();\n")
                    .submatch("token", 8, 13)
                    .submatch("token", 21, 26),
                MatchLineBuilder::new()
                    .line_number(40)
                    .lines("// token stream ends here\n")
                    .submatch("token", 3, 8),
            ],
        )
        .with_file(
            "tests/lexer_test.rs",
            vec![
                MatchLineBuilder::new()
                    .line_number(7)
                    .lines("assert_eq!(token, Token::Eof);\n")
                    .submatch("token", 11, 16),
            ],
        )
        .summary()
}
