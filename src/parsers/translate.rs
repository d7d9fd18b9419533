use std::io::BufRead;

use serde::de::Error as _;
use serde_json::Value;
use tracing::debug;

use crate::error::TranslateError;
use crate::models::{MatchRecord, RawRecord};

/// Translate the search tool's JSON-lines output into match records
///
/// Reads `reader` to the end, one line at a time. Empty lines are skipped,
/// every other line must be a JSON object. Records whose `type` is not
/// `match` are skipped; match records are projected into [`MatchRecord`]s in
/// input order.
///
/// The reader is only read from, never closed. Pass `&mut reader` to keep
/// using it afterwards.
///
/// # Errors
///
/// Stops at the first failure and discards everything parsed so far:
/// - [`TranslateError::Decode`] if a non-empty line is not a JSON object of
///   the expected shape
/// - [`TranslateError::Read`] if the reader itself fails
///
/// # Examples
///
/// ```
/// use rg_matches::translate;
///
/// let output = r#"{"type":"begin","data":{"path":{"text":"main.go"}}}
/// {"type":"match","data":{"path":{"text":"main.go"},"lines":{"text":"x\n"},"line_number":14,"submatches":[{"match":{"text":"x"},"start":0,"end":1}]}}
/// "#;
///
/// let records = translate(output.as_bytes())?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].line_number, 14);
/// # Ok::<(), rg_matches::TranslateError>(())
/// ```
pub fn translate<R: BufRead>(mut reader: R) -> Result<Vec<MatchRecord>, TranslateError> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_num = 0;
    let mut skipped = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| TranslateError::Read { line: line_num + 1, source })?;
        if read == 0 {
            break;
        }
        line_num += 1;

        let line = strip_line_break(&buf);
        if line.is_empty() {
            continue;
        }

        let raw =
            decode_line(line).map_err(|source| TranslateError::Decode { line: line_num, source })?;
        if !raw.is_match() {
            skipped += 1;
            continue;
        }

        records.push(MatchRecord::from(raw.data));
    }

    debug!(lines = line_num, matches = records.len(), skipped, "translated search output");

    Ok(records)
}

/// Translate search output that is already in memory
pub fn translate_str(input: &str) -> Result<Vec<MatchRecord>, TranslateError> {
    translate(input.as_bytes())
}

fn strip_line_break(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Decode one line, rejecting valid JSON that is not an object
fn decode_line(line: &[u8]) -> Result<RawRecord, serde_json::Error> {
    let value: Value = serde_json::from_slice(line)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom(format!(
            "expected a JSON object, found {}",
            describe(&value)
        )));
    }
    serde_json::from_value(value)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
