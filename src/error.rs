use std::io;

/// Failure of a single translation pass
///
/// Both variants are fatal to the call: no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A non-empty line was not a JSON object of the expected shape
    #[error("failed to parse search output at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    /// The underlying stream reported an error
    #[error("failed to read search output near line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl TranslateError {
    /// 1-based input line the failure was detected on
    pub fn line(&self) -> usize {
        match self {
            TranslateError::Decode { line, .. } | TranslateError::Read { line, .. } => *line,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, TranslateError::Decode { .. })
    }

    pub fn is_read(&self) -> bool {
        matches!(self, TranslateError::Read { .. })
    }
}
