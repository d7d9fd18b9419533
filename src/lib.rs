//! rg-matches - Structured match records from ripgrep's JSON output
//!
//! This library turns the newline-delimited JSON emitted by `rg --json` into
//! strongly-typed [`MatchRecord`]s for display code. It supports:
//!
//! - Translating a JSON-lines stream into match records, skipping every record
//!   kind other than `match`
//! - Deriving file names and directories from match paths
//! - Summarizing a batch of matches
//!
//! Running the search tool and rendering results are left to callers.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use rg_matches::translate;
//!
//! let records = translate(io::stdin().lock())?;
//! for record in &records {
//!     println!("{}:{}", record.file_name(), record.line_number);
//! }
//! # Ok::<(), rg_matches::TranslateError>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod summary;
pub mod utils;

// Re-export commonly used types
pub use error::TranslateError;
pub use models::{MatchRecord, Submatch};
pub use parsers::{translate, translate_str};
pub use summary::MatchSummary;
pub use utils::format_path_with_tilde;
