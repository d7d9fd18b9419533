//! Data models for search-tool output.
//!
//! The module holds two shapes:
//!
//! - [`RawRecord`] - one line of the search tool's JSON output, exactly as emitted
//! - [`MatchRecord`] - one normalized search hit handed to callers
//!
//! Only `match` records are ever projected from the first shape into the second.

pub mod record;
pub mod wire;

pub use record::{MatchRecord, Submatch};
pub use wire::{KIND_MATCH, RawData, RawRecord, RawSubmatch, RawText};
