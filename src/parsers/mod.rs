//! JSON-lines parsing for search-tool output
//!
//! # Error Handling Strategy
//!
//! Translation is **fail-fast**: the first line that cannot be decoded, or the first
//! failed read, aborts the whole pass and nothing parsed before it is returned. Output
//! from the search tool is either well-formed or the run is meaningless, so there is
//! no skip-and-continue mode. Callers that want leniency must filter input themselves.
//!
//! Errors are typed ([`TranslateError`](crate::TranslateError)) so callers can tell
//! decode failures from read failures; the binary wraps them in `anyhow` context.

pub mod deserializers;
pub mod translate;

pub use translate::{translate, translate_str};
