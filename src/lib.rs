//! dictcache Library
//!
//! Dictionary lookups backed by a local on-disk cache. This module exposes the
//! entry model, the buffer, the lookup operation and the CLI pieces for use in
//! the binary and in integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod logging;
pub mod lookup;
pub mod repl;

pub use cache::{Buffer, BufferError};
pub use data::{DictionaryClient, Entry, Fetch, FetchError, ParseError};
pub use lookup::lookup;
