//! Cache module for storing dictionary payloads on disk
//!
//! The [`Buffer`] keeps every looked-up word in memory and mirrors it to a
//! directory of JSON files, one per word, holding the payload exactly as the
//! API returned it. There is no expiry: a cached word is served from disk on
//! every later run.

mod buffer;

pub use buffer::{Buffer, BufferError};
