//! Dictionary data model and API client
//!
//! [`Entry`] is the parsed form of one lookup result; [`DictionaryClient`]
//! fetches the raw payloads it is built from.

pub mod dictionary;
pub mod entry;

pub use dictionary::{DictionaryClient, Fetch, FetchError};
pub use entry::{Entry, ParseError};
