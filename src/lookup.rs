//! Cache-then-network word lookup
//!
//! Resolves a word to an [`Entry`] by checking the [`Buffer`] first and
//! falling back to the fetch collaborator. Every failure collapses to `None`
//! so callers have a single "word not found" path.

use tracing::{debug, warn};

use crate::cache::Buffer;
use crate::data::{Entry, Fetch};

/// Looks up `word`, using and populating `buffer` when one is given
///
/// # Returns
/// * `Some(Entry)` from the buffer (no network call) or freshly fetched
/// * `None` if the word is empty, the API reports it missing, the request
///   fails, or the payload cannot be parsed
///
/// # Behavior
/// - A buffer hit returns a copy of the cached entry without fetching
/// - A fetched entry is added to the buffer and persisted to disk
/// - Persistence failures are logged; the entry is still returned
pub async fn lookup<F: Fetch>(
    word: &str,
    buffer: Option<&mut Buffer>,
    fetcher: &F,
) -> Option<Entry> {
    if word.is_empty() {
        return None;
    }

    if let Some(ref buffer) = buffer {
        if let Ok(entry) = buffer.get(word) {
            debug!(word, "buffer hit");
            return Some(entry.clone());
        }
    }

    let payload = match fetcher.fetch(word).await {
        Ok(payload) => payload,
        Err(e) => {
            debug!(word, error = %e, "lookup failed");
            return None;
        }
    };

    let entry = match Entry::from_value(payload) {
        Ok(entry) => entry,
        Err(e) => {
            debug!(word, error = %e, "unusable payload");
            return None;
        }
    };

    if let Some(buffer) = buffer {
        buffer.add(entry.clone());
        if let Err(e) = buffer.persist(&entry) {
            warn!(word = entry.word(), error = %e, "failed to cache entry");
        }
    }

    Some(entry)
}
