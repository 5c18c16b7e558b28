//! Local word buffer backed by a directory of JSON files
//!
//! Provides a `Buffer` that keeps parsed entries in memory and stores each
//! entry's raw payload as `<word>.json`, so a later run can answer from disk
//! instead of the network.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::data::{Entry, ParseError};

/// Extension of cache files
const FILE_EXTENSION: &str = "json";

/// Errors that can occur when reading from or writing to the buffer
#[derive(Debug, Error)]
pub enum BufferError {
    /// The word is not in the buffer
    #[error("Word not in buffer: '{0}'")]
    NotFound(String),

    /// Filesystem read or write failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A cache file does not contain a valid entry
    #[error("Invalid cache file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The word cannot be used as a file name inside the buffer directory
    #[error("Word cannot be stored as a cache file: '{0}'")]
    InvalidKey(String),
}

impl BufferError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// In-memory word → entry map mirrored to a directory on disk
///
/// Entries are keyed by the word inside their payload, not by file name.
/// Nothing is ever removed: the buffer grows through [`Buffer::add`] for the
/// lifetime of the process.
#[derive(Debug)]
pub struct Buffer {
    /// Directory holding one `<word>.json` file per cached word
    dir: PathBuf,
    entries: HashMap<String, Entry>,
}

impl Buffer {
    /// Opens the buffer at `dir`, loading every valid cache file in it
    ///
    /// Creates the directory if it does not exist. Files that cannot be read
    /// or parsed are skipped.
    ///
    /// # Returns
    /// * `Ok(Buffer)` on success, possibly empty
    /// * `Err(BufferError::Io)` if the directory cannot be created or listed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, BufferError> {
        let mut buffer = Self {
            dir: dir.into(),
            entries: HashMap::new(),
        };

        if !buffer.dir.is_dir() {
            fs::create_dir_all(&buffer.dir).map_err(|e| BufferError::io(&buffer.dir, e))?;
            info!(dir = %buffer.dir.display(), "created buffer directory");
            return Ok(buffer);
        }

        buffer.load_all()?;
        Ok(buffer)
    }

    /// Returns the default buffer directory
    ///
    /// Uses `~/.cache/dictcache/buffer` on Linux, or the equivalent platform
    /// cache path. Returns `None` if no home directory can be determined.
    pub fn default_dir() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "dictcache")?;
        Some(project_dirs.cache_dir().join("buffer"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached words in sorted order
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Returns the entry for `word`
    ///
    /// Fails with `BufferError::NotFound` if the word is not cached.
    pub fn get(&self, word: &str) -> Result<&Entry, BufferError> {
        self.entries
            .get(word)
            .ok_or_else(|| BufferError::NotFound(word.to_string()))
    }

    /// Inserts an entry in memory, replacing any entry for the same word
    pub fn add(&mut self, entry: Entry) {
        self.entries.insert(entry.word().to_string(), entry);
    }

    /// Parses a single cache file and adds it to the buffer
    ///
    /// The entry is keyed by the word in the payload, which may differ from the
    /// file name.
    pub fn load_file(&mut self, path: &Path) -> Result<&Entry, BufferError> {
        let content = fs::read_to_string(path).map_err(|e| BufferError::io(path, e))?;
        let entry = Entry::from_json(&content).map_err(|source| BufferError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let word = entry.word().to_string();
        self.add(entry);
        self.get(&word)
    }

    /// Writes the entry's raw payload to `<word>.json`, overwriting any old file
    ///
    /// Does not touch the in-memory map.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` with the path written
    /// * `Err(BufferError::InvalidKey)` if the word is not a safe file name
    /// * `Err(BufferError::Io)` if the directory or file cannot be written
    pub fn persist(&self, entry: &Entry) -> Result<PathBuf, BufferError> {
        let path = self.entry_path(entry.word())?;

        fs::create_dir_all(&self.dir).map_err(|e| BufferError::io(&self.dir, e))?;

        let json = serde_json::to_string(entry.raw())
            .map_err(|e| BufferError::io(&path, io::Error::new(io::ErrorKind::InvalidData, e)))?;

        fs::write(&path, json).map_err(|e| BufferError::io(&path, e))?;
        debug!(path = %path.display(), "persisted entry");

        Ok(path)
    }

    /// Returns the path of the cache file for a word
    pub fn entry_path(&self, word: &str) -> Result<PathBuf, BufferError> {
        if !is_valid_file_stem(word) {
            return Err(BufferError::InvalidKey(word.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", word, FILE_EXTENSION)))
    }

    /// Loads every `.json` regular file in the buffer directory
    fn load_all(&mut self) -> Result<(), BufferError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)
            .map_err(|e| BufferError::io(&self.dir, e))?
            .filter_map(|dir_entry| dir_entry.ok().map(|d| d.path()))
            .filter(|path| path.is_file() && has_json_extension(path))
            .collect();

        // Sorted so that duplicate words resolve the same way on every run
        paths.sort();

        let mut skipped = 0;
        for path in &paths {
            if let Err(e) = self.load_file(path) {
                warn!(error = %e, "skipping cache file");
                skipped += 1;
            }
        }

        info!(
            dir = %self.dir.display(),
            loaded = self.entries.len(),
            skipped,
            "loaded buffer"
        );
        Ok(())
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(".json"))
        .unwrap_or(false)
}

fn is_valid_file_stem(word: &str) -> bool {
    !word.is_empty()
        && word != "."
        && word != ".."
        && !word.contains(['/', '\\', '\0'])
}
