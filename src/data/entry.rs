//! Parsed dictionary entries
//!
//! An [`Entry`] keeps the raw payload returned by the dictionary API and a
//! display-ready projection of it (word, definitions, origin, phonetic) that is
//! computed once when the entry is constructed.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Placeholder shown for optional fields the payload does not provide
const UNKNOWN: &str = "Unknown";

/// Errors that can occur when parsing a dictionary payload
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is not a JSON array of results
    #[error("Payload is not an array of results")]
    NotAnArray,

    /// The payload array has no first result
    #[error("Payload contains no results")]
    NoResults,

    /// The first result does not have the expected fields
    #[error("Unexpected result shape: {0}")]
    Shape(serde_json::Error),

    /// The `word` field is present but empty
    #[error("Result has an empty word")]
    EmptyWord,

    /// The first result has no meaning groups
    #[error("Result for '{0}' has no meanings")]
    NoMeanings(String),

    /// The first meaning group has an empty definition list
    #[error("Result for '{0}' has no definitions")]
    NoDefinitions(String),
}

/// First element of the API response array
#[derive(Debug, Deserialize)]
struct ApiResult {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    origin: Option<String>,
    meanings: Vec<ApiMeaning>,
}

/// A meaning group (one part of speech)
#[derive(Debug, Deserialize)]
struct ApiMeaning {
    definitions: Vec<ApiDefinition>,
}

/// A single definition within a meaning group
#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
}

/// A parsed, immutable dictionary result for one word
///
/// The raw payload is the source of truth: it is what gets cached on disk and
/// what [`Entry::render_raw`] prints. The other fields are derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    word: String,
    definitions: Vec<String>,
    origin: Option<String>,
    phonetic: Option<String>,
    raw: Value,
}

impl Entry {
    /// Parses a raw API payload into an entry
    ///
    /// The payload must be an array whose first element carries a non-empty
    /// `word` and at least one definition in `meanings[0].definitions`.
    /// `origin` and `phonetic` are optional; empty strings count as absent.
    pub fn from_value(raw: Value) -> Result<Self, ParseError> {
        let first = raw
            .as_array()
            .ok_or(ParseError::NotAnArray)?
            .first()
            .ok_or(ParseError::NoResults)?;

        let result = ApiResult::deserialize(first).map_err(ParseError::Shape)?;

        if result.word.is_empty() {
            return Err(ParseError::EmptyWord);
        }

        let meaning = match result.meanings.into_iter().next() {
            Some(meaning) => meaning,
            None => return Err(ParseError::NoMeanings(result.word)),
        };

        if meaning.definitions.is_empty() {
            return Err(ParseError::NoDefinitions(result.word));
        }

        let definitions = meaning
            .definitions
            .into_iter()
            .map(|d| d.definition)
            .collect();

        Ok(Self {
            word: result.word,
            definitions,
            origin: result.origin.filter(|s| !s.is_empty()),
            phonetic: result.phonetic.filter(|s| !s.is_empty()),
            raw,
        })
    }

    /// Parses an entry from JSON text (e.g. a cache file)
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_value(raw)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn phonetic(&self) -> Option<&str> {
        self.phonetic.as_deref()
    }

    /// The payload exactly as it was fetched or loaded
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Renders the entry as human-readable text
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// Renders the raw payload as JSON indented with two spaces
    pub fn render_raw(&self) -> String {
        format!("{:#}", self.raw)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word: {}", self.word)?;
        writeln!(f, "Origin: {}", self.origin().unwrap_or(UNKNOWN))?;
        writeln!(f, "Phonetic: {}", self.phonetic().unwrap_or(UNKNOWN))?;
        writeln!(f, "===Definition(s)===")?;

        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "- {}", definition)?;
        }

        Ok(())
    }
}

impl FromStr for Entry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
