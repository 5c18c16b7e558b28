//! Interactive lookup loop
//!
//! Reads one word per line, prints its entry (or "word not found") and asks
//! whether to continue. Input and output are generic so the loop can be
//! driven from tests as well as from stdin/stdout.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::cache::Buffer;
use crate::data::Fetch;
use crate::lookup::lookup;

/// Printed when a lookup yields nothing
pub const NOT_FOUND_MESSAGE: &str = "word not found";

/// Printed after every lookup
pub const CONTINUE_PROMPT: &str = "Would you like to try another word? (y)es/(n)o?";

/// State of an interactive session
pub struct Repl<F> {
    fetcher: F,
    buffer: Option<Buffer>,
    raw_output: bool,
}

impl<F: Fetch> Repl<F> {
    /// Creates a session; pass `None` as buffer to run without a cache
    pub fn new(fetcher: F, buffer: Option<Buffer>, raw_output: bool) -> Self {
        Self {
            fetcher,
            buffer,
            raw_output,
        }
    }

    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    /// Runs the loop until the user declines to continue or input ends
    ///
    /// Only I/O errors on `input`/`output` are returned; lookup failures are
    /// reported to the user as [`NOT_FOUND_MESSAGE`].
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<()> {
        let mut line = String::new();

        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("input closed");
                return Ok(());
            }

            writeln!(output)?;
            let word = line.trim();

            match lookup(word, self.buffer.as_mut(), &self.fetcher).await {
                Some(entry) if self.raw_output => writeln!(output, "{}", entry.render_raw())?,
                Some(entry) => writeln!(output, "{}", entry)?,
                None => writeln!(output, "{}", NOT_FOUND_MESSAGE)?,
            }

            write!(output, "{}", CONTINUE_PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 || !is_affirmative(&line) {
                return Ok(());
            }
        }
    }
}

/// True if the answer starts with `y` or `Y`
pub fn is_affirmative(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FetchError;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Fetcher that knows a single word
    struct OneWord;

    impl Fetch for OneWord {
        async fn fetch(&self, word: &str) -> Result<Value, FetchError> {
            if word == "hello" {
                Ok(json!([{
                    "word": "hello",
                    "phonetic": "/həˈləʊ/",
                    "meanings": [{ "definitions": [{ "definition": "a greeting" }] }]
                }]))
            } else {
                Err(FetchError::NotFound {
                    status: StatusCode::NOT_FOUND,
                })
            }
        }
    }

    async fn run_session(repl: &mut Repl<OneWord>, input: &str) -> String {
        let mut output = Vec::new();
        repl.run(Cursor::new(input), &mut output)
            .await
            .expect("Session should not fail");
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Yes"));
        assert!(!is_affirmative(" yes"));
        assert!(!is_affirmative("\tY"));
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("maybe"));
    }

    #[tokio::test]
    async fn test_prints_entry_then_stops_on_no() {
        let mut repl = Repl::new(OneWord, None, false);

        let out = run_session(&mut repl, "hello\nn\n").await;

        assert!(out.starts_with('\n'));
        assert!(out.contains("Word: hello"));
        assert!(out.contains("Phonetic: /həˈləʊ/"));
        assert!(out.contains("- a greeting"));
        assert_eq!(out.matches(CONTINUE_PROMPT).count(), 1);
    }

    #[tokio::test]
    async fn test_prints_not_found() {
        let mut repl = Repl::new(OneWord, None, false);

        let out = run_session(&mut repl, "zzzqx\nno\n").await;

        assert!(out.contains(NOT_FOUND_MESSAGE));
        assert!(!out.contains("Word:"));
    }

    #[tokio::test]
    async fn test_continues_on_yes() {
        let mut repl = Repl::new(OneWord, None, false);

        let out = run_session(&mut repl, "zzzqx\ny\nhello\nn\n").await;

        assert_eq!(out.matches(CONTINUE_PROMPT).count(), 2);
        assert!(out.contains(NOT_FOUND_MESSAGE));
        assert!(out.contains("Word: hello"));
    }

    #[tokio::test]
    async fn test_leading_space_answer_exits() {
        let mut repl = Repl::new(OneWord, None, false);

        let out = run_session(&mut repl, "zzzqx\n yes\nhello\nn\n").await;

        assert_eq!(out.matches(CONTINUE_PROMPT).count(), 1);
        assert!(!out.contains("Word: hello"));
    }

    #[tokio::test]
    async fn test_stops_at_end_of_input() {
        let mut repl = Repl::new(OneWord, None, false);

        let out = run_session(&mut repl, "hello\n").await;
        assert_eq!(out.matches(CONTINUE_PROMPT).count(), 1);

        let out = run_session(&mut repl, "").await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_raw_output() {
        let mut repl = Repl::new(OneWord, None, true);

        let out = run_session(&mut repl, "hello\nn\n").await;

        assert!(out.contains("\"word\": \"hello\""));
        assert!(!out.contains("Word: hello"));
    }

    #[tokio::test]
    async fn test_trims_input_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let buffer = Buffer::open(temp_dir.path()).unwrap();
        let mut repl = Repl::new(OneWord, Some(buffer), false);

        run_session(&mut repl, "  hello \r\nn\n").await;

        assert!(repl.buffer().unwrap().contains("hello"));
        assert!(temp_dir.path().join("hello.json").exists());
    }
}
