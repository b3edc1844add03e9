//! Line-oriented terminal prompts and the numbered-list selection protocol.
//!
//! A list is printed as `[index] label`, one line per item, followed by a
//! single prompt. The answer must be a zero-based index into the list.

use std::io::BufRead;
use std::io::Write;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("Nothing to choose from")]
    Empty,

    #[error("Index {index} out of bounds, expected 0..{len}")]
    OutOfRange { index: i64, len: usize },

    #[error("Expected an index, got {input:?}")]
    NotANumber { input: String },

    #[error("Input closed before an answer was given")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SelectError {
    /// True when the answer itself was unusable (as opposed to the list or the terminal).
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SelectError::OutOfRange { .. } | SelectError::NotANumber { .. })
    }
}

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    attempts: usize,
}

impl Prompt<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Prompt::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// A prompt that gives up after the first bad selection.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            attempts: 1,
        }
    }

    /// Allow up to `attempts` answers per selection before failing. Zero is treated as one.
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, SelectError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SelectError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Print every item with its index, then ask for one of them.
    ///
    /// An empty list fails before anything is read.
    pub fn select<'a, T>(
        &mut self,
        items: &'a [T],
        prompt: &str,
        label: impl Fn(&T) -> String,
    ) -> Result<&'a T, SelectError> {
        if items.is_empty() {
            return Err(SelectError::Empty);
        }

        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "[{}] {}", i, label(item))?;
        }

        let mut remaining = self.attempts;
        loop {
            let answer = self.ask(prompt)?;
            match parse_index(&answer, items.len()) {
                Ok(index) => {
                    debug!("Selected index {} of {}", index, items.len());
                    return Ok(&items[index]);
                }
                Err(e) => {
                    remaining -= 1;
                    if remaining == 0 {
                        return Err(e);
                    }
                    writeln!(self.output, "{}, try again.", e)?;
                }
            }
        }
    }
}

/// Parse `answer` as an index into a list of `len` items.
pub fn parse_index(answer: &str, len: usize) -> Result<usize, SelectError> {
    let index: i64 = answer
        .trim()
        .parse()
        .map_err(|_| SelectError::NotANumber {
            input: answer.to_string(),
        })?;
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(SelectError::OutOfRange { index, len }),
    }
}
