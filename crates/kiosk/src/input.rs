//! Whitespace-delimited token reading.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads input one whitespace-separated token at a time, pulling new lines
/// only once the tokens of the previous line are used up.
///
/// Several answers may therefore be typed on one line (`P0 3 y 0 1 -1`).
/// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line turns
/// into ordinary (invalid) tokens instead of a read error.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}
