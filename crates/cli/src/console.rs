// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line-oriented terminal I/O.

use std::io::{self, BufRead, Write};

/// A prompt-and-answer terminal over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps `input` and `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` without a newline and reads one line.
    ///
    /// Returns `None` once input is exhausted. The trailing line break is
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written or read.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len: usize = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Returns the writer, for inspecting captured output.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
