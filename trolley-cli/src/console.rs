//! Paced console output and validated line input.
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use trolley_game::TextSpeed;

/// Why a prompt could not produce a value.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The user closed input (Ctrl-D) or otherwise ended the session.
    #[error("input closed by user")]
    Interrupted,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Renders text one character at a time with a fixed delay.
pub struct Typewriter<W> {
    out: W,
    speed: TextSpeed,
}

impl<W: Write> Typewriter<W> {
    pub fn new(out: W, speed: TextSpeed) -> Self {
        Self { out, speed }
    }

    pub fn set_speed(&mut self, speed: TextSpeed) {
        self.speed = speed;
    }

    /// Type `text` out followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        if self.speed.is_instant() {
            writeln!(self.out, "{text}")?;
            return self.out.flush();
        }
        let delay = self.speed.delay();
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            thread::sleep(delay);
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Write `text` immediately, without pacing or a trailing newline.
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write `text` immediately with a trailing newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Sleep for `pause` unless pacing is disabled.
    pub fn pause(&self, pause: Duration) {
        if !self.speed.is_instant() {
            thread::sleep(pause);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Line-oriented prompt loop over any buffered reader.
pub struct Console<R, W> {
    input: R,
    writer: Typewriter<W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, speed: TextSpeed) -> Self {
        Self {
            input,
            writer: Typewriter::new(output, speed),
        }
    }

    pub fn writer(&mut self) -> &mut Typewriter<W> {
        &mut self.writer
    }

    /// Show `prompt` and return the next trimmed line.
    ///
    /// # Errors
    ///
    /// `ConsoleError::Interrupted` when input is exhausted, `Io` on read or write failure.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.writer.raw(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompt until `parse` accepts the input, printing `retry` after each rejection.
    ///
    /// # Errors
    ///
    /// Propagates `read_line` errors; rejected input is never an error.
    pub fn prompt_until<T, F>(
        &mut self,
        prompt: &str,
        retry: &str,
        mut parse: F,
    ) -> Result<T, ConsoleError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            log::debug!("rejected input {line:?} at prompt {prompt:?}");
            self.writer.say(retry)?;
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.writer.into_inner()
    }
}
