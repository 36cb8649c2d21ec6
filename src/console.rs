// src/console.rs
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Line-oriented terminal I/O shared by every command handler.
pub struct Console<R, W> {
    input: R,
    output: W,
    pause: Duration,
    short_pause: Duration,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, pause: Duration, short_pause: Duration) -> Self {
        Self {
            input,
            output,
            pause,
            short_pause,
            closed: false,
        }
    }

    /// Reads one line without its line ending. `None` once input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prints `label` and reads the answer. A closed input reads as an empty answer.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush()
    }

    pub fn pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        thread::sleep(self.pause);
        Ok(())
    }

    pub fn short_pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        thread::sleep(self.short_pause);
        Ok(())
    }

    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        self.prompt("\nPress Enter to return...")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub fn scripted(script: &str) -> Console<io::Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(
        io::Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        Duration::ZERO,
        Duration::ZERO,
    )
}
