use std::fmt::Write as _;
use std::io;

use crate::IntType;

/// Destination of the `println` builtin.
pub trait Sink {
    fn print(&mut self, value: IntType);
}

/// Writes every value to standard output on its own line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Sink for Console {
    fn print(&mut self, value: IntType) {
        Stream::new(io::stdout().lock()).print(value);
    }
}

/// Writes every value to `out` on its own line.
///
/// Write failures, such as a closed pipe, are dropped.
#[derive(Debug)]
pub struct Stream<W> {
    out: W,
}

impl<W: io::Write> Stream<W> {
    pub fn new(out: W) -> Stream<W> {
        Stream { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Sink for Stream<W> {
    fn print(&mut self, value: IntType) {
        let _ = writeln!(self.out, "{}", value);
    }
}

/// Collects printed values as text, one line per value.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    out: String,
}

impl Buffer {
    pub fn new() -> Buffer {
        Buffer::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Sink for Buffer {
    fn print(&mut self, value: IntType) {
        // writing into a String cannot fail
        let _ = writeln!(self.out, "{}", value);
    }
}
