use std::io::{self, Write};

use clap::ValueEnum;

/// Terminator appended to every emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LineEnding {
    /// `\r\n`, what most serial consoles expect.
    #[default]
    Crlf,
    Lf,
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// Consumer of complete formatted lines.
pub trait LineSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory.
impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes terminated lines to a byte stream, flushing after each one.
pub struct SerialSink<W> {
    writer: W,
    ending: LineEnding,
}

impl<W: Write> SerialSink<W> {
    pub fn new(writer: W, ending: LineEnding) -> Self {
        Self { writer, ending }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for SerialSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(self.ending.as_str().as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ending_is_crlf() {
        let mut sink = SerialSink::new(Vec::new(), LineEnding::default());
        sink.emit("$TRIANGLE,pressed").unwrap();
        sink.emit("$TRIANGLE,released").unwrap();
        assert_eq!(
            sink.into_inner(),
            b"$TRIANGLE,pressed\r\n$TRIANGLE,released\r\n".to_vec()
        );
    }

    #[test]
    fn configurable_ending() {
        let mut sink = SerialSink::new(Vec::new(), LineEnding::Lf);
        sink.emit("a").unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"a\n");

        let mut sink = SerialSink::new(Vec::new(), LineEnding::Cr);
        sink.emit("b").unwrap();
        assert_eq!(sink.into_inner(), b"b\r".to_vec());
    }

    #[test]
    fn vec_sink_collects_lines() {
        let mut lines = Vec::new();
        lines.emit("x").unwrap();
        assert_eq!(lines, vec!["x".to_string()]);
    }
}
