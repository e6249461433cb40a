//! Process standard streams as sinks

use std::io::{self, Write};

/// Writes to the process's stderr or stdout.
///
/// Each write locks the stream for its duration, so a record emitted by
/// the logger is never interleaved with other output on the same stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Console {
    #[default]
    Stderr,
    Stdout,
}

impl Console {
    pub fn label(&self) -> &'static str {
        match self {
            Console::Stderr => "stderr",
            Console::Stdout => "stdout",
        }
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Console::Stderr => io::stderr().lock().write(buf),
            Console::Stdout => io::stdout().lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Console::Stderr => io::stderr().lock().write_all(buf),
            Console::Stdout => io::stdout().lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Console::Stderr => io::stderr().flush(),
            Console::Stdout => io::stdout().flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stderr() {
        assert_eq!(Console::default(), Console::Stderr);
        assert_eq!(Console::default().label(), "stderr");
        assert_eq!(Console::Stdout.label(), "stdout");
    }

    #[test]
    fn test_flush_both_streams() {
        assert!(Console::Stderr.flush().is_ok());
        assert!(Console::Stdout.flush().is_ok());
    }
}
