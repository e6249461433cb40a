//! Append-only file sink

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// A file opened for appending. Writes go straight to the file.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Open `path` for appending, creating it if missing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use logga::{with_output, Logger};
    /// use logga::sinks::FileSink;
    ///
    /// let sink = FileSink::open("/var/log/app.log").unwrap();
    /// let logger = Logger::new([with_output(sink)]);
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(format!("opening log file '{}'", path.display()), e)
            })?;

        Ok(Self { file })
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
