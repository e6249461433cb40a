//! JSON formatter for structured logging

use crate::core::{Formatter, LogRecord, LoggerError, Result};
use std::io::Write;

/// Writes each record as one JSON object followed by a newline (JSONL)
///
/// The object shape is `{"message": ..., "time": ..., "level": ...}`.
/// Compatible with log aggregation tools like ELK, Loki, etc.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Multi-line, indented output. Each record still ends with one newline.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord, out: &mut dyn Write) -> Result<()> {
        let mut encoded = if self.pretty {
            serde_json::to_vec_pretty(record)?
        } else {
            serde_json::to_vec(record)?
        };
        encoded.push(b'\n');

        out.write_all(&encoded)
            .map_err(|e| LoggerError::io_operation("writing json record", e))
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_formatter() -> Result<()> {
        let record = LogRecord::new("User logged in", "2025-01-08T10:30:45Z", "INFO");
        let mut out: Vec<u8> = Vec::new();
        JsonFormatter::new().format(&record, &mut out)?;

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.ends_with("}\n"));
        assert_eq!(text.matches('\n').count(), 1);

        let parsed: LogRecord = serde_json::from_str(text.trim_end())?;
        assert_eq!(parsed, record);
        Ok(())
    }

    #[test]
    fn test_json_escapes_message() -> Result<()> {
        let record = LogRecord::new("line1\nline2 \"quoted\"", "t", "ERROR");
        let mut out: Vec<u8> = Vec::new();
        JsonFormatter::new().format(&record, &mut out)?;

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&text)?;
        assert_eq!(parsed["message"], "line1\nline2 \"quoted\"");
        Ok(())
    }

    #[test]
    fn test_json_pretty() -> Result<()> {
        let record = LogRecord::new("m", "t", "DEBUG");
        let mut out: Vec<u8> = Vec::new();
        JsonFormatter::pretty().format(&record, &mut out)?;

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.lines().count() > 1);
        let parsed: LogRecord = serde_json::from_str(&text)?;
        assert_eq!(parsed, record);
        Ok(())
    }
}
