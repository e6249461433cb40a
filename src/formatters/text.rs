//! Template-driven text formatter

use crate::core::{Formatter, LogRecord, LoggerError, Result, Template};
use std::io::Write;

/// Template used when no message template is configured.
pub const DEFAULT_TEMPLATE: &str = "{{.Level}} - {{.Time}} - {{.Message}}\n";

/// Renders records through a [`Template`]
///
/// # Example
///
/// ```
/// use logga::formatters::TextFormatter;
/// use logga::{Formatter, LogRecord};
///
/// let formatter = TextFormatter::new("{{.Level}}: {{.Message}}\n").unwrap();
/// let mut out: Vec<u8> = Vec::new();
/// formatter
///     .format(&LogRecord::new("ready", "now", "INFO"), &mut out)
///     .unwrap();
/// assert_eq!(out, b"INFO: ready\n");
/// ```
#[derive(Debug, Clone)]
pub struct TextFormatter {
    template: Template,
}

impl TextFormatter {
    pub fn new(template: &str) -> Result<Self> {
        Ok(Self {
            template: Template::parse(template)?,
        })
    }

    /// Parse `template`, falling back to an empty template on a syntax
    /// error. The parse error is handed back alongside the formatter.
    pub fn new_lenient(template: &str) -> (Self, Option<LoggerError>) {
        match Self::new(template) {
            Ok(formatter) => (formatter, None),
            Err(err) => (Self::from_template(Template::default()), Some(err)),
        }
    }

    pub fn from_template(template: Template) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        let (formatter, _) = Self::new_lenient(DEFAULT_TEMPLATE);
        formatter
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &LogRecord, out: &mut dyn Write) -> Result<()> {
        let (rendered, failure) = self.template.render_partial(record);
        if !rendered.is_empty() {
            out.write_all(rendered.as_bytes())
                .map_err(|e| LoggerError::io_operation("writing text record", e))?;
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LogRecord {
        LogRecord::new("x", "2025-01-08T10:30:45Z", "WARNING")
    }

    #[test]
    fn test_default_template() {
        let mut out: Vec<u8> = Vec::new();
        TextFormatter::default().format(&record(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "WARNING - 2025-01-08T10:30:45Z - x\n"
        );
    }

    #[test]
    fn test_lenient_falls_back_to_empty() {
        let (formatter, err) = TextFormatter::new_lenient("{{.Level");
        assert!(matches!(err, Some(LoggerError::Template { .. })));
        assert!(formatter.template().is_empty());

        let mut out: Vec<u8> = Vec::new();
        formatter.format(&record(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_field_writes_prefix_then_errors() {
        let formatter = TextFormatter::new("{{.Level}} {{.Thread}} {{.Message}}").unwrap();
        let mut out: Vec<u8> = Vec::new();
        let result = formatter.format(&record(), &mut out);

        assert!(matches!(result, Err(LoggerError::Template { .. })));
        assert_eq!(out, b"WARNING ");
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = TextFormatter::default().format(&record(), &mut Closed);
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
