//! Text template language for [`TextFormatter`](crate::formatters::TextFormatter)
//!
//! Templates are literal text with `{{.Field}}` actions. The fields a
//! record exposes are `Level`, `Time` and `Message` (case-sensitive).
//! Whitespace inside the braces is ignored, so `{{ .Time }}` works too.
//!
//! Syntax errors are reported by [`Template::parse`]. A well-formed action
//! naming a field the record does not have parses fine and only fails when
//! it is rendered.

use super::error::{LoggerError, Result};
use super::record::LogRecord;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    Level,
    Time,
    Message,
    Unknown(String),
}

impl Field {
    fn from_name(name: &str) -> Self {
        match name {
            "Level" => Field::Level,
            "Time" => Field::Time,
            "Message" => Field::Message,
            other => Field::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field { field: Field, position: usize },
}

/// A parsed template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    ///
    /// # Examples
    ///
    /// ```
    /// use logga::core::Template;
    /// use logga::LogRecord;
    ///
    /// let template = Template::parse("[{{.Level}}] {{ .Message }}").unwrap();
    /// let record = LogRecord::new("hello", "now", "INFO");
    /// assert_eq!(template.render_to_string(&record).unwrap(), "[INFO] hello");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let action_start = offset + start;
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open
                .find(CLOSE)
                .ok_or_else(|| LoggerError::template(action_start, "unclosed action"))?;

            let field = Self::parse_action(&after_open[..end], action_start)?;
            segments.push(Segment::Field {
                field,
                position: action_start,
            });

            let consumed = start + OPEN.len() + end + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            source: text.to_string(),
            segments,
        })
    }

    fn parse_action(action: &str, position: usize) -> Result<Field> {
        let action = action.trim();
        if action.is_empty() {
            return Err(LoggerError::template(position, "missing value for action"));
        }
        let name = action.strip_prefix('.').ok_or_else(|| {
            LoggerError::template(position, format!("unsupported action '{}'", action))
        })?;
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(LoggerError::template(
                position,
                format!("bad field name '{}'", name),
            ));
        }
        Ok(Field::from_name(name))
    }

    /// The text this template was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True for a template that renders nothing.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render `record` into a string.
    ///
    /// On an unknown field the error carries the output rendered before
    /// it; see [`Template::render_partial`].
    pub fn render_to_string(&self, record: &LogRecord) -> Result<String> {
        let (rendered, failure) = self.render_partial(record);
        match failure {
            Some(err) => Err(err),
            None => Ok(rendered),
        }
    }

    /// Render as far as possible, returning the text produced and the
    /// error that stopped rendering, if any.
    pub fn render_partial(&self, record: &LogRecord) -> (String, Option<LoggerError>) {
        let mut out = String::with_capacity(self.source.len() + record.message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field { field, position } => match field {
                    Field::Level => out.push_str(&record.level),
                    Field::Time => out.push_str(&record.time),
                    Field::Message => out.push_str(&record.message),
                    Field::Unknown(name) => {
                        let err = LoggerError::template(
                            *position,
                            format!("can't evaluate field {} in log record", name),
                        );
                        return (out, Some(err));
                    }
                },
            }
        }
        (out, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LogRecord {
        LogRecord::new("disk full", "2025-01-08T10:30:45Z", "ERROR")
    }

    #[test]
    fn test_substitutes_all_fields() {
        let template = Template::parse("{{.Level}} - {{.Time}} - {{.Message}}\n").unwrap();
        assert_eq!(
            template.render_to_string(&record()).unwrap(),
            "ERROR - 2025-01-08T10:30:45Z - disk full\n"
        );
    }

    #[test]
    fn test_whitespace_inside_action() {
        let template = Template::parse("{{ .Message }}|{{.Level }}").unwrap();
        assert_eq!(template.render_to_string(&record()).unwrap(), "disk full|ERROR");
    }

    #[test]
    fn test_repeated_and_literal_only() {
        let template = Template::parse("{{.Level}}{{.Level}}").unwrap();
        assert_eq!(template.render_to_string(&record()).unwrap(), "ERRORERROR");

        let template = Template::parse("no placeholders").unwrap();
        assert_eq!(template.render_to_string(&record()).unwrap(), "no placeholders");
    }

    #[test]
    fn test_single_braces_are_literal() {
        let template = Template::parse("{ {.Level} }").unwrap();
        assert_eq!(template.render_to_string(&record()).unwrap(), "{ {.Level} }");
    }

    #[test]
    fn test_unclosed_action() {
        let err = Template::parse("ok {{.Level").unwrap_err();
        assert!(matches!(err, LoggerError::Template { position: 3, .. }));
    }

    #[test]
    fn test_rejects_malformed_actions() {
        assert!(Template::parse("{{}}").is_err());
        assert!(Template::parse("{{Level}}").is_err());
        assert!(Template::parse("{{.}}").is_err());
        assert!(Template::parse("{{.Le vel}}").is_err());
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let template = Template::parse("a{{.level}}b").unwrap();
        let (partial, err) = template.render_partial(&record());
        assert_eq!(partial, "a");
        assert!(matches!(err, Some(LoggerError::Template { position: 1, .. })));
    }

    #[test]
    fn test_empty_template() {
        let template = Template::default();
        assert!(template.is_empty());
        assert_eq!(template.render_to_string(&record()).unwrap(), "");
    }

    #[test]
    fn test_multibyte_literals() {
        let template = Template::parse("→ {{.Message}} ←").unwrap();
        assert_eq!(template.render_to_string(&record()).unwrap(), "→ disk full ←");
        assert_eq!(template.source(), "→ {{.Message}} ←");
    }
}
