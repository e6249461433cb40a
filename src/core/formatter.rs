//! Formatter trait for rendering records onto a sink

use super::{error::Result, record::LogRecord};
use std::io::Write;

/// Renders one record onto a byte sink.
///
/// The logger calls `format` once per accepted record while holding its
/// configuration lock, so implementations see a consistent sink and never
/// race with other records. Errors are never returned to the log call site;
/// the logger routes them to its error handler instead.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord, out: &mut dyn Write) -> Result<()>;

    fn name(&self) -> &str;
}
