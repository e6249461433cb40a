//! Logger configuration and the options that mutate it
//!
//! A [`LoggerConfig`] starts from explicit defaults and is changed only by
//! applying [`LogOption`]s, first at construction and later through
//! [`Logger::set_option`](super::logger::Logger::set_option). Options apply
//! in order, so the last option touching a field wins.

use super::error::{LoggerError, Result};
use super::formatter::Formatter;
use super::level::Level;
use super::timestamp::{system_clock, Clock, TimestampFormat};
use crate::formatters::TextFormatter;
use crate::sinks::Console;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Receives errors that log calls swallow (sink failures, bad templates).
pub type ErrorHandler = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Called with the exit status after a fatal record has been dispatched.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Exit status passed to the exit handler by `fatalf`.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Terminates the process. This is the default exit handler.
pub fn process_exit() -> ExitHandler {
    Arc::new(|code: i32| std::process::exit(code))
}

/// An error handler that reports to stderr.
pub fn stderr_error_handler() -> ErrorHandler {
    Arc::new(|err: &LoggerError| eprintln!("[LOGGER ERROR] {}", err))
}

/// Live configuration of a logger
pub struct LoggerConfig {
    pub level: Level,
    pub formatter: Arc<dyn Formatter>,
    pub time_format: TimestampFormat,
    pub output: Box<dyn Write + Send>,
    pub clock: Clock,
    pub error_handler: Option<ErrorHandler>,
    pub exit_handler: ExitHandler,
    output_label: &'static str,
    deferred: Vec<LoggerError>,
}

impl LoggerConfig {
    /// Queue an error an option tolerated, to be reported once the option
    /// has been applied.
    pub fn defer_error(&mut self, err: LoggerError) {
        self.deferred.push(err);
    }

    pub(crate) fn take_deferred_errors(&mut self) -> Vec<LoggerError> {
        std::mem::take(&mut self.deferred)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::All,
            formatter: Arc::new(TextFormatter::default()),
            time_format: TimestampFormat::Rfc3339,
            output: Box::new(Console::Stderr),
            clock: system_clock(),
            error_handler: None,
            exit_handler: process_exit(),
            output_label: Console::Stderr.label(),
            deferred: Vec::new(),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("formatter", &self.formatter.name())
            .field("time_format", &self.time_format)
            .field("output", &self.output_label)
            .field("error_handler", &self.error_handler.is_some())
            .finish_non_exhaustive()
    }
}

type CustomOption = Box<dyn FnOnce(&mut LoggerConfig) -> Result<()> + Send>;

/// A single configuration change
pub enum LogOption {
    Level(Level),
    /// Template text for a [`TextFormatter`]; a syntax error installs an
    /// empty template and is reported to the error handler.
    MessageTemplate(String),
    Formatter(Arc<dyn Formatter>),
    Output(Box<dyn Write + Send>),
    TimeFormat(TimestampFormat),
    Clock(Clock),
    ErrorHandler(Option<ErrorHandler>),
    ExitHandler(ExitHandler),
    Custom(CustomOption),
}

impl LogOption {
    /// An option running arbitrary code against the config.
    ///
    /// # Example
    ///
    /// ```
    /// use logga::{Level, LogOption, Logger};
    ///
    /// let quiet_unless_error = LogOption::custom(|config| {
    ///     config.level = config.level.max(Level::Error);
    ///     Ok(())
    /// });
    /// let logger = Logger::new([quiet_unless_error]);
    /// assert_eq!(logger.level(), Level::Error);
    /// ```
    pub fn custom<F>(apply: F) -> Self
    where
        F: FnOnce(&mut LoggerConfig) -> Result<()> + Send + 'static,
    {
        LogOption::Custom(Box::new(apply))
    }

    pub fn apply(self, config: &mut LoggerConfig) -> Result<()> {
        match self {
            LogOption::Level(level) => config.level = level,
            LogOption::MessageTemplate(text) => {
                let (formatter, err) = TextFormatter::new_lenient(&text);
                config.formatter = Arc::new(formatter);
                if let Some(err) = err {
                    config.defer_error(err);
                }
            }
            LogOption::Formatter(formatter) => config.formatter = formatter,
            LogOption::Output(output) => {
                config.output = output;
                config.output_label = "custom";
            }
            LogOption::TimeFormat(format) => config.time_format = format,
            LogOption::Clock(clock) => config.clock = clock,
            LogOption::ErrorHandler(handler) => config.error_handler = handler,
            LogOption::ExitHandler(handler) => config.exit_handler = handler,
            LogOption::Custom(apply) => return apply(config),
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        match self {
            LogOption::Level(_) => "Level",
            LogOption::MessageTemplate(_) => "MessageTemplate",
            LogOption::Formatter(_) => "Formatter",
            LogOption::Output(_) => "Output",
            LogOption::TimeFormat(_) => "TimeFormat",
            LogOption::Clock(_) => "Clock",
            LogOption::ErrorHandler(_) => "ErrorHandler",
            LogOption::ExitHandler(_) => "ExitHandler",
            LogOption::Custom(_) => "Custom",
        }
    }
}

impl fmt::Debug for LogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogOption::Level(level) => f.debug_tuple("Level").field(level).finish(),
            LogOption::MessageTemplate(text) => {
                f.debug_tuple("MessageTemplate").field(text).finish()
            }
            LogOption::TimeFormat(format) => f.debug_tuple("TimeFormat").field(format).finish(),
            other => f.write_str(other.kind()),
        }
    }
}

pub fn with_level(level: Level) -> LogOption {
    LogOption::Level(level)
}

pub fn with_message_template(template: impl Into<String>) -> LogOption {
    LogOption::MessageTemplate(template.into())
}

pub fn with_formatter<F: Formatter + 'static>(formatter: F) -> LogOption {
    LogOption::Formatter(Arc::new(formatter))
}

/// Like [`with_formatter`] for a formatter that is already shared.
pub fn with_shared_formatter(formatter: Arc<dyn Formatter>) -> LogOption {
    LogOption::Formatter(formatter)
}

pub fn with_output<W: Write + Send + 'static>(output: W) -> LogOption {
    LogOption::Output(Box::new(output))
}

pub fn with_time_format(format: TimestampFormat) -> LogOption {
    LogOption::TimeFormat(format)
}

pub fn with_clock(clock: Clock) -> LogOption {
    LogOption::Clock(clock)
}

pub fn with_error_handler<F>(handler: F) -> LogOption
where
    F: Fn(&LoggerError) + Send + Sync + 'static,
{
    LogOption::ErrorHandler(Some(Arc::new(handler)))
}

/// Replace the process exit performed by `fatalf`.
///
/// # Example
///
/// ```
/// use logga::{with_exit_handler, with_output, Logger};
/// use logga::sinks::MemorySink;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use std::sync::Arc;
///
/// let status = Arc::new(AtomicI32::new(0));
/// let seen = Arc::clone(&status);
/// let logger = Logger::new([
///     with_output(MemorySink::new()),
///     with_exit_handler(move |code| seen.store(code, Ordering::SeqCst)),
/// ]);
///
/// logger.fatalf(format_args!("giving up"));
/// assert_eq!(status.load(Ordering::SeqCst), 1);
/// ```
pub fn with_exit_handler<F>(handler: F) -> LogOption
where
    F: Fn(i32) + Send + Sync + 'static,
{
    LogOption::ExitHandler(Arc::new(handler))
}
