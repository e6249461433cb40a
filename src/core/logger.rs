//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    formatter::Formatter,
    level::Level,
    metrics::LoggerMetrics,
    options::{
        with_clock, with_error_handler, with_exit_handler, with_formatter, with_level,
        with_message_template, with_output, with_time_format, ErrorHandler, LogOption,
        LoggerConfig, FATAL_EXIT_CODE,
    },
    record::LogRecord,
    timestamp::{Clock, TimestampFormat},
};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A synchronous leveled logger.
///
/// All configuration lives behind one mutex. Dispatch holds it while it
/// checks the threshold, formats the record and writes to the sink, and
/// [`set_option`](Logger::set_option) holds it while it mutates the
/// config, so a record is always produced by one consistent configuration
/// and records from different threads never interleave on the sink.
///
/// # Example
///
/// ```
/// use logga::{with_level, with_output, Level, Logger};
/// use logga::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new([with_level(Level::Warning), with_output(sink.clone())]);
///
/// logger.debugf(format_args!("d"));
/// assert!(sink.is_empty());
///
/// logger.warningf(format_args!("w:{}", 3));
/// assert!(sink.contents().ends_with(" - w:3\n"));
/// ```
pub struct Logger {
    config: Mutex<LoggerConfig>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Build a logger from defaults, then apply `options` in order.
    ///
    /// Defaults: threshold [`Level::All`], RFC 3339 timestamps, the text
    /// formatter with [`DEFAULT_TEMPLATE`](crate::formatters::DEFAULT_TEMPLATE),
    /// stderr as the sink, and process exit for fatal records.
    ///
    /// Errors raised by options are reported to the error handler once all
    /// options are applied, so a handler supplied late still sees them.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LogOption>,
    {
        let mut config = LoggerConfig::default();
        let mut errors = Vec::new();
        for option in options {
            if let Err(err) = option.apply(&mut config) {
                errors.push(err);
            }
            errors.extend(config.take_deferred_errors());
        }

        let handler = config.error_handler.clone();
        let logger = Self {
            config: Mutex::new(config),
            metrics: Arc::new(LoggerMetrics::new()),
        };
        for err in errors {
            logger.report(handler.as_ref(), err);
        }
        logger
    }

    /// Apply one option to the live configuration.
    ///
    /// Only errors returned by custom options come back here; a bad
    /// message template is reported to the error handler like any other
    /// swallowed failure.
    pub fn set_option(&self, option: LogOption) -> Result<()> {
        let (result, deferred, handler) = {
            let mut config = self.config.lock();
            let result = option.apply(&mut config);
            (
                result,
                config.take_deferred_errors(),
                config.error_handler.clone(),
            )
        };

        for err in deferred {
            self.report(handler.as_ref(), err);
        }
        result
    }

    // Only custom options can fail to apply; these never do.

    pub fn set_level(&self, level: Level) {
        let _ = self.set_option(with_level(level));
    }

    pub fn set_output<W: Write + Send + 'static>(&self, output: W) {
        let _ = self.set_option(with_output(output));
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        let _ = self.set_option(with_formatter(formatter));
    }

    /// Current threshold
    pub fn level(&self) -> Level {
        self.config.lock().level
    }

    /// Returns true when a call at `level` would currently be written.
    pub fn enabled(&self, level: Level) -> bool {
        self.level().admits(level)
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use logga::{with_level, with_output, Level, Logger};
    ///
    /// let logger = Logger::new([with_level(Level::Info), with_output(std::io::sink())]);
    /// logger.debugf(format_args!("hidden"));
    /// logger.infof(format_args!("shown"));
    ///
    /// assert_eq!(logger.metrics().filtered_count(), 1);
    /// assert_eq!(logger.metrics().written_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log an already rendered message at `level`.
    ///
    /// Unlike [`fatalf`](Logger::fatalf), logging at [`Level::Fatal`] here
    /// never invokes the exit handler.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.dispatch(level, || message.into());
    }

    /// Log formatted arguments at `level`. The arguments are only rendered
    /// when the threshold admits `level`.
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.dispatch(level, || fmt::format(args));
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[inline]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warning, args);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Log at [`Level::Fatal`], then call the exit handler with status 1.
    ///
    /// The threshold decides whether the record is written; the exit
    /// handler runs exactly once either way, also when formatting or the
    /// sink failed. With the default handler this call does not return.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fatal, args);

        let exit = Arc::clone(&self.config.lock().exit_handler);
        exit(FATAL_EXIT_CODE);
    }

    fn dispatch<F>(&self, level: Level, message: F)
    where
        F: FnOnce() -> String,
    {
        // Render outside the lock; a Display impl may log through us.
        if !self.config.lock().level.admits(level) {
            self.metrics.record_filtered();
            return;
        }
        let message = message();

        let failure = {
            let mut guard = self.config.lock();
            let config = &mut *guard;
            if !config.level.admits(level) {
                self.metrics.record_filtered();
                return;
            }

            let now = (config.clock)();
            let record = LogRecord::at(level, message, &now, &config.time_format);
            let result = config
                .formatter
                .format(&record, &mut config.output)
                .and_then(|()| {
                    config
                        .output
                        .flush()
                        .map_err(|e| LoggerError::io_operation("flushing log output", e))
                });

            match result {
                Ok(()) => {
                    self.metrics.record_written();
                    None
                }
                Err(err) => Some((err, config.error_handler.clone())),
            }
        };

        if let Some((err, handler)) = failure {
            self.report(handler.as_ref(), err);
        }
    }

    /// Route a swallowed error to the side channel. Runs without the lock.
    fn report(&self, handler: Option<&ErrorHandler>, err: LoggerError) {
        self.metrics.record_error();
        if let Some(handler) = handler {
            handler(&err);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Vec::<LogOption>::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.config.lock())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Each call records one option; [`build`](LoggerBuilder::build) applies
/// them in the order they were given.
///
/// # Example
/// ```
/// use logga::prelude::*;
/// use logga::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(Level::Info)
///     .formatter(JsonFormatter::new())
///     .output(sink.clone())
///     .build();
///
/// logger.infof(format_args!("started"));
/// assert!(sink.contents().contains(r#""message":"started""#));
/// ```
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    options: Vec<LogOption>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(self, level: Level) -> Self {
        self.option(with_level(level))
    }

    #[must_use = "builder methods return a new value"]
    pub fn message_template(self, template: impl Into<String>) -> Self {
        self.option(with_message_template(template))
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(self, formatter: F) -> Self {
        self.option(with_formatter(formatter))
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(self, output: W) -> Self {
        self.option(with_output(output))
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(self, format: TimestampFormat) -> Self {
        self.option(with_time_format(format))
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(self, clock: Clock) -> Self {
        self.option(with_clock(clock))
    }

    /// Set a callback for errors that log calls swallow
    #[must_use = "builder methods return a new value"]
    pub fn on_error<F>(self, handler: F) -> Self
    where
        F: Fn(&LoggerError) + Send + Sync + 'static,
    {
        self.option(with_error_handler(handler))
    }

    /// Replace the process exit performed by `fatalf`
    #[must_use = "builder methods return a new value"]
    pub fn on_exit<F>(self, handler: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.option(with_exit_handler(handler))
    }

    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LogOption) -> Self {
        self.options.push(option);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger::new(self.options)
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
