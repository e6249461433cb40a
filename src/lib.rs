//! # Logga
//!
//! A minimal, embeddable leveled logger.
//!
//! ## Features
//!
//! - **Level Filtering**: seven ordered levels with `All` and `Off` sentinels
//! - **Pluggable Formatters**: template-driven text or JSON, or your own
//! - **Option-Based Configuration**: defaults plus ordered options, reapplicable at runtime
//! - **Thread Safe**: reconfiguration is atomic with respect to log calls
//! - **Never Fails the Caller**: swallowed errors go to metrics and an optional handler
//!
//! ## Example
//!
//! ```
//! use logga::prelude::*;
//! use logga::sinks::MemorySink;
//! use logga::warningf;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new([
//!     with_level(Level::Warning),
//!     with_message_template("{{.Level}}: {{.Message}}\n"),
//!     with_output(sink.clone()),
//! ]);
//!
//! warningf!(logger, "disk {}% full", 91);
//! assert_eq!(sink.contents(), "WARNING: disk 91% full\n");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        with_clock, with_error_handler, with_exit_handler, with_formatter, with_level,
        with_message_template, with_output, with_time_format, Formatter, Level, LogOption,
        LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
    pub use crate::sinks::{Console, FileSink};
}

pub use crate::core::{
    fixed_clock, system_clock, with_clock, with_error_handler, with_exit_handler, with_formatter,
    with_level, with_message_template, with_output, with_shared_formatter, with_time_format,
    Clock, ErrorHandler, ExitHandler, Formatter, Level, LogOption, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
};
pub use formatters::{JsonFormatter, TextFormatter};
