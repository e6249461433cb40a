//! Core logger types and traits

pub mod error;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod record;
pub mod template;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use options::{
    process_exit, stderr_error_handler, with_clock, with_error_handler, with_exit_handler,
    with_formatter, with_level, with_message_template, with_output, with_shared_formatter,
    with_time_format, ErrorHandler, ExitHandler, LogOption, LoggerConfig, FATAL_EXIT_CODE,
};
pub use record::LogRecord;
pub use template::Template;
pub use timestamp::{fixed_clock, system_clock, Clock, TimestampFormat};
