//! Logging macros for ergonomic log message formatting.
//!
//! These macros wrap the logger's `*f` methods in `format_args!`, so call
//! sites read like `println!`. Arguments are only rendered when the
//! logger's threshold admits the level.
//!
//! # Examples
//!
//! ```
//! use logga::prelude::*;
//! use logga::sinks::MemorySink;
//! use logga::{errorf, infof};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new([with_output(sink.clone())]);
//!
//! // Basic logging
//! infof!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! infof!(logger, "Server listening on port {}", port);
//! errorf!(logger, "User {} failed action: {}", 42, "login");
//!
//! assert_eq!(sink.lines().len(), 3);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logga::prelude::*;
/// # let logger = Logger::new([with_output(std::io::sink())]);
/// use logga::logf;
/// logf!(logger, Level::Info, "Simple message");
/// logf!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logga::prelude::*;
/// # let logger = Logger::new([with_output(std::io::sink())]);
/// use logga::debugf;
/// debugf!(logger, "Debug information");
/// debugf!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logga::prelude::*;
/// # let logger = Logger::new([with_output(std::io::sink())]);
/// use logga::warningf;
/// warningf!(logger, "Low disk space");
/// warningf!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then run the logger's exit handler.
///
/// With the default exit handler the process terminates with status 1.
///
/// # Examples
///
/// ```
/// # use logga::prelude::*;
/// # let logger = Logger::new([with_output(std::io::sink()), with_exit_handler(|_| {})]);
/// use logga::fatalf;
/// fatalf!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{
        with_exit_handler, with_level, with_message_template, with_output, Level, Logger,
    };
    use crate::sinks::MemorySink;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn logger(sink: &MemorySink) -> Logger {
        Logger::new([
            with_level(Level::All),
            with_message_template("{{.Level}} {{.Message}}\n"),
            with_output(sink.clone()),
        ])
    }

    #[test]
    fn test_logf_macro() {
        let sink = MemorySink::new();
        let logger = logger(&sink);
        logf!(logger, Level::Info, "Test message");
        logf!(logger, Level::Info, "Formatted: {}", 42);
        assert_eq!(sink.lines(), vec!["INFO Test message", "INFO Formatted: 42"]);
    }

    #[test]
    fn test_level_macros() {
        let sink = MemorySink::new();
        let logger = logger(&sink);
        debugf!(logger, "Count: {}", 5);
        infof!(logger, "Items: {}", 100);
        warningf!(logger, "Retry {} of {}", 1, 3);
        errorf!(logger, "Code: {}", 500);

        assert_eq!(
            sink.lines(),
            vec![
                "DEBUG Count: 5",
                "INFO Items: 100",
                "WARNING Retry 1 of 3",
                "ERROR Code: 500",
            ]
        );
    }

    #[test]
    fn test_fatal_macro() {
        let sink = MemorySink::new();
        let exited = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&exited);
        let logger = Logger::new([
            with_output(sink.clone()),
            with_exit_handler(move |_| flag.store(true, Ordering::SeqCst)),
        ]);

        fatalf!(logger, "Critical failure: {}", "system");
        assert!(exited.load(Ordering::SeqCst));
        assert!(sink.contents().contains("Critical failure: system"));
    }
}
