//! Structured output example
//!
//! Switches a running logger from text to JSON output.
//!
//! Run with: cargo run --example json_output

use logga::core::stderr_error_handler;
use logga::prelude::*;
use logga::{errorf, infof};

fn main() -> Result<()> {
    let logger = Logger::builder()
        .level(Level::Info)
        .time_format(TimestampFormat::Iso8601)
        .output(Console::Stdout)
        .option(LogOption::ErrorHandler(Some(stderr_error_handler())))
        .build();

    infof!(logger, "starting with the text formatter");

    logger.set_option(with_formatter(JsonFormatter::new()))?;
    infof!(logger, "now emitting JSON lines");
    errorf!(logger, "request {} failed: {}", 17, "timeout");

    println!("\nrecords written: {}", logger.metrics().written_count());
    Ok(())
}
