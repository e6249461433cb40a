//! Basic logger usage example
//!
//! Demonstrates level filtering with a custom message template on stdout.
//!
//! Run with: cargo run --example basic_usage

use logga::prelude::*;
use logga::{debugf, errorf, fatalf, infof, warningf};

fn main() {
    println!("=== Logga - Basic Usage Example ===\n");

    let logger = Logger::new([
        with_level(Level::Error),
        with_message_template("{{.Level}} - {{.Time}} -  {{.Message}}\n"),
        with_output(Console::Stdout),
    ]);

    println!("1. Threshold ERROR, only error and fatal show:");
    debugf!(logger, "Debug message: {}", 1);
    infof!(logger, "Info message: {}", 2);
    warningf!(logger, "Warning message: {}", 3);
    errorf!(logger, "Error message: {}", 4);

    println!("\n2. Lowering the threshold at runtime:");
    logger.set_level(Level::Debug);
    debugf!(logger, "Debug message: {}", 1);
    warningf!(logger, "Warning message: {}", 3);

    println!("\n3. Fatal exits the process with status 1:");
    fatalf!(logger, "Fatal message: {}", 5);
}
