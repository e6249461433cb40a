//! File logging example
//!
//! Demonstrates writing records to a file sink.
//!
//! Run with: cargo run --example file_output

use logga::prelude::*;
use logga::{infof, warningf};

fn main() -> Result<()> {
    let path = std::env::temp_dir().join("logga_example.log");
    println!("=== Logga - File Output Example ===");
    println!("Writing to {}\n", path.display());

    let logger = Logger::new([
        with_level(Level::Info),
        with_output(FileSink::open(&path)?),
    ]);

    for i in 0..5 {
        infof!(logger, "Processing item {}", i);
    }
    warningf!(logger, "Queue depth {} above soft limit", 120);

    print!("{}", std::fs::read_to_string(&path)?);
    Ok(())
}
