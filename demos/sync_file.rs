//! Hash a file with several algorithms.
//!
//! Run with:
//!     cargo run --example sync_file -- <path> [algorithm...]
//!
//! Algorithms are looked up by name, e.g. `crc-32`, `crc-32c`, `fnv1a-64`,
//! `blake3`. Defaults to `crc-32`.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use hashrs::{HashFunction, by_name};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: sync_file <path> [algorithm...]");
        std::process::exit(2);
    };

    let mut algorithms: Vec<String> = args.collect();
    if algorithms.is_empty() {
        algorithms.push("crc-32".to_string());
    }

    for name in &algorithms {
        let function = by_name(name)?;
        let file = BufReader::new(File::open(&path)?);

        let start = Instant::now();
        let value = function.compute_hash_reader(file)?;
        let elapsed = start.elapsed();

        println!("{:<16} {}  ({:.2?})", name, value, elapsed);
    }

    Ok(())
}
