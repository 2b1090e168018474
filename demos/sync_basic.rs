//! Basic synchronous hashing example with the incremental API.
//!
//! Run with:
//!     cargo run --example sync_basic

use hashrs::{Crc, CrcStandard, Fnv1a, HashFunction, JenkinsOneAtATime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some sample data
    let data: Vec<u8> = (0..1024 * 1024).map(|i| (i % 251) as u8).collect();

    println!("Hashing {} bytes of data...\n", data.len());

    // One-shot hashing
    let crc = Crc::standard(CrcStandard::Crc32IsoHdlc);
    println!("crc-32 (one shot):   {}", crc.compute_hash(&data)?);

    // Simulate streaming data in batches
    let mut transformer = crc.create_transformer()?;
    let batch_size = 8 * 1024; // 8 KB batches
    for batch in data.chunks(batch_size) {
        transformer.consume(batch)?;
    }
    println!(
        "crc-32 (streamed):   {} after {} bytes",
        transformer.finalize()?,
        data.len()
    );

    // Other algorithms share the same interface
    let functions: Vec<(&str, Box<dyn HashFunction>)> = vec![
        ("jenkins-oaat", Box::new(JenkinsOneAtATime::new())),
        ("fnv1a-32", Box::new(Fnv1a::default())),
        ("crc-16/xmodem", Box::new(Crc::from_name("CRC-16/XMODEM")?)),
    ];

    for (name, function) in &functions {
        let value = function.compute_hash(&data)?;
        println!("{:<20} {} ({} bits)", name, value, value.bit_length());
    }

    // Catalogue check values
    println!("\nCatalogue sample:");
    for standard in CrcStandard::ALL.iter().step_by(10) {
        println!(
            "  {:<28} check={:#x}",
            standard.name(),
            Crc::standard(*standard).checksum(b"123456789")
        );
    }

    Ok(())
}
