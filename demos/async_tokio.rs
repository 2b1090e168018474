//! Async hashing of tokio readers.
//!
//! tokio readers are adapted to `futures_io::AsyncRead` with
//! `tokio_util::compat`. Several streams are hashed concurrently; one of
//! them is cancelled half way.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io

use hashrs::{CancellationToken, Crc, CrcStandard, HashError, HashFunction};
use tokio::io::AsyncWriteExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let crc = Crc::standard(CrcStandard::Crc32Iscsi);
    let token = CancellationToken::new();

    println!("Hashing 3 streams concurrently...\n");

    let mut handles = Vec::new();
    for stream_id in 0..3usize {
        let (reader, mut writer) = tokio::io::duplex(4096);
        let crc = crc.clone();
        let producer_token = token.clone();

        // Producer: writes 64 KiB in small pieces, cancelling stream 2 half way
        tokio::spawn(async move {
            for i in 0..64usize {
                let piece = vec![(stream_id * 64 + i) as u8; 1024];
                if writer.write_all(&piece).await.is_err() {
                    break;
                }
                if stream_id == 2 && i == 32 {
                    producer_token.cancel();
                }
                tokio::task::yield_now().await;
            }
        });

        let future = if stream_id == 2 {
            crc.compute_hash_async_with(reader.compat(), token.clone())
        } else {
            crc.compute_hash_async(reader.compat())
        };
        handles.push((stream_id, tokio::spawn(future)));
    }

    for (stream_id, handle) in handles {
        match handle.await? {
            Ok(value) => println!("Stream {}: crc-32c {}", stream_id, value),
            Err(HashError::Cancelled) => println!("Stream {}: cancelled", stream_id),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
