//! Hashing a stream of byte chunks.
//!
//! Network clients usually hand out bodies as a stream of `Bytes`; the
//! stream is hashed as it arrives, without collecting it first.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io

use std::io;

use bytes::Bytes;
use futures_util::stream::{self, StreamExt};
use hashrs::{Fnv1a, FnvConfig, HashFunction};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some test data
    let data: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();

    println!("Async hashing {} bytes of data...\n", data.len());

    let fnv = Fnv1a::new(FnvConfig::new(64)?)?;

    // Simulate async data arriving in batches
    let batches: Vec<Bytes> = data.chunks(8192).map(Bytes::copy_from_slice).collect();
    let body = stream::iter(batches).then(|batch| async move {
        tokio::task::yield_now().await;
        println!("Async received batch: {} bytes", batch.len());
        Ok::<_, io::Error>(batch)
    });

    let value = fnv.compute_hash_stream(Box::pin(body)).await?;

    println!("\nfnv1a-64 (stream): {}", value);
    println!("fnv1a-64 (buffer): {}", fnv.compute_hash(&data)?);

    Ok(())
}
