//! hashrs
//!
//! Streaming hash functions behind one incremental interface.
//!
//! Every algorithm in `hashrs` is driven by the same engine: a stateful
//! transformer that accepts bytes in any fragment size and produces a
//! [`HashValue`] once input ends. The result never depends on how the input
//! was split. Included algorithms:
//!
//! - a generalized CRC engine for any width from 1 to 64 bits, with a
//!   catalogue of named standards
//! - Jenkins one-at-a-time
//! - Bernstein and modified Bernstein
//! - FNV-1 and FNV-1a (32 and 64 bits)
//! - BLAKE3 (feature `hash-blake3`, on by default)
//!
//! The crate intentionally:
//! - does NOT open files or manage paths
//! - does NOT spawn threads or tasks
//! - does NOT keep mutable global state
//!
//! It only does one thing: **Bytes in → hash value out**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use hashrs::{Crc, CrcStandard, HashError, HashFunction};
//!
//! fn main() -> Result<(), HashError> {
//!     let file = File::open("data.bin")?;
//!     let crc = Crc::standard(CrcStandard::Crc32Iscsi);
//!
//!     let value = crc.compute_hash_reader(file)?;
//!     println!("crc32c {}", value);
//!     Ok(())
//! }
//! ```
//!
//! # Incremental
//!
//! ```
//! use hashrs::{Fnv1a, HashFunction};
//!
//! let mut transformer = Fnv1a::default().create_transformer()?;
//! transformer.consume(b"foo")?;
//!
//! // Fork the computation at the current position
//! let mut fork = transformer.duplicate();
//! transformer.consume(b"bar")?;
//! fork.consume(b"baz")?;
//!
//! assert_eq!(transformer.finalize()?.to_u64(), Some(0xbf9c_f968));
//! assert_ne!(fork.finalize()?, Fnv1a::default().compute_hash(b"foobar")?);
//! # Ok::<(), hashrs::HashError>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_io::AsyncRead;
//! use hashrs::{Crc, HashFunction};
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), hashrs::HashError> {
//!     let value = Crc::default().compute_hash_async(reader).await?;
//!     println!("crc32 {}", value);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod algorithms;
mod config;
mod crc;
mod error;
mod function;
mod source;
mod transform;
mod value;

mod buffer; // internal (thread-local reuse)
mod util; // internal bit helpers

#[cfg(feature = "async-io")]
mod async_source;

//
// Public surface
//

#[cfg(feature = "hash-blake3")]
pub use algorithms::Blake3;
pub use algorithms::{BernsteinHash, Fnv1, Fnv1a, JenkinsOneAtATime, ModifiedBernsteinHash, by_name};
#[cfg(feature = "hash-blake3")]
pub use config::{Blake3Config, MAX_BLAKE3_BITS, MIN_BLAKE3_BITS};
pub use config::{CrcConfig, FnvConfig, MAX_CRC_BITS, MIN_CRC_BITS};
pub use crc::{Crc, CrcMixer, CrcStandard, CrcTable};
pub use error::{ErrorKind, HashError};
pub use function::HashFunction;
pub use source::CancellationToken;
pub use transform::{BlockMixer, BlockTransformer, HashTransformer};
pub use value::HashValue;

#[cfg(feature = "async-io")]
pub use async_source::{HashReaderFuture, HashStreamFuture};
