//! The hash function façade.
//!
//! A [`HashFunction`] is an immutable, shareable description of an algorithm
//! and its parameters. Every computation gets a fresh transformer from
//! [`HashFunction::create_transformer`]; the provided `compute_*` methods drive
//! that transformer over the different kinds of data source.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use hashrs::{Crc, HashFunction};
//!
//! let crc = Crc::default();
//!
//! let whole = crc.compute_hash(b"hello world")?;
//! let chunks = crc.compute_hash_chunks([&b"hello "[..], &b"world"[..]])?;
//! let reader = crc.compute_hash_reader(Cursor::new(b"hello world"))?;
//!
//! assert_eq!(whole, chunks);
//! assert_eq!(whole, reader);
//! # Ok::<(), hashrs::HashError>(())
//! ```

use std::io::Read;
use std::sync::Arc;

use crate::error::HashError;
use crate::source::{CancellationToken, drive_chunks, drive_reader};
use crate::transform::HashTransformer;
use crate::value::HashValue;

#[cfg(feature = "async-io")]
use crate::async_source::{HashReaderFuture, HashStreamFuture};

/// A configured hash algorithm.
///
/// Implementors only provide the output size and a transformer factory.
/// A function never holds per-computation state, so one instance can serve
/// any number of concurrent computations.
pub trait HashFunction: Send + Sync {
    /// Size of the produced hash values in bits.
    fn hash_size_bits(&self) -> usize;

    /// Starts a new computation.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bound parameters are inconsistent.
    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError>;

    /// Hashes an in-memory buffer.
    fn compute_hash(&self, data: &[u8]) -> Result<HashValue, HashError> {
        let mut transformer = self.create_transformer()?;
        transformer.consume(data)?;
        transformer.finalize()
    }

    /// Hashes the concatenation of `chunks`.
    fn compute_hash_chunks<I>(&self, chunks: I) -> Result<HashValue, HashError>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut transformer = self.create_transformer()?;
        drive_chunks(transformer.as_mut(), chunks)?;
        transformer.finalize()
    }

    /// Hashes everything `reader` yields until end of input.
    ///
    /// # Errors
    ///
    /// Any I/O error other than `Interrupted` aborts the computation and is
    /// returned as [`HashError::Io`].
    fn compute_hash_reader<R: Read>(&self, reader: R) -> Result<HashValue, HashError>
    where
        Self: Sized,
    {
        let mut transformer = self.create_transformer()?;
        drive_reader(transformer.as_mut(), reader, None)?;
        transformer.finalize()
    }

    /// Like [`compute_hash_reader`](Self::compute_hash_reader), checking
    /// `cancel` before every read.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Cancelled`] once the token is cancelled.
    fn compute_hash_reader_with<R: Read>(
        &self,
        reader: R,
        cancel: &CancellationToken,
    ) -> Result<HashValue, HashError>
    where
        Self: Sized,
    {
        let mut transformer = self.create_transformer()?;
        drive_reader(transformer.as_mut(), reader, Some(cancel))?;
        transformer.finalize()
    }

    /// Hashes an async reader.
    ///
    /// Works with any `futures_io::AsyncRead`; tokio readers can be adapted
    /// with `tokio_util::compat`.
    ///
    /// ```ignore
    /// use tokio_util::compat::TokioAsyncReadCompatExt;
    /// use hashrs::{Crc, HashFunction};
    ///
    /// let file = tokio::fs::File::open("data.bin").await?;
    /// let value = Crc::default().compute_hash_async(file.compat()).await?;
    /// ```
    #[cfg(feature = "async-io")]
    fn compute_hash_async<R>(&self, reader: R) -> HashReaderFuture<R>
    where
        Self: Sized,
        R: futures_io::AsyncRead,
    {
        HashReaderFuture::new(reader, self.create_transformer(), None)
    }

    /// Hashes an async reader, checking `cancel` before every read.
    ///
    /// The token is only checked when the future is polled, so cancellation
    /// takes effect at the next chunk boundary. A reader stalled in `Pending`
    /// keeps the future pending until it wakes it.
    #[cfg(feature = "async-io")]
    fn compute_hash_async_with<R>(
        &self,
        reader: R,
        cancel: CancellationToken,
    ) -> HashReaderFuture<R>
    where
        Self: Sized,
        R: futures_io::AsyncRead,
    {
        HashReaderFuture::new(reader, self.create_transformer(), Some(cancel))
    }

    /// Hashes the chunks of a fallible byte stream.
    #[cfg(feature = "async-io")]
    fn compute_hash_stream<S, B>(&self, stream: S) -> HashStreamFuture<S>
    where
        Self: Sized,
        S: futures_core::Stream<Item = std::io::Result<B>>,
        B: AsRef<[u8]>,
    {
        HashStreamFuture::new(stream, self.create_transformer(), None)
    }

    /// Hashes a byte stream, checking `cancel` before every item.
    ///
    /// As with [`compute_hash_async_with`](Self::compute_hash_async_with),
    /// cancellation takes effect at the next chunk boundary.
    #[cfg(feature = "async-io")]
    fn compute_hash_stream_with<S, B>(
        &self,
        stream: S,
        cancel: CancellationToken,
    ) -> HashStreamFuture<S>
    where
        Self: Sized,
        S: futures_core::Stream<Item = std::io::Result<B>>,
        B: AsRef<[u8]>,
    {
        HashStreamFuture::new(stream, self.create_transformer(), Some(cancel))
    }
}

impl<H: HashFunction + ?Sized> HashFunction for Box<H> {
    fn hash_size_bits(&self) -> usize {
        (**self).hash_size_bits()
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        (**self).create_transformer()
    }
}

impl<H: HashFunction + ?Sized> HashFunction for Arc<H> {
    fn hash_size_bits(&self) -> usize {
        (**self).hash_size_bits()
    }

    fn create_transformer(&self) -> Result<Box<dyn HashTransformer>, HashError> {
        (**self).create_transformer()
    }
}
