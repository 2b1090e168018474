//! Future that hashes an async reader.

use std::future::Future;
use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::buffer::Buffer;
use crate::error::HashError;
use crate::source::CancellationToken;
use crate::transform::HashTransformer;
use crate::value::HashValue;

pin_project! {
    /// Hashes everything an async reader yields.
    ///
    /// Created by [`HashFunction::compute_hash_async`](crate::HashFunction::compute_hash_async).
    /// Resolves to the hash value at end of input. An I/O error or a
    /// cancelled token resolves to an error and drops the partial state.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use futures_io::AsyncRead;
    /// use hashrs::{Crc, HashFunction};
    ///
    /// async fn demo<R: AsyncRead>(reader: R) -> Result<(), hashrs::HashError> {
    ///     let value = Crc::default().compute_hash_async(reader).await?;
    ///     println!("crc32: {}", value);
    ///     Ok(())
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct HashReaderFuture<R> {
        #[pin]
        reader: R,
        state: Option<Result<Box<dyn HashTransformer>, HashError>>,
        buffer: Buffer,
        cancel: Option<CancellationToken>,
    }
}

impl<R> HashReaderFuture<R> {
    pub(crate) fn new(
        reader: R,
        transformer: Result<Box<dyn HashTransformer>, HashError>,
        cancel: Option<CancellationToken>,
    ) -> Self {
        Self {
            reader,
            state: Some(transformer),
            buffer: Buffer::take(),
            cancel,
        }
    }
}

impl<R: AsyncRead> Future for HashReaderFuture<R> {
    type Output = Result<HashValue, HashError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let mut transformer = match this.state.take() {
            Some(Ok(transformer)) => transformer,
            Some(Err(e)) => return Poll::Ready(Err(e)),
            // Polled after completion
            None => return Poll::Ready(Err(HashError::AlreadyFinalized)),
        };

        loop {
            if this.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
                log::debug!("async hash cancelled after {} bytes", transformer.consumed());
                return Poll::Ready(Err(HashError::Cancelled));
            }

            match this.reader.as_mut().poll_read(cx, this.buffer.as_mut_slice()) {
                Poll::Pending => {
                    *this.state = Some(Ok(transformer));
                    return Poll::Pending;
                }
                Poll::Ready(Ok(0)) => return Poll::Ready(transformer.finalize()),
                Poll::Ready(Ok(n)) => {
                    if let Err(e) = transformer.consume(this.buffer.filled(n)) {
                        return Poll::Ready(Err(e));
                    }
                }
                Poll::Ready(Err(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    log::debug!(
                        "async data source failed after {} bytes: {}",
                        transformer.consumed(),
                        e
                    );
                    return Poll::Ready(Err(HashError::Io(e)));
                }
            }
        }
    }
}
