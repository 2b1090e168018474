//! Future that hashes a stream of byte chunks.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use pin_project_lite::pin_project;

use crate::error::HashError;
use crate::source::CancellationToken;
use crate::transform::HashTransformer;
use crate::value::HashValue;

pin_project! {
    /// Hashes the concatenation of the chunks a stream yields.
    ///
    /// Created by [`HashFunction::compute_hash_stream`](crate::HashFunction::compute_hash_stream).
    /// The first `Err` item aborts the computation. A cancelled token is
    /// noticed before the next item is requested.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use bytes::Bytes;
    /// use futures_util::stream;
    /// use hashrs::{Crc, HashFunction};
    ///
    /// let chunks = stream::iter(vec![
    ///     Ok::<_, std::io::Error>(Bytes::from_static(b"1234")),
    ///     Ok(Bytes::from_static(b"56789")),
    /// ]);
    /// let value = Crc::default().compute_hash_stream(chunks).await?;
    /// assert_eq!(value.to_u64(), Some(0xCBF4_3926));
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct HashStreamFuture<S> {
        #[pin]
        stream: S,
        state: Option<Result<Box<dyn HashTransformer>, HashError>>,
        cancel: Option<CancellationToken>,
    }
}

impl<S> HashStreamFuture<S> {
    pub(crate) fn new(
        stream: S,
        transformer: Result<Box<dyn HashTransformer>, HashError>,
        cancel: Option<CancellationToken>,
    ) -> Self {
        Self {
            stream,
            state: Some(transformer),
            cancel,
        }
    }
}

impl<S, B> Future for HashStreamFuture<S>
where
    S: Stream<Item = io::Result<B>>,
    B: AsRef<[u8]>,
{
    type Output = Result<HashValue, HashError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let mut transformer = match this.state.take() {
            Some(Ok(transformer)) => transformer,
            Some(Err(e)) => return Poll::Ready(Err(e)),
            None => return Poll::Ready(Err(HashError::AlreadyFinalized)),
        };

        loop {
            if this.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
                log::debug!("stream hash cancelled after {} bytes", transformer.consumed());
                return Poll::Ready(Err(HashError::Cancelled));
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Pending => {
                    *this.state = Some(Ok(transformer));
                    return Poll::Pending;
                }
                Poll::Ready(None) => return Poll::Ready(transformer.finalize()),
                Poll::Ready(Some(Ok(chunk))) => {
                    if let Err(e) = transformer.consume(chunk.as_ref()) {
                        return Poll::Ready(Err(e));
                    }
                }
                Poll::Ready(Some(Err(e))) => {
                    log::debug!(
                        "stream source failed after {} bytes: {}",
                        transformer.consumed(),
                        e
                    );
                    return Poll::Ready(Err(HashError::Io(e)));
                }
            }
        }
    }
}
