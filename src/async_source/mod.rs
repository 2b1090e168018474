//! Async data sources (requires the `async-io` feature).
//!
//! - [`HashReaderFuture`] - Hashes a `futures_io::AsyncRead` to the end
//! - [`HashStreamFuture`] - Hashes a `futures_core::Stream` of byte chunks
//!
//! Both are runtime-agnostic. The only suspension point is the wait for the
//! next chunk; consuming a chunk never suspends.

mod reader;
mod stream;

pub use reader::HashReaderFuture;
pub use stream::HashStreamFuture;
