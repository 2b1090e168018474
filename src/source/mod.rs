//! Data source adapters.
//!
//! Sources normalize an input (a reader, an iterator of fragments) into a
//! sequence of chunks fed to a [`HashTransformer`](crate::HashTransformer)
//! in order, without gaps or overlaps.
//!
//! - [`CancellationToken`] - Cooperative cancellation checked between chunks

mod cancel;
mod reader;

pub use cancel::CancellationToken;

pub(crate) use reader::{drive_chunks, drive_reader};
