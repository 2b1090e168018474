//! Internal buffer management for streaming reads.
//!
//! This module provides a thread-local pool of read buffers so that hashing
//! many readers in a row does not allocate a fresh buffer per call. It is an
//! implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
