//! Incremental hashing engine.
//!
//! - [`BlockMixer`] - Algorithm plugin contract (group size, mix, finalize)
//! - [`BlockTransformer`] - Stateful engine with `consume()`/`finalize()` API
//! - [`HashTransformer`] - Object-safe view shared by every backend

mod block;

pub use block::{BlockMixer, BlockTransformer};

use crate::error::HashError;
use crate::value::HashValue;

/// One in-flight hash computation.
///
/// Every hash function hands out a fresh transformer per computation. Block
/// based algorithms use [`BlockTransformer`]; opaque backends (BLAKE3)
/// implement this trait directly so callers cannot tell them apart.
///
/// `consume` and `finalize` never block or suspend.
pub trait HashTransformer: Send {
    /// Appends `data` logically after all previously consumed bytes.
    fn consume(&mut self, data: &[u8]) -> Result<(), HashError>;

    /// Produces the hash value. Only the first call succeeds.
    fn finalize(&mut self) -> Result<HashValue, HashError>;

    /// Returns an independent copy of the current state.
    fn duplicate(&self) -> Box<dyn HashTransformer>;

    /// Returns the total number of bytes consumed so far.
    fn consumed(&self) -> u64;
}
