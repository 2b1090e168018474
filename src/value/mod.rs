//! Hash result types.
//!
//! - [`HashValue`] - Immutable hash bytes plus their logical bit length

mod hash_value;

pub use hash_value::HashValue;
