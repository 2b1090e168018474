//! Reference hash functions built on the block transformer.
//!
//! - [`JenkinsOneAtATime`] - Jenkins one-at-a-time, 32 bits
//! - [`BernsteinHash`] / [`ModifiedBernsteinHash`] - djb2 variants, 32 bits
//! - [`Fnv1`] / [`Fnv1a`] - Fowler-Noll-Vo, 32 or 64 bits
//! - [`Blake3`] - BLAKE3 via the `blake3` crate (`hash-blake3` feature)
//!
//! [`by_name`] resolves any of these, or any catalogued CRC standard, from a
//! string identifier.

mod bernstein;
#[cfg(feature = "hash-blake3")]
mod blake3;
mod fnv;
mod jenkins;

pub use bernstein::{BernsteinHash, ModifiedBernsteinHash};
#[cfg(feature = "hash-blake3")]
pub use self::blake3::Blake3;
pub use fnv::{Fnv1, Fnv1a};
pub use jenkins::JenkinsOneAtATime;

use crate::config::FnvConfig;
use crate::crc::{Crc, CrcStandard};
use crate::error::HashError;
use crate::function::HashFunction;

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase().replace('_', "-")
}

/// Looks a hash function up by identifier.
///
/// Identifiers ignore case and surrounding whitespace. Supported ids:
/// `"jenkins-oaat"`, `"bernstein"`, `"modified-bernstein"`, `"fnv1-32"`,
/// `"fnv1-64"`, `"fnv1a-32"`, `"fnv1a-64"`, `"blake3"` (with `hash-blake3`),
/// and every CRC standard name or alias (`"crc-32"`, `"CRC-16/XMODEM"`...).
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] if nothing matches.
///
/// # Example
///
/// ```
/// use hashrs::{by_name, HashFunction};
///
/// let crc = by_name("CRC-32")?;
/// assert_eq!(crc.compute_hash(b"123456789")?.to_u64(), Some(0xCBF4_3926));
/// # Ok::<(), hashrs::HashError>(())
/// ```
pub fn by_name(id: &str) -> Result<Box<dyn HashFunction>, HashError> {
    let function: Box<dyn HashFunction> = match normalize(id).as_str() {
        "jenkins-oaat" | "jenkins-one-at-a-time" => Box::new(JenkinsOneAtATime::new()),
        "bernstein" | "djb2" => Box::new(BernsteinHash::new()),
        "modified-bernstein" => Box::new(ModifiedBernsteinHash::new()),
        "fnv1-32" => Box::new(Fnv1::new(FnvConfig::new(32)?)?),
        "fnv1-64" => Box::new(Fnv1::new(FnvConfig::new(64)?)?),
        "fnv1a-32" => Box::new(Fnv1a::new(FnvConfig::new(32)?)?),
        "fnv1a-64" => Box::new(Fnv1a::new(FnvConfig::new(64)?)?),
        #[cfg(feature = "hash-blake3")]
        "blake3" => Box::new(Blake3::default()),
        other => match CrcStandard::from_name(other) {
            Some(standard) => Box::new(Crc::standard(standard)),
            None => return Err(HashError::UnknownAlgorithm(id.to_string())),
        },
    };
    Ok(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        for id in ["jenkins-oaat", "bernstein", "modified-bernstein", "fnv1-32", "fnv1a-64"] {
            assert!(by_name(id).is_ok(), "{id}");
        }
        assert_eq!(by_name(" FNV1A-64 ").unwrap().hash_size_bits(), 64);
    }

    #[test]
    fn test_crc_names_resolve() {
        let crc = by_name("crc-16/ccitt-false").unwrap();
        assert_eq!(crc.hash_size_bits(), 16);
        assert_eq!(crc.compute_hash(b"123456789").unwrap().to_u64(), Some(0x29B1));
    }

    #[cfg(feature = "hash-blake3")]
    #[test]
    fn test_blake3_id() {
        assert_eq!(by_name("BLAKE3").unwrap().hash_size_bits(), 256);
    }

    #[test]
    fn test_unknown_id() {
        assert!(matches!(
            by_name("md5"),
            Err(HashError::UnknownAlgorithm(id)) if id == "md5"
        ));
    }
}
