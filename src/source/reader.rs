//! Synchronous sources - readers and in-memory fragments.

use std::io::{ErrorKind, Read};

use crate::buffer::Buffer;
use crate::error::HashError;
use crate::source::CancellationToken;
use crate::transform::HashTransformer;

/// Feeds everything `reader` yields into `transformer`.
///
/// Reads go through a pooled 64 KiB buffer. `Interrupted` reads are retried;
/// any other I/O error aborts and is returned unchanged. The token, when
/// given, is checked before every read.
pub(crate) fn drive_reader<R: Read>(
    transformer: &mut dyn HashTransformer,
    mut reader: R,
    cancel: Option<&CancellationToken>,
) -> Result<(), HashError> {
    let mut buffer = Buffer::take();

    loop {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            log::debug!(
                "hash cancelled after {} bytes",
                transformer.consumed()
            );
            return Err(HashError::Cancelled);
        }

        match reader.read(buffer.as_mut_slice()) {
            Ok(0) => return Ok(()),
            Ok(n) => transformer.consume(buffer.filled(n))?,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                log::debug!(
                    "data source failed after {} bytes: {}",
                    transformer.consumed(),
                    e
                );
                return Err(HashError::Io(e));
            }
        }
    }
}

/// Feeds in-memory fragments into `transformer`, in iteration order.
pub(crate) fn drive_chunks<I>(
    transformer: &mut dyn HashTransformer,
    chunks: I,
) -> Result<(), HashError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    for chunk in chunks {
        transformer.consume(chunk.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    use crate::algorithms::JenkinsOneAtATime;
    use crate::function::HashFunction;

    /// Yields at most `step` bytes per read, interrupting every other call.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(ErrorKind::Interrupted, "again"));
            }
            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_reader_matches_buffer() {
        let data: Vec<u8> = (0..200_000).map(|i| (i % 251) as u8).collect();
        let hash = JenkinsOneAtATime::new();

        let mut transformer = hash.create_transformer().unwrap();
        drive_reader(transformer.as_mut(), Cursor::new(&data), None).unwrap();

        assert_eq!(
            transformer.finalize().unwrap(),
            hash.compute_hash(&data).unwrap()
        );
    }

    #[test]
    fn test_interrupted_reads_are_retried() {
        let data = b"interrupted but complete".to_vec();
        let hash = JenkinsOneAtATime::new();
        let reader = Trickle {
            data: data.clone(),
            pos: 0,
            step: 3,
            interrupt: false,
        };

        let mut transformer = hash.create_transformer().unwrap();
        drive_reader(transformer.as_mut(), reader, None).unwrap();
        assert_eq!(
            transformer.finalize().unwrap(),
            hash.compute_hash(&data).unwrap()
        );
    }

    #[test]
    fn test_cancelled_before_first_read() {
        let token = CancellationToken::new();
        token.cancel();

        let mut transformer = JenkinsOneAtATime::new().create_transformer().unwrap();
        let result = drive_reader(transformer.as_mut(), Cursor::new(b"data"), Some(&token));
        assert!(matches!(result, Err(HashError::Cancelled)));
        assert_eq!(transformer.consumed(), 0);
    }

    #[test]
    fn test_drive_chunks() {
        let hash = JenkinsOneAtATime::new();
        let mut transformer = hash.create_transformer().unwrap();
        drive_chunks(transformer.as_mut(), [&b"foo"[..], &b""[..], &b"bar"[..]]).unwrap();
        assert_eq!(transformer.finalize().unwrap().to_u64(), Some(0xf952_fde7));
    }
}
