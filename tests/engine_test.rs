// Integration tests for the incremental hashing engine
// Tests cover: fragmentation invariance, duplication, misuse, data source failures

use std::io::{self, Cursor, Read};

use hashrs::{
    BernsteinHash, CancellationToken, Crc, CrcConfig, CrcStandard, ErrorKind, Fnv1a, FnvConfig,
    HashError, HashFunction, JenkinsOneAtATime, ModifiedBernsteinHash, by_name,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

/// Splits `data` into random fragments, empty ones included.
fn fragments(data: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut parts = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let len = rng.random_range(0..=rest.len().min(97));
        let (head, tail) = rest.split_at(len);
        parts.push(head);
        rest = tail;
    }
    parts
}

fn functions() -> Vec<Box<dyn HashFunction>> {
    let mut functions: Vec<Box<dyn HashFunction>> = vec![
        Box::new(JenkinsOneAtATime::new()),
        Box::new(BernsteinHash::new()),
        Box::new(ModifiedBernsteinHash::new()),
        Box::new(Fnv1a::new(FnvConfig::new(64).unwrap()).unwrap()),
    ];
    for bits in [1, 3, 8, 12, 16, 32, 64] {
        let polynomial = (0x1B & (u64::MAX >> (64 - bits))) | 1;
        for (reflect_in, reflect_out) in [(true, false), (false, false)] {
            let config = CrcConfig::new(bits, polynomial, 0, reflect_in, reflect_out, 0).unwrap();
            functions.push(Box::new(Crc::new(config).unwrap()));
        }
    }
    functions.push(by_name("crc-64/xz").unwrap());
    functions
}

// ============================================================================
// Fragmentation Invariance
// ============================================================================

#[test]
fn test_fragmentation_does_not_change_result() {
    let data = sample(4096, 1);

    for function in functions() {
        let expected = function.compute_hash(&data).unwrap();

        for seed in 0..8 {
            let value = function.compute_hash_chunks(fragments(&data, seed)).unwrap();
            assert_eq!(value, expected, "seed {seed}, {} bits", function.hash_size_bits());
        }

        let value = function.compute_hash_chunks(data.chunks(1)).unwrap();
        assert_eq!(value, expected, "byte at a time");
    }
}

#[test]
fn test_empty_input_is_finalize_only() {
    for function in functions() {
        let mut transformer = function.create_transformer().unwrap();
        let expected = transformer.finalize().unwrap();

        assert_eq!(function.compute_hash(b"").unwrap(), expected);
        assert_eq!(
            function.compute_hash_chunks([&b""[..], &b""[..]]).unwrap(),
            expected
        );
        assert_eq!(expected.bit_length(), function.hash_size_bits());
    }
}

#[test]
fn test_sources_agree() {
    let data = sample(300_000, 2);
    let crc = Crc::standard(CrcStandard::Crc32Iscsi);

    let expected = crc.compute_hash(&data).unwrap();
    assert_eq!(crc.compute_hash_reader(Cursor::new(&data)).unwrap(), expected);
    assert_eq!(crc.compute_hash_chunks(data.chunks(4096)).unwrap(), expected);
}

// ============================================================================
// Duplication
// ============================================================================

#[test]
fn test_duplicate_forks_independent_computations() {
    let prefix = sample(1000, 3);
    let left = sample(500, 4);
    let right = sample(500, 5);

    for function in functions() {
        let mut transformer = function.create_transformer().unwrap();
        transformer.consume(&prefix).unwrap();
        let mut fork = transformer.duplicate();

        transformer.consume(&left).unwrap();
        fork.consume(&right).unwrap();

        let expected_left = function.compute_hash_chunks([&prefix, &left]).unwrap();
        let expected_right = function.compute_hash_chunks([&prefix, &right]).unwrap();

        assert_eq!(transformer.finalize().unwrap(), expected_left);
        assert_eq!(fork.finalize().unwrap(), expected_right);
    }
}

#[test]
fn test_duplicate_after_finalize_stays_finalized() {
    let mut transformer = JenkinsOneAtATime::new().create_transformer().unwrap();
    transformer.finalize().unwrap();

    let mut copy = transformer.duplicate();
    assert!(matches!(copy.finalize(), Err(HashError::AlreadyFinalized)));
}

// ============================================================================
// Misuse
// ============================================================================

#[test]
fn test_finalize_is_single_use() {
    for function in functions() {
        let mut transformer = function.create_transformer().unwrap();
        transformer.consume(b"data").unwrap();
        transformer.finalize().unwrap();

        let err = transformer.finalize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Misuse);

        let err = transformer.consume(b"more").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Misuse);
    }
}

#[test]
fn test_consumed_counts_bytes() {
    let mut transformer = Crc::default().create_transformer().unwrap();
    transformer.consume(b"abc").unwrap();
    transformer.consume(b"").unwrap();
    transformer.consume(b"defg").unwrap();
    assert_eq!(transformer.consumed(), 7);
}

// ============================================================================
// Data Source Failures
// ============================================================================

/// Yields `good` bytes, then fails.
struct FailingReader {
    good: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.good.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away")),
            n => Ok(n),
        }
    }
}

#[test]
fn test_reader_failure_returns_no_value() {
    let reader = FailingReader {
        good: Cursor::new(sample(100_000, 6)),
    };

    let err = Crc::default().compute_hash_reader(reader).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataSource);
    match err {
        HashError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
}

/// Cancels the token after the first read.
struct CancellingReader {
    inner: Cursor<Vec<u8>>,
    token: CancellationToken,
}

impl Read for CancellingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.token.cancel();
        Ok(n)
    }
}

#[test]
fn test_cancellation_between_reads() {
    let token = CancellationToken::new();
    let reader = CancellingReader {
        inner: Cursor::new(sample(500_000, 7)),
        token: token.clone(),
    };

    let err = Crc::default().compute_hash_reader_with(reader, &token).unwrap_err();
    assert!(matches!(err, HashError::Cancelled));
    assert_eq!(err.kind(), ErrorKind::Cancelled);
}

#[test]
fn test_uncancelled_token_completes() {
    let token = CancellationToken::new();
    let value = Crc::default()
        .compute_hash_reader_with(Cursor::new(b"123456789"), &token)
        .unwrap();
    assert_eq!(value.to_u64(), Some(0xCBF4_3926));
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[test]
fn test_configuration_errors_before_data() {
    let err = CrcConfig::new(65, 1, 0, false, false, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = Crc::from_name("CRC-0/NONE").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    match by_name("sha-1") {
        Err(err) => assert_eq!(err.kind(), ErrorKind::Configuration),
        Ok(_) => panic!("sha-1 should not resolve"),
    }

    let err = FnvConfig::new(1024).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
