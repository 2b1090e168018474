// Integration tests for the generalized CRC engine
// Tests cover: catalogue check values, table shape, reflection, edge widths

use hashrs::{Crc, CrcConfig, CrcStandard, CrcTable, HashFunction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CHECK: &[u8] = b"123456789";

fn reflect(value: u64, bits: u32) -> u64 {
    value.reverse_bits() >> (64 - bits)
}

// ============================================================================
// Catalogue
// ============================================================================

#[test]
fn test_every_standard_whole_buffer() {
    for &standard in CrcStandard::ALL {
        let crc = Crc::standard(standard);
        let value = crc.compute_hash(CHECK).unwrap();
        assert_eq!(value.to_u64(), Some(standard.check()), "{}", standard.name());
        assert_eq!(value.bit_length(), standard.config().bits() as usize);
    }
}

#[test]
fn test_every_standard_byte_at_a_time() {
    for &standard in CrcStandard::ALL {
        let crc = Crc::standard(standard);
        let mut transformer = crc.create_transformer().unwrap();
        for byte in CHECK {
            transformer.consume(std::slice::from_ref(byte)).unwrap();
        }
        assert_eq!(
            transformer.finalize().unwrap().to_u64(),
            Some(standard.check()),
            "{}",
            standard.name()
        );
    }
}

#[test]
fn test_every_standard_random_fragments() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for &standard in CrcStandard::ALL {
        let crc = Crc::standard(standard);
        let mut transformer = crc.create_transformer().unwrap();

        let mut rest = CHECK;
        while !rest.is_empty() {
            let (head, tail) = rest.split_at(rng.random_range(0..=rest.len()));
            transformer.consume(head).unwrap();
            rest = tail;
        }

        assert_eq!(
            transformer.finalize().unwrap().to_u64(),
            Some(standard.check()),
            "{}",
            standard.name()
        );
    }
}

#[test]
fn test_popular_aliases() {
    let cases = [
        ("CRC-32", 0xCBF4_3926),
        ("CRC-32C", 0xE306_9283),
        ("CRC-16/CCITT-FALSE", 0x29B1),
        ("CRC-16/CCITT", 0x2189),
        ("CRC-16/ARC", 0xBB3D),
        ("MODBUS", 0x4B37),
        ("CRC-8", 0xF4),
        ("CRC-64", 0x6C40_DF5F_0B49_7347),
        ("crc-64/xz", 0x995D_C9BB_DF19_39FA),
    ];
    for (name, check) in cases {
        let crc = Crc::from_name(name).unwrap();
        assert_eq!(crc.checksum(CHECK), check, "{name}");
    }
}

// ============================================================================
// Known Values
// ============================================================================

#[test]
fn test_crc32_known_strings() {
    let crc = Crc::default();
    assert_eq!(crc.checksum(b""), 0);
    assert_eq!(
        crc.checksum(b"The quick brown fox jumps over the lazy dog"),
        0x414F_A339
    );
    assert_eq!(crc.checksum(b"foobar"), 0x9EF6_1F95);
}

#[test]
fn test_one_bit_crc() {
    let crc = Crc::new(CrcConfig::new(1, 1, 0, false, false, 0).unwrap()).unwrap();
    assert_eq!(crc.checksum(CHECK), 1);
    assert_eq!(crc.checksum(b""), 0);
    assert_eq!(crc.checksum(b"a"), 1);
    assert_eq!(crc.table().len(), 2);
}

#[test]
fn test_empty_input_is_processed_init() {
    // init 0xFFFF, no reflection, no xor: the empty CRC is the init value
    let config = CrcConfig::new(16, 0x1021, 0xFFFF, false, false, 0).unwrap();
    assert_eq!(Crc::new(config).unwrap().checksum(b""), 0xFFFF);

    // Mixed reflection still reflects an untouched register
    let config = CrcConfig::new(12, 0x80F, 0x001, false, true, 0).unwrap();
    assert_eq!(Crc::new(config).unwrap().checksum(b""), 0x800);
}

// ============================================================================
// Tables and Reflection
// ============================================================================

#[test]
fn test_table_shape_follows_width() {
    for bits in 1..=64u32 {
        let config = CrcConfig::new(bits, 1, 0, false, false, 0).unwrap();
        let table = CrcTable::new(&config).unwrap();
        let expected = if bits >= 8 { 256 } else { 2 };
        assert_eq!(table.len(), expected, "bits {bits}");
        assert!(table.entries().iter().all(|&e| e <= u64::MAX >> (64 - bits)));
    }
}

#[test]
fn test_reflected_table_is_mirror_image() {
    for (bits, poly) in [(5, 0x05), (16, 0x1021), (32, 0x04C1_1DB7), (64, 0x42F0_E1EB_A9EA_3693)] {
        let plain = CrcConfig::new(bits, poly, 0, false, false, 0).unwrap();
        let normal = CrcTable::new(&plain).unwrap();
        let reflected = CrcTable::new(&plain.with_reflect_in(true)).unwrap();

        for (index, &entry) in reflected.entries().iter().enumerate() {
            let source = if bits >= 8 {
                reflect(index as u64, 8) as usize
            } else {
                index
            };
            assert_eq!(entry, reflect(normal.entries()[source], bits));
        }
    }
}

#[test]
fn test_mixed_reflection_defers_to_finalize() {
    let data = b"mixed reflection input";

    let cases = [
        (5, 0x05),
        (12, 0x80F),
        (16, 0x8005),
        (32, 0x04C1_1DB7),
        (64, 0x42F0_E1EB_A9EA_3693),
    ];
    for (bits, poly) in cases {
        for reflect_in in [false, true] {
            let same = CrcConfig::new(bits, poly, 0, reflect_in, reflect_in, 0).unwrap();
            let mixed = same.with_reflect_out(!reflect_in);

            let same = Crc::new(same).unwrap().checksum(data);
            let mixed = Crc::new(mixed).unwrap().checksum(data);
            assert_eq!(mixed, reflect(same, bits), "bits {bits}, reflect_in {reflect_in}");
        }
    }
}

#[test]
fn test_tables_are_shared_between_clones() {
    let crc = Crc::standard(CrcStandard::Crc32Iscsi);
    let clone = crc.clone();
    assert!(std::ptr::eq(crc.table(), clone.table()));
}
