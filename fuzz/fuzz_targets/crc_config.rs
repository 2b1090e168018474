#![no_main]

use libfuzzer_sys::fuzz_target;
use hashrs::{Crc, CrcConfig, HashFunction};

fn word(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    let n = bytes.len().min(8);
    buf[..n].copy_from_slice(&bytes[..n]);
    u64::from_le_bytes(buf)
}

fuzz_target!(|data: Vec<u8>| {
    if data.len() < 26 {
        return;
    }

    let bits = (data[0] % 64) as u32 + 1;
    let mask = u64::MAX >> (64 - bits);
    let reflect_in = data[1] & 1 != 0;
    let reflect_out = data[1] & 2 != 0;
    let polynomial = word(&data[2..10]) & mask;
    let initial_value = word(&data[10..18]) & mask;
    let xor_out = word(&data[18..26]) & mask;
    let input = &data[26..];

    let config = CrcConfig::new(bits, polynomial, initial_value, reflect_in, reflect_out, xor_out)
        .expect("masked parameters are always valid");
    let crc = Crc::new(config).unwrap();

    // Verify: the value fits the width
    let value = crc.checksum(input);
    assert!(value <= mask);

    // Verify: byte-at-a-time matches whole-buffer
    let bytewise = crc.compute_hash_chunks(input.chunks(1)).unwrap();
    assert_eq!(bytewise.to_u64(), Some(value));

    // Verify: flipping the output orientation mirrors the value
    let flipped = Crc::new(config.with_reflect_out(!reflect_out)).unwrap();
    let mirrored = (value ^ xor_out).reverse_bits() >> (64 - bits);
    assert_eq!(flipped.checksum(input), mirrored ^ xor_out);

    // Verify: out-of-range parameters are rejected
    if bits < 64 {
        assert!(config.with_polynomial(polynomial | (1 << bits)).validate().is_err());
    }
});
