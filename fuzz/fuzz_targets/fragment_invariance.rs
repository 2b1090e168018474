#![no_main]

use libfuzzer_sys::fuzz_target;
use hashrs::{by_name, HashFunction};

fuzz_target!(|data: Vec<u8>| {
    // First byte picks the fragment size, the rest is the input
    let Some((&step, input)) = data.split_first() else {
        return;
    };
    let step = step as usize + 1;

    let ids = [
        "crc-32",
        "crc-5/usb",
        "crc-12/3gpp",
        "crc-64/xz",
        "jenkins-oaat",
        "fnv1a-64",
        "blake3",
    ];
    for id in ids {
        let function = by_name(id).unwrap();
        let whole = function.compute_hash(input).unwrap();

        // Verify: fragment size never changes the result
        let fragmented = function.compute_hash_chunks(input.chunks(step)).unwrap();
        assert_eq!(whole, fragmented, "{id}");

        // Verify: a duplicate taken mid-stream finishes the same way
        let mut transformer = function.create_transformer().unwrap();
        let (head, tail) = input.split_at(input.len() / 2);
        transformer.consume(head).unwrap();
        let mut copy = transformer.duplicate();
        transformer.consume(tail).unwrap();
        copy.consume(tail).unwrap();
        assert_eq!(transformer.finalize().unwrap(), whole);
        assert_eq!(copy.finalize().unwrap(), whole);
    }
});
