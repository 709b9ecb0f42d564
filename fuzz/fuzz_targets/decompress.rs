#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: dual-format decompressor on raw payload bytes.
//
// Exercises the zlib attempt/classify loop and the zstd fallback
// without the Base64 layer in front, so the fuzzer reaches the
// decompressors with dense binary inputs.
fuzz_target!(|data: &[u8]| {
    let _ = pob_wire::compress::decompress(data);
});
