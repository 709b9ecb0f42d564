#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full share-code decoder entry point.
//
// Calls `PobDecoder::decode(code)` on arbitrary strings.
// Catches bugs in:
// - Base64URL substitution and decoding
// - zlib/zstd fallback classification
// - Decompression-bomb and UTF-8 guards
// - Markup parsing and build normalization
fuzz_target!(|code: &str| {
    let _ = pob_decoder::PobDecoder::decode(code);
});
