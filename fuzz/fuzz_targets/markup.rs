#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: markup parser + normalizer on arbitrary text.
//
// Catches bugs in:
// - Element tree construction (stack handling, stray/unclosed tags)
// - Attribute and entity decoding
// - Section extraction and sequence coercion
fuzz_target!(|text: &str| {
    let _ = pob_decoder::PobDecoder::decode_markup(text);
});
