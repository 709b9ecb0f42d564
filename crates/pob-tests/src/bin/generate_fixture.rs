//! Emit sample share codes for seeding external consumers.
//!
//! Prints one code per line for a representative build, once per
//! compression format, followed by the build's JSON shape. Useful for
//! wiring up collaborators (paste resolvers, presentation layers)
//! without a live producer.

use std::collections::BTreeMap;

use pob_encoder::PobEncoder;
use pob_types::{Build, Character, Item, SkillGroup};
use pob_wire::Format;

fn sample_build() -> Build {
    Build {
        character: Character {
            class_name: "Witch".to_string(),
            ascendancy: "Necromancer".to_string(),
            level: "90".to_string(),
            stats: BTreeMap::from([
                ("Life".to_string(), "4230".to_string()),
                ("TotalDPS".to_string(), "191204.7".to_string()),
            ]),
        },
        skills: vec![SkillGroup {
            main_skill_id: "Raise Spectre".to_string(),
            slot: "Body Armour".to_string(),
            level: "21".to_string(),
            quality: "20".to_string(),
            is_enabled: true,
            links: vec![
                "Spell Echo Support".to_string(),
                "Minion Damage Support".to_string(),
            ],
        }],
        items: vec![Item {
            name: "Vis Mortis".to_string(),
            data: "Rarity: UNIQUE\nVis Mortis\nNecromancer Silks".to_string(),
        }],
        keystones: vec!["Minion Instability".to_string()],
        tree_url: String::new(),
    }
}

fn main() {
    let build = sample_build();

    let zlib = PobEncoder::new()
        .encode(&build)
        .expect("zlib encode cannot fail for in-memory output");
    let zstd = PobEncoder::new()
        .with_format(Format::Zstd)
        .encode(&build)
        .expect("zstd encode cannot fail for in-memory output");

    println!("zlib: {zlib}");
    println!("zstd: {zstd}");
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&build).expect("build serialization is infallible")
    );
}
