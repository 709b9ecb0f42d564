use pob_types::{Build, is_support_gem};

use crate::InspectArgs;
use crate::cmd_decode::decode_input;

/// Run `pob inspect`: decode and print a human-readable summary.
pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let build = decode_input(args.code.as_deref(), args.file.as_deref())?;
    print!("{}", summarize(&build));
    Ok(())
}

/// Render the summary text for a decoded build.
fn summarize(build: &Build) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let character = &build.character;

    let identity = if character.ascendancy.is_empty() {
        character.class_name.clone()
    } else {
        format!("{} ({})", character.class_name, character.ascendancy)
    };
    let _ = writeln!(out, "{identity}, level {}", character.level);
    let _ = writeln!(out, "stats tracked: {}", character.stats.len());

    let _ = writeln!(out, "\nskill groups: {}", build.skills.len());
    for group in &build.skills {
        let marker = if group.is_enabled { "+" } else { "-" };
        let kind = if is_support_gem(&group.main_skill_id) {
            " [support]"
        } else {
            ""
        };
        let _ = write!(
            out,
            "  {marker} {}: {}{kind} (lv {}, q {})",
            group.slot, group.main_skill_id, group.level, group.quality
        );
        if group.links.is_empty() {
            let _ = writeln!(out);
        } else {
            let _ = writeln!(out, " + {}", group.links.join(" + "));
        }
    }
    match build.default_main_skill() {
        Some(group) => {
            let _ = writeln!(out, "default main skill: {}", group.main_skill_id);
        }
        None => {
            let _ = writeln!(out, "default main skill: none active");
        }
    }

    let _ = writeln!(out, "\nitems: {}", build.items.len());
    for item in &build.items {
        let _ = writeln!(out, "  - {}", item.name);
    }

    if build.keystones.is_empty() {
        let _ = writeln!(out, "\nkeystones: none");
    } else {
        let _ = writeln!(out, "\nkeystones: {}", build.keystones.join(", "));
    }
    if build.tree_url.is_empty() {
        let _ = writeln!(out, "tree: none");
    } else {
        let _ = writeln!(out, "tree: {}", build.tree_url);
    }
    out
}
