use std::fs;

use anyhow::{Context, bail};
use pob_encoder::PobEncoder;
use pob_types::Build;
use pob_wire::Format;

use crate::EncodeArgs;

/// Run `pob encode`: read a build JSON file, print its share code.
pub fn run(args: &EncodeArgs) -> anyhow::Result<()> {
    let format = match args.format.as_str() {
        "zlib" => Format::Zlib,
        "zstd" => Format::Zstd,
        other => bail!("unknown format `{other}` (expected `zlib` or `zstd`)"),
    };

    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let build: Build = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid build JSON file", args.input.display()))?;

    let code = PobEncoder::new()
        .with_format(format)
        .encode(&build)
        .context("failed to encode build")?;

    match &args.output {
        Some(path) => fs::write(path, code)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{code}"),
    }
    Ok(())
}
