use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use pob_decoder::PobDecoder;
use pob_types::Build;

use crate::DecodeArgs;

/// Run `pob decode`: resolve the share code, decode it, print JSON.
pub fn run(args: &DecodeArgs) -> anyhow::Result<()> {
    let build = decode_input(args.code.as_deref(), args.file.as_deref())?;
    let json = serde_json::to_string_pretty(&build).context("failed to serialize build")?;

    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

/// Resolve a share code from an argument, a file, or stdin, and decode
/// it. Shared with `pob inspect`.
pub fn decode_input(code: Option<&str>, file: Option<&Path>) -> anyhow::Result<Build> {
    let code = read_code(code, file)?;
    PobDecoder::decode(&code).context("failed to decode share code")
}

fn read_code(code: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(code) = code {
        return Ok(code.to_string());
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read share code from stdin")?;
    Ok(buf)
}
