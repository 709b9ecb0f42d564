/// POB command-line tool — decode, encode, and inspect "Path of
/// Building" share codes.
///
/// # Command overview
///
/// ```text
/// pob <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a share code and print the build as JSON
///   encode     Encode a build JSON file into a share code
///   inspect    Print a human-readable summary of a decoded build
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                    |
/// |------|--------------------------------------------|
/// | 0    | Success                                    |
/// | 1    | Error (bad code, I/O failure, bad JSON)    |
///
/// All error details are written to stderr so stdout can be piped
/// cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The POB share-code command-line tool.
#[derive(Parser)]
#[command(name = "pob", version, about = "Path of Building share-code CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a share code and print the build as JSON.
    Decode(DecodeArgs),
    /// Encode a build JSON file into a share code.
    Encode(EncodeArgs),
    /// Print a human-readable summary of a decoded build.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `pob decode`.
///
/// The share code is taken from the positional argument, from `--file`,
/// or from stdin when neither is given. Output is pretty-printed JSON
/// in the build's serialized shape, to stdout or to `--output`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The share code itself. Reads `--file` or stdin when omitted.
    pub code: Option<String>,

    /// Read the share code from this file instead.
    #[arg(long, conflicts_with = "code")]
    pub file: Option<PathBuf>,

    /// Write the JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `pob encode`.
///
/// Reads a build in the decoder's JSON shape and prints its share code.
/// The compression format selects which producer generation the code
/// imitates; every consumer accepts both.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the build JSON file.
    pub input: PathBuf,

    /// Compression format: `zlib` (default) or `zstd`.
    #[arg(long, default_value = "zlib")]
    pub format: String,

    /// Write the share code to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `pob inspect`.
///
/// Decodes like `pob decode` but prints a human-readable summary:
/// character line, stat count, skill groups with enabled markers and
/// links, items, keystones, tree URL, and the default main-skill guess.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// The share code itself. Reads `--file` or stdin when omitted.
    pub code: Option<String>,

    /// Read the share code from this file instead.
    #[arg(long, conflicts_with = "code")]
    pub file: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
