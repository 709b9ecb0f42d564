use pob_wire::WireError;

/// Errors that can occur while decoding a share code into a build.
///
/// The decoder validates at three levels: the wire layers (Base64URL and
/// decompression), markup well-formedness, and the structural minimum of
/// a build document. Each variant keeps the stage and the underlying
/// cause intact — nothing is swallowed, surfacing is the caller's job.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)    ← malformed code, corrupt or unknown stream
///   ├── MalformedMarkup    ← the text is not well-formed markup
///   └── IncompleteBuild    ← markup parses but has no <Build> element
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A wire-level failure from `pob-wire`: bad Base64URL, a corrupt
    /// zlib stream, or a payload neither decompressor accepts.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The decompressed text could not be parsed into an element tree.
    #[error("malformed build markup: {0}")]
    MalformedMarkup(#[from] quick_xml::Error),

    /// The markup parsed but contains no `Build` element — the single
    /// structural fatal condition. Missing optional sections never
    /// produce this; they simply yield empty collections.
    #[error("markup has no <Build> element")]
    IncompleteBuild,
}
