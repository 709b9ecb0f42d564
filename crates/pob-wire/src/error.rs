/// Errors from the outer wire layers of a share code.
///
/// The wire layers are the Base64URL transcoder and the dual-format
/// decompressor. Each variant captures the stage that failed and the
/// underlying cause, so a caller can render a precise diagnostic. All
/// variants are terminal — a share code that fails here will fail the
/// same way on every retry.
///
/// Error hierarchy:
///
/// ```text
///   WireError
///   ├── MalformedInput          ← not URL-safe Base64 after substitution
///   ├── CorruptData             ← valid zlib header, stream truncated
///   ├── UnsupportedCompression  ← neither zlib nor zstd accepts the data
///   ├── DecompressionBomb       ← decompressed size exceeds safety limit
///   └── InvalidUtf8             ← decompressed payload is not text
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The share code is not valid Base64 after the URL-safe character
    /// substitution: a character outside the alphabet, or bad padding.
    #[error("malformed share code: {0}")]
    MalformedInput(#[from] base64::DecodeError),

    /// The payload opened as a zlib stream but ended before the stream
    /// did. This never falls through to the zstd decoder — a truncated
    /// stream is damage, not a format mismatch.
    #[error("corrupt compressed stream: {0}")]
    CorruptData(String),

    /// Neither decompressor accepts the payload. Both underlying failure
    /// messages are attached for diagnostics.
    #[error("unsupported compression format (zlib: {zlib}; zstd: {zstd})")]
    UnsupportedCompression { zlib: String, zstd: String },

    /// Decompressed data exceeds the safety limit.
    ///
    /// Prevents decompression bombs — payloads crafted to decompress
    /// into vastly larger output.
    #[error("decompressed size {actual} exceeds limit {limit}")]
    DecompressionBomb { actual: usize, limit: usize },

    /// The decompressed payload is not valid UTF-8 text.
    #[error("decompressed payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
