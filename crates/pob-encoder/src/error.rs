/// Errors that can occur while encoding a build into a share code.
///
/// Rendering and Base64 transcoding cannot fail; the only fallible
/// stage is compression, and only through its I/O interface.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// Compressing the rendered markup failed.
    #[error("failed to compress build markup: {0}")]
    Compress(#[from] std::io::Error),
}
