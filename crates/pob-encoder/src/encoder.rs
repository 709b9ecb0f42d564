use pob_types::Build;
use pob_wire::compress::{self, Format};
use pob_wire::transcode;

use crate::error::EncodeError;
use crate::markup;

/// Share-code encoder — the inverse of `PobDecoder::decode`.
///
/// Encoding runs the decode pipeline backwards:
///
/// ```text
/// Build ──▶ render markup ──▶ compress ──▶ Base64URL ──▶ raw code
///                             (zlib | zstd)
/// ```
///
/// The compression format is configurable because both producer
/// generations remain in circulation; the default is the older zlib
/// format, which every consumer accepts. Output markup is not
/// byte-identical to any particular source document — attribute order
/// and whitespace are unconstrained — but decoding the produced code
/// always reproduces the input build.
///
/// # Example
///
/// ```rust
/// use pob_encoder::PobEncoder;
/// use pob_types::Build;
///
/// let code = PobEncoder::new().encode(&Build::default()).unwrap();
/// assert!(!code.contains('+'));
/// ```
pub struct PobEncoder {
    format: Format,
}

impl PobEncoder {
    /// New encoder producing zlib payloads.
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: Format::Zlib,
        }
    }

    /// Select the compression format for the payload.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Encode a build into a share code.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Compress`] when the compressor fails; this does
    /// not happen for in-memory output in practice.
    pub fn encode(&self, build: &Build) -> Result<String, EncodeError> {
        let markup = markup::render(build);
        let compressed = compress::compress(markup.as_bytes(), self.format)?;
        Ok(transcode::encode(&compressed))
    }
}

impl Default for PobEncoder {
    fn default() -> Self {
        Self::new()
    }
}
