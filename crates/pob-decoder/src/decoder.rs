use pob_types::Build;

use crate::error::DecodeError;
use crate::{markup, normalize};

/// Share-code decoder — turns a raw code into a normalized build.
///
/// Decoding chains the three codec stages; every stage's failure maps
/// into a [`DecodeError`] without losing the underlying cause:
///
/// ```text
/// raw code ──▶ Base64URL decode ──▶ dual-format decompress ──▶ parse
///                  (pob-wire)            (pob-wire)          + normalize
///                                                               │
///                                                             Build
/// ```
///
/// The decoder is a pure function of its input: no I/O, no retries, no
/// logging, no shared state. A failure is permanent for that input, and
/// success always yields a complete [`Build`] — there is no partial or
/// degraded result.
///
/// # Example
///
/// ```rust
/// use pob_decoder::PobDecoder;
/// use pob_encoder::PobEncoder;
/// use pob_types::Build;
///
/// let code = PobEncoder::new().encode(&Build::default()).unwrap();
/// let build = PobDecoder::decode(&code).unwrap();
/// assert!(build.skills.is_empty());
/// ```
pub struct PobDecoder;

impl PobDecoder {
    /// Decode a share code into a normalized build.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] for a malformed code, a corrupt zlib
    ///   stream, or a payload neither decompressor accepts.
    /// - [`DecodeError::MalformedMarkup`] when the decompressed text is
    ///   not well-formed markup.
    /// - [`DecodeError::IncompleteBuild`] when the markup lacks a
    ///   `Build` element.
    pub fn decode(code: &str) -> Result<Build, DecodeError> {
        // 1. Base64URL → compressed payload bytes.
        let compressed = pob_wire::transcode::decode(code)?;

        // 2. Dual-format decompression → markup text.
        let text = pob_wire::compress::decompress(&compressed)?;

        // 3. Parse + normalize.
        Self::decode_markup(&text)
    }

    /// Parse and normalize markup text that is already decompressed.
    ///
    /// Exposed for collaborators that obtain the markup some other way.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedMarkup`] and [`DecodeError::IncompleteBuild`],
    /// as for [`decode`](Self::decode).
    pub fn decode_markup(text: &str) -> Result<Build, DecodeError> {
        let roots = markup::parse(text)?;
        normalize::normalize(&roots)
    }
}
