use std::io::{Cursor, Write};

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::WireError;

/// Upper bound on decompressed payload size (32 MiB).
///
/// Realistic build markup decompresses to a few hundred KiB; anything
/// past this limit is a crafted payload, not a build.
pub const MAX_DECOMPRESSED_SIZE: usize = 32 * 1024 * 1024;

/// Output buffer growth increment for the inflater.
const INFLATE_CHUNK: usize = 64 * 1024;

/// zstd compression level for the encode path (1–22 scale). Level 3
/// balances speed and ratio for markup-sized payloads.
const ZSTD_LEVEL: i32 = 3;

/// Compression formats produced by the two generations of share-code
/// producers: zlib streams from the older one, zstd frames from the
/// newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Zlib,
    Zstd,
}

/// How the zlib attempt ended when it did not produce output.
enum ZlibFailure {
    /// The inflater rejected the data outright — header check or block
    /// structure. This is the only outcome that triggers the zstd
    /// fallback.
    Rejected(String),
    /// The inflater accepted the stream but the input ran out before the
    /// stream end. Damage, not a format mismatch: never falls back.
    Truncated,
    /// Output grew past [`MAX_DECOMPRESSED_SIZE`].
    TooLarge(usize),
}

/// Decompress a share-code payload into markup text.
///
/// The zlib attempt always runs first — that is the format of the older
/// producer generation, and the ordered fallback (rather than magic-byte
/// sniffing) is the compatibility policy. Only an outright rejection by
/// the inflater falls through to the zstd frame decoder.
///
/// # Errors
///
/// - [`WireError::CorruptData`] when the payload opens as zlib but the
///   stream is truncated.
/// - [`WireError::UnsupportedCompression`] when both decoders reject the
///   payload; carries both underlying messages.
/// - [`WireError::DecompressionBomb`] when either decoder's output
///   exceeds [`MAX_DECOMPRESSED_SIZE`].
/// - [`WireError::InvalidUtf8`] when the decompressed bytes are not
///   UTF-8 text.
pub fn decompress(data: &[u8]) -> Result<String, WireError> {
    if data.is_empty() {
        return Err(WireError::UnsupportedCompression {
            zlib: "empty input".to_string(),
            zstd: "empty input".to_string(),
        });
    }
    match inflate_zlib(data) {
        Ok(out) => Ok(String::from_utf8(out)?),
        Err(ZlibFailure::Truncated) => Err(WireError::CorruptData(
            "zlib stream ended before completion".to_string(),
        )),
        Err(ZlibFailure::TooLarge(actual)) => Err(WireError::DecompressionBomb {
            actual,
            limit: MAX_DECOMPRESSED_SIZE,
        }),
        Err(ZlibFailure::Rejected(zlib_cause)) => match zstd::decode_all(Cursor::new(data)) {
            Ok(out) if out.len() > MAX_DECOMPRESSED_SIZE => Err(WireError::DecompressionBomb {
                actual: out.len(),
                limit: MAX_DECOMPRESSED_SIZE,
            }),
            Ok(out) => Ok(String::from_utf8(out)?),
            Err(zstd_cause) => Err(WireError::UnsupportedCompression {
                zlib: zlib_cause,
                zstd: zstd_cause.to_string(),
            }),
        },
    }
}

/// Compress markup text into a share-code payload.
///
/// The output is a valid stream of the requested format and
/// [`decompress`] reproduces the input exactly.
///
/// # Errors
///
/// Propagates the underlying encoder's I/O error; this does not happen
/// for in-memory output in practice.
pub fn compress(text: &[u8], format: Format) -> std::io::Result<Vec<u8>> {
    match format {
        Format::Zlib => {
            // Default level keeps the conventional 0x78 0x9C stream
            // header the historical producers emit.
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(text)?;
            encoder.finish()
        }
        Format::Zstd => zstd::encode_all(Cursor::new(text), ZSTD_LEVEL),
    }
}

/// Run the zlib inflater over the whole input, classifying the outcome.
///
/// The distinction between [`ZlibFailure::Rejected`] and
/// [`ZlibFailure::Truncated`] is what keeps the fallback precise: the
/// inflater reports header-check and block-structure failures as hard
/// errors, while a truncated stream simply stops making progress with
/// output space to spare.
fn inflate_zlib(data: &[u8]) -> Result<Vec<u8>, ZlibFailure> {
    // A zlib stream opens with a two-byte CMF/FLG header; anything
    // shorter cannot pass the header check.
    if data.len() < 2 {
        return Err(ZlibFailure::Rejected(
            "input shorter than a zlib header".to_string(),
        ));
    }

    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(INFLATE_CHUNK);
    loop {
        let consumed = inflater.total_in() as usize;
        let produced = out.len();
        let status = inflater
            .decompress_vec(&data[consumed..], &mut out, FlushDecompress::Finish)
            .map_err(|e| ZlibFailure::Rejected(e.to_string()))?;
        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                if out.len() > MAX_DECOMPRESSED_SIZE {
                    return Err(ZlibFailure::TooLarge(out.len()));
                }
                if out.len() == out.capacity() {
                    // Out of output room; grow and continue.
                    out.reserve(out.capacity().max(INFLATE_CHUNK));
                } else if inflater.total_in() as usize == consumed && out.len() == produced {
                    // Spare output space but no forward progress: the
                    // input is exhausted mid-stream.
                    return Err(ZlibFailure::Truncated);
                }
            }
        }
    }
}
