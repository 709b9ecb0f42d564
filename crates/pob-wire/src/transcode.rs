use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::WireError;

/// Standard-alphabet engine that accepts both padded and unpadded input.
///
/// Decoding runs after the `-`/`_` → `+`/`/` substitution, so the standard
/// alphabet covers codes written in either alphabet, even mixed.
const STANDARD_FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a share code into its compressed payload bytes.
///
/// Surrounding whitespace is trimmed, then `-` and `_` are substituted
/// character-for-character with `+` and `/` before standard Base64
/// decoding. Trailing `=` padding is accepted but not required.
///
/// # Errors
///
/// [`WireError::MalformedInput`] when the code contains a character
/// outside the alphabet after substitution, or carries invalid padding.
pub fn decode(code: &str) -> Result<Vec<u8>, WireError> {
    let substituted: String = code
        .trim()
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    Ok(STANDARD_FORGIVING.decode(substituted)?)
}

/// Encode payload bytes as a URL-safe share code.
///
/// The output never contains `+` or `/`, so it can travel in URLs
/// unescaped. [`decode`] is its exact inverse.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}
