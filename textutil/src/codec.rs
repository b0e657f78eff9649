use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::TextUtilError;

/// Standard alphabet; pads when encoding, accepts padded or unpadded input.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes `input` as padded standard base64.
#[must_use]
pub fn base64_encode(input: impl AsRef<[u8]>) -> String {
    ENGINE.encode(input)
}

/// Decodes standard base64, with or without trailing `=` padding.
///
/// # Errors
///
/// Returns `TextUtilError::Base64` on characters outside the alphabet or a
/// malformed length.
pub fn base64_decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, TextUtilError> {
    Ok(ENGINE.decode(input)?)
}
