//! Rolling checksum and check-digit derivation
//!
//! The check-digit scheme is deliberately self-contained: a two-accumulator
//! rolling checksum reduced modulo 255 per byte, folded to a single decimal
//! digit. It is not the ICAO 9303 weighted algorithm and is not meant to be.

use crate::constants::FILLER;
use crate::error::MrzError;
use alloc::string::String;

/// Compute the 16-bit rolling checksum of a byte sequence
///
/// Both accumulators start at zero and are reduced modulo 255 after every
/// byte: the first sums the input bytes, the second sums the running value
/// of the first. The result packs the second accumulator into the high byte
/// and the first into the low byte. Empty input yields 0.
///
/// Downstream check digits depend on this exact numeric sequence; the
/// modulus is 255 per byte, never 256.
pub fn rolling_checksum(data: &[u8]) -> u16 {
    let mut sum1: u32 = 0;
    let mut sum2: u32 = 0;

    for &byte in data {
        sum1 = (sum1 + u32::from(byte)) % 255;
        sum2 = (sum2 + sum1) % 255;
    }

    ((sum2 as u16) << 8) | sum1 as u16
}

/// Derive the decimal check digit for a field value
///
/// Empty input yields 0. Otherwise the text is uppercased, fillers are
/// mapped to the literal digit `0`, and the rolling checksum of the ASCII
/// bytes is reduced modulo 10.
///
/// Returns [`MrzError::Encoding`] if the normalized text is not 7-bit
/// ASCII. All encoder and verifier call sites pass MRZ-alphabet text, so
/// hitting this indicates a caller bug rather than bad wire data.
pub fn check_digit(text: &str) -> Result<u8, MrzError> {
    if text.is_empty() {
        return Ok(0);
    }

    let normalized: String = text.to_uppercase().replace(FILLER, "0");

    if !normalized.is_ascii() {
        return Err(MrzError::Encoding(normalized));
    }

    Ok((rolling_checksum(normalized.as_bytes()) % 10) as u8)
}

/// Derive the check digit for a field value as its `'0'..='9'` character
///
/// Convenience wrapper over [`check_digit`] for call sites that splice the
/// digit into a line or compare it against a stored character.
pub fn check_digit_char(text: &str) -> Result<char, MrzError> {
    check_digit(text).map(|d| char::from(b'0' + d))
}
