//! Padding-free base32 codec
//!
//! RFC 4648 alphabet ordering (a-z then 2-7), lowercase canonical, no
//! `=` padding ever. Encoding is case-selectable, decoding accepts
//! either case or a mixture. Decoding is strict: any symbol outside
//! the alphabet, or a non-zero group of leftover bits, is rejected so
//! that every byte sequence has exactly one accepted spelling per case.

use aerie_core::{AerieError, AerieResult};

/// The 32-symbol alphabet, canonical (lowercase) form
pub const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Map one symbol to its 5-bit value, accepting either letter case
#[inline]
fn symbol_value(sym: u8) -> Option<u8> {
    match sym {
        b'a'..=b'z' => Some(sym - b'a'),
        b'A'..=b'Z' => Some(sym - b'A'),
        b'2'..=b'7' => Some(sym - b'2' + 26),
        _ => None,
    }
}

/// Encode bytes as unpadded base32
///
/// Output length is `ceil(len * 8 / 5)`; the empty input encodes to the
/// empty string.
pub fn encode(bytes: &[u8], upper_case: bool) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * 8);
    let mut acc: u32 = 0;
    let mut acc_bits: u32 = 0;

    for &b in bytes {
        acc = (acc << 8) | u32::from(b);
        acc_bits += 8;
        while acc_bits >= 5 {
            acc_bits -= 5;
            out.push(ALPHABET[((acc >> acc_bits) & 0x1F) as usize] as char);
        }
    }
    if acc_bits > 0 {
        // Left-align the tail group; the low bits stay zero
        out.push(ALPHABET[((acc << (5 - acc_bits)) & 0x1F) as usize] as char);
    }

    if upper_case {
        out.make_ascii_uppercase();
    }
    out
}

/// Decode unpadded base32, either letter case
///
/// Rejects symbols outside the alphabet, input lengths no encoder can
/// produce (5 or more leftover bits), and non-zero leftover bits.
pub fn decode(text: &str) -> AerieResult<Vec<u8>> {
    let bits = text.len() * 5;
    if bits % 8 >= 5 {
        return Err(AerieError::InvalidEncoding(format!(
            "impossible base32 length: {}",
            text.len()
        )));
    }

    let mut out = Vec::with_capacity(bits / 8);
    let mut acc: u32 = 0;
    let mut acc_bits: u32 = 0;

    for sym in text.bytes() {
        let value = symbol_value(sym).ok_or_else(|| {
            AerieError::InvalidEncoding(format!("invalid base32 symbol: {:?}", sym as char))
        })?;
        acc = (acc << 5) | u32::from(value);
        acc_bits += 5;
        if acc_bits >= 8 {
            acc_bits -= 8;
            out.push((acc >> acc_bits) as u8);
        }
    }

    // Leftover bits are encoder padding and must be zero
    if acc_bits > 0 && acc & ((1 << acc_bits) - 1) != 0 {
        return Err(AerieError::InvalidEncoding(
            "non-canonical trailing bits".into(),
        ));
    }

    Ok(out)
}
