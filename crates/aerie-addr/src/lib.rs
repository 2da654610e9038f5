//! AERIE Address Codec - Human-transcribable node addresses
//!
//! This crate implements the textual address format for AERIE node
//! identifiers. An address is a 256-bit identifier wrapped in a
//! checksummed 35-byte frame and rendered as 55 base32 symbols:
//! - Byte 0: Version (always 0x2D)
//! - Bytes 1-32: Node identifier
//! - Bytes 33-34: CRC-16/XMODEM over bytes 0-32 (BE)
//!
//! Base32 of the 35-byte frame is 56 symbols, but the first symbol is
//! fully determined by the fixed version byte, so it is dropped on
//! encode and restored on decode. Both operations are pure and
//! stateless.

pub mod address;
pub mod base32;
pub mod crc16;

// The leaf codecs keep their own `encode`/`decode` names; only the
// address layer is re-exported at the crate root
pub use address::*;
