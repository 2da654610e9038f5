//! Identity types for AERIE protocol
//!
//! Node identifiers are opaque 256-bit values. The codec layer never
//! interprets their contents; how they are derived (e.g. from a public
//! key) is the business of whoever hands them to us.

use std::fmt;

/// Size of a node identifier in bytes
pub const NODE_ID_SIZE: usize = 32;

/// Node identity - opaque 256-bit value
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeId(pub [u8; NODE_ID_SIZE]);

impl NodeId {
    pub const ZERO: NodeId = NodeId([0u8; NODE_ID_SIZE]);

    #[inline]
    pub fn new(bytes: [u8; NODE_ID_SIZE]) -> Self {
        NodeId(bytes)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; NODE_ID_SIZE] {
        self.0
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; NODE_ID_SIZE]) -> Self {
        NodeId(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; NODE_ID_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for NodeId {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
