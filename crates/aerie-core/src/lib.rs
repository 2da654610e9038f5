//! AERIE Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the AERIE protocol:
//! - Node identifiers (NodeId, 256-bit)
//! - Error types (AerieError, AerieResult)
//!
//! No network code, no crypto, no I/O. Everything here is pure data.

pub mod error;
pub mod id;

pub use error::*;
pub use id::*;
