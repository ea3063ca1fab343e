//! # fixedbytes Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! functions of the library. Import it with a glob to get the whole codec surface at once.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The error type for all fixedbytes operations
pub use crate::Error;

/// The result type used throughout fixedbytes
pub use crate::Result;

/// Byte order and integer kind selectors
pub use crate::codec::{ByteOrder, IntKind};

/// Trait implemented by every fixed-width integer the codec can handle
pub use crate::codec::FixedWidth;

// ================================================================================================
// Reading and Writing
// ================================================================================================

/// Named readers for 8, 16 and 32-bit integers
pub use crate::codec::{read_i16, read_i32, read_i8, read_u16, read_u32, read_u8};

/// Named writers for 8, 16 and 32-bit integers
pub use crate::codec::{write_i16, write_i32, write_i8, write_u16, write_u32, write_u8};

/// Generic and dynamically typed reads and writes
pub use crate::codec::{decode, decode_at, encode, encode_value, read, read_at, write, write_at};

/// Sequential reader
pub use crate::codec::Parser;

// ================================================================================================
// Buffer Views
// ================================================================================================

/// Whole-buffer conversions
pub use crate::codec::{to_array, to_hex_string, to_i16_array, HexDump};

/// Lossy 16-bit views
pub use crate::codec::{first_two_bytes_big_endian, low_two_bytes};
