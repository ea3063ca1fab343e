//! Fixed-width integer codec over in-memory byte buffers.
//!
//! This module converts between regions of a byte buffer and native fixed-width integers,
//! in an explicitly chosen byte order, with every access bounds checked.
//!
//! # Architecture
//!
//! - [`crate::codec::io`] - The [`FixedWidth`] trait and generic bounds-checked reads/writes
//! - [`crate::codec::order`] - [`ByteOrder`], required by every multi-byte operation
//! - [`crate::codec::kind`] - [`IntKind`] and the dynamically typed [`decode`]/[`encode_value`]
//! - [`crate::codec::fixed`] - Named operations such as [`read_i16`] and [`write_u32`]
//! - [`crate::codec::bulk`] - Whole-buffer views: [`to_hex_string`], [`to_i16_array`]
//! - [`crate::codec::narrow`] - Lossy 16-bit views such as [`first_two_bytes_big_endian`]
//! - [`crate::codec::parser`] - [`Parser`], a cursor for sequential reads
//!
//! # Byte Order
//!
//! Byte order is never inferred from the host. Single-byte operations take no order; every
//! other operation takes a [`ByteOrder`] argument, or names its order in its function name.
//!
//! # Examples
//!
//! ```rust
//! use fixedbytes::codec::{read_u32, to_hex_string, write_i16, ByteOrder};
//!
//! let data = [0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
//! assert_eq!(read_u32(&data, 4, ByteOrder::LittleEndian)?, 4294967295);
//!
//! let encoded = write_i16(-2, ByteOrder::BigEndian);
//! assert_eq!(to_hex_string(&encoded), "FF FE");
//! # Ok::<(), fixedbytes::Error>(())
//! ```

pub mod bulk;
pub mod fixed;
pub mod io;
pub mod kind;
pub mod narrow;
pub mod order;
pub mod parser;

pub use bulk::{to_array, to_hex_string, to_i16_array, HexDump};
pub use fixed::{
    read_i16, read_i32, read_i8, read_u16, read_u32, read_u8, write_i16, write_i32, write_i8,
    write_u16, write_u32, write_u8,
};
pub use io::{encode, read, read_at, write, write_at, FixedWidth};
pub use kind::{decode, decode_at, encode_value, IntKind};
pub use narrow::{first_two_bytes_big_endian, low_two_bytes};
pub use order::ByteOrder;
pub use parser::Parser;
