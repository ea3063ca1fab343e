// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # fixedbytes
//!
//! Bounds-checked reading and writing of fixed-width integers in byte buffers.
//!
//! `fixedbytes` is a small, stateless codec for the lowest layer of binary format parsing:
//! pulling 8, 16 and 32-bit integers, signed or unsigned, out of a byte buffer at a given
//! offset, and turning such integers back into bytes. It is meant to sit underneath a file or
//! packet parser, not to be one.
//!
//! ## Features
//!
//! - **Explicit byte order** - Every multi-byte operation takes a [`ByteOrder`]; the host's
//!   endianness is never consulted
//! - **Bounds checked** - Reads past the end of a buffer return [`Error::OutOfBounds`] instead
//!   of panicking or returning garbage
//! - **No hidden fallbacks** - Failures are reported, never replaced by a default value
//! - **Static and dynamic APIs** - Generic functions over [`FixedWidth`] types, plus
//!   [`IntKind`] for layouts only known at runtime
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use fixedbytes::prelude::*;
//!
//! let data = [0x01, 0x00, 0xFF, 0xFF];
//!
//! assert_eq!(read_i16(&data, 0, ByteOrder::LittleEndian)?, 1);
//! assert_eq!(read_i16(&data, 2, ByteOrder::LittleEndian)?, -1);
//! assert_eq!(to_i16_array(&data), [1, -1]);
//! assert_eq!(to_hex_string(&data), "01 00 FF FF");
//!
//! // reading past the end is an error, not a crash
//! assert!(read_u32(&data, 2, ByteOrder::BigEndian).is_err());
//! # Ok::<(), fixedbytes::Error>(())
//! ```
//!
//! ## Sequential Parsing
//!
//! ```rust
//! use fixedbytes::Parser;
//!
//! let packet = [0x00, 0x2A, 0x10, 0x00, 0x00, 0x00];
//! let mut parser = Parser::new(&packet);
//!
//! let id = parser.read_be::<u16>()?;
//! let length = parser.read_le::<u32>()?;
//! assert_eq!((id, length), (42, 16));
//! # Ok::<(), fixedbytes::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`codec`] - The codec itself: trait, free functions, bulk views and the [`Parser`]
//! - [`prelude`] - Glob-importable re-exports of the common API
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`]. Narrowing conversions such as
//! [`first_two_bytes_big_endian`] are documented as lossy and are infallible.
//!
//! ## Thread Safety
//!
//! The crate holds no state. Every function only touches the buffers passed to it, so calls on
//! independent buffers can run concurrently without coordination.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use fixedbytes::prelude::*;
///
/// let bytes = write_u16(0x0102, ByteOrder::BigEndian);
/// assert_eq!(read_u16(&bytes, 0, ByteOrder::BigEndian)?, 0x0102);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
pub mod prelude;

/// The fixed-width integer codec.
///
/// See the module documentation for the full list of operations.
pub mod codec;

/// `fixedbytes` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `fixedbytes` Error type
///
/// The error type for all fallible operations in this crate.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{read_u16, ByteOrder, Error};
///
/// let err = read_u16(&[0x01], 0, ByteOrder::BigEndian).unwrap_err();
/// assert_eq!(err, Error::OutOfBounds { offset: 0, width: 2, len: 1 });
/// ```
pub use error::Error;

pub use codec::{
    decode, decode_at, encode, encode_value, first_two_bytes_big_endian, low_two_bytes, read,
    read_at, read_i16, read_i32, read_i8, read_u16, read_u32, read_u8, to_array, to_hex_string,
    to_i16_array, write, write_at, write_i16, write_i32, write_i8, write_u16, write_u32, write_u8,
    ByteOrder, FixedWidth, HexDump, IntKind, Parser,
};
