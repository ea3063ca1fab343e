//! Runtime description of fixed-width integer kinds.
//!
//! [`IntKind`] combines a width (8, 16 or 32 bits) with a signedness, for callers that only
//! learn the layout of a field while parsing, e.g. from a format descriptor. Values travel as
//! `i64`, which holds every value of every kind without loss.

use std::fmt;

use strum::{EnumCount, EnumIter};

use crate::{
    codec::{
        io::{encode, read_at},
        ByteOrder,
    },
    Error, Result,
};

/// Width and signedness of a fixed-width integer field.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::IntKind;
///
/// assert_eq!(IntKind::I16.width(), 2);
/// assert!(IntKind::I16.is_signed());
/// assert_eq!(IntKind::U32.max_value(), i64::from(u32::MAX));
/// assert!(!IntKind::U8.contains(-1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum IntKind {
    /// Unsigned 8-bit
    U8,
    /// Signed 8-bit
    I8,
    /// Unsigned 16-bit
    U16,
    /// Signed 16-bit
    I16,
    /// Unsigned 32-bit
    U32,
    /// Signed 32-bit
    I32,
}

impl IntKind {
    /// Number of bytes a value of this kind occupies.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            IntKind::U8 | IntKind::I8 => 1,
            IntKind::U16 | IntKind::I16 => 2,
            IntKind::U32 | IntKind::I32 => 4,
        }
    }

    /// Number of bits a value of this kind occupies.
    #[must_use]
    pub fn bits(self) -> u32 {
        (self.width() * 8) as u32
    }

    /// Returns `true` for two's complement kinds.
    #[must_use]
    pub fn is_signed(self) -> bool {
        matches!(self, IntKind::I8 | IntKind::I16 | IntKind::I32)
    }

    /// Smallest value representable by this kind.
    #[must_use]
    pub fn min_value(self) -> i64 {
        match self {
            IntKind::U8 | IntKind::U16 | IntKind::U32 => 0,
            IntKind::I8 => i64::from(i8::MIN),
            IntKind::I16 => i64::from(i16::MIN),
            IntKind::I32 => i64::from(i32::MIN),
        }
    }

    /// Largest value representable by this kind.
    #[must_use]
    pub fn max_value(self) -> i64 {
        match self {
            IntKind::U8 => i64::from(u8::MAX),
            IntKind::I8 => i64::from(i8::MAX),
            IntKind::U16 => i64::from(u16::MAX),
            IntKind::I16 => i64::from(i16::MAX),
            IntKind::U32 => i64::from(u32::MAX),
            IntKind::I32 => i64::from(i32::MAX),
        }
    }

    /// Returns `true` if `value` can be encoded as this kind without loss.
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntKind::U8 => "u8",
            IntKind::I8 => "i8",
            IntKind::U16 => "u16",
            IntKind::I16 => "i16",
            IntKind::U32 => "u32",
            IntKind::I32 => "i32",
        };
        f.write_str(name)
    }
}

/// Reads a value of a runtime-selected kind and advances the offset past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + kind.width()` exceeds the buffer length.
/// The offset is left unchanged in that case.
pub fn decode_at(
    data: &[u8],
    offset: &mut usize,
    kind: IntKind,
    order: ByteOrder,
) -> Result<i64> {
    let value = match kind {
        IntKind::U8 => i64::from(read_at::<u8>(data, offset, order)?),
        IntKind::I8 => i64::from(read_at::<i8>(data, offset, order)?),
        IntKind::U16 => i64::from(read_at::<u16>(data, offset, order)?),
        IntKind::I16 => i64::from(read_at::<i16>(data, offset, order)?),
        IntKind::U32 => i64::from(read_at::<u32>(data, offset, order)?),
        IntKind::I32 => i64::from(read_at::<i32>(data, offset, order)?),
    };

    Ok(value)
}

/// Reads a value of a runtime-selected kind at a fixed offset.
///
/// Unsigned values are zero-extended and signed values sign-extended into the returned `i64`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + kind.width()` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{decode, ByteOrder, IntKind};
///
/// let data = [0xFF, 0xFE];
/// assert_eq!(decode(&data, 0, IntKind::U16, ByteOrder::BigEndian)?, 0xFFFE);
/// assert_eq!(decode(&data, 0, IntKind::I16, ByteOrder::BigEndian)?, -2);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
pub fn decode(data: &[u8], offset: usize, kind: IntKind, order: ByteOrder) -> Result<i64> {
    let mut cursor = offset;
    decode_at(data, &mut cursor, kind, order)
}

/// Encodes a value as a runtime-selected kind into exactly `kind.width()` bytes.
///
/// # Errors
///
/// Returns [`crate::Error::ValueOutOfRange`] if `value` is outside
/// `kind.min_value()..=kind.max_value()`. Values are never silently truncated here; use
/// [`crate::codec::narrow`] for deliberate narrowing.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{encode_value, ByteOrder, Error, IntKind};
///
/// assert_eq!(encode_value(-2, IntKind::I16, ByteOrder::LittleEndian)?, vec![0xFE, 0xFF]);
/// assert!(matches!(
///     encode_value(256, IntKind::U8, ByteOrder::LittleEndian),
///     Err(Error::ValueOutOfRange { .. })
/// ));
/// # Ok::<(), fixedbytes::Error>(())
/// ```
pub fn encode_value(value: i64, kind: IntKind, order: ByteOrder) -> Result<Vec<u8>> {
    let out_of_range = || Error::ValueOutOfRange { value, kind };

    let bytes = match kind {
        IntKind::U8 => encode(u8::try_from(value).map_err(|_| out_of_range())?, order),
        IntKind::I8 => encode(i8::try_from(value).map_err(|_| out_of_range())?, order),
        IntKind::U16 => encode(u16::try_from(value).map_err(|_| out_of_range())?, order),
        IntKind::I16 => encode(i16::try_from(value).map_err(|_| out_of_range())?, order),
        IntKind::U32 => encode(u32::try_from(value).map_err(|_| out_of_range())?, order),
        IntKind::I32 => encode(i32::try_from(value).map_err(|_| out_of_range())?, order),
    };

    Ok(bytes)
}
