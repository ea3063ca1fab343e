//! Byte order selection for multi-byte values.
//!
//! Every multi-byte operation in this crate takes a [`ByteOrder`] argument. There is
//! deliberately no `Default` implementation and no "native" variant: the order a value is
//! stored in is a property of the format being parsed, never of the machine doing the parsing.

use std::fmt;

use strum::{EnumCount, EnumIter};

/// The convention used to order the bytes of a multi-byte integer.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{read_u16, ByteOrder};
///
/// let data = [0x01, 0x02];
/// assert_eq!(read_u16(&data, 0, ByteOrder::BigEndian)?, 0x0102);
/// assert_eq!(read_u16(&data, 0, ByteOrder::LittleEndian)?, 0x0201);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ByteOrder {
    /// Most significant byte first
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Returns the opposite byte order.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::BigEndian => write!(f, "big-endian"),
            ByteOrder::LittleEndian => write!(f, "little-endian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn reversed() {
        for order in ByteOrder::iter() {
            assert_ne!(order, order.reversed());
            assert_eq!(order, order.reversed().reversed());
        }
    }

    #[test]
    fn display() {
        assert_eq!(ByteOrder::BigEndian.to_string(), "big-endian");
        assert_eq!(ByteOrder::LittleEndian.to_string(), "little-endian");
        assert_eq!(ByteOrder::COUNT, 2);
    }
}
