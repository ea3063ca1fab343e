//! Cursor-based sequential reader over a borrowed byte buffer.
//!
//! This module provides the [`crate::codec::parser::Parser`] type, which keeps a position
//! within a byte slice and reads fixed-width values one after another. Higher-level format
//! parsers (file headers, packet layouts) build on it instead of threading a `&mut usize`
//! offset through every call.
//!
//! # Architecture
//!
//! The parser wraps the free functions of [`crate::codec::io`] and adds:
//!
//! - **Position tracking** - Maintains the current offset for sequential reads
//! - **Bounds checking** - Every read and every move is validated against the data length
//! - **Atomic failure** - A failed read leaves the position where it was
//! - **Speculation** - [`crate::codec::parser::Parser::transactional`] rolls back on error
//!
//! # Usage Examples
//!
//! ```rust
//! use fixedbytes::{ByteOrder, IntKind, Parser};
//!
//! // magic (u16 BE), version (u8), record count (u32 LE)
//! let header = [0xCA, 0xFE, 0x02, 0x03, 0x00, 0x00, 0x00];
//! let mut parser = Parser::new(&header);
//!
//! let magic = parser.read_be::<u16>()?;
//! let version = parser.read_kind(IntKind::U8, ByteOrder::LittleEndian)?;
//! let records = parser.read_le::<u32>()?;
//!
//! assert_eq!((magic, version, records), (0xCAFE, 2, 3));
//! assert!(!parser.has_more_data());
//! # Ok::<(), fixedbytes::Error>(())
//! ```

use crate::{
    codec::{
        io::{read_at, FixedWidth},
        kind::{decode_at, IntKind},
        ByteOrder,
    },
    Result,
};

/// A cursor over a byte slice for reading fixed-width values in sequence.
///
/// `Parser` borrows its data and never copies it. All reads are bounds checked; reads that
/// would cross the end of the data return [`crate::Error::OutOfBounds`] and leave the cursor
/// untouched.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::Parser;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut parser = Parser::new(&data);
///
/// let first = parser.read_le::<u32>()?;
/// assert_eq!(first, 0x04030201);
///
/// parser.seek(6)?;
/// let last = parser.read_le::<u16>()?;
/// assert_eq!(last, 0x0807);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`Parser`] positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Returns the number of bytes between the current position and the end of the data.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Get access to the whole underlying data buffer, regardless of position.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Move the current position to the specified index.
    ///
    /// Seeking to `len()` is allowed and leaves the parser at the end of the data.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `pos` is beyond the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedbytes::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// parser.seek(2)?;
    /// assert_eq!(parser.read_le::<u8>()?, 0x03);
    /// assert!(parser.seek(5).is_err());
    /// # Ok::<(), fixedbytes::Error>(())
    /// ```
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(out_of_bounds_error!(pos, 0, self.data.len()));
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by one byte.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing would exceed the data length.
    pub fn advance(&mut self) -> Result<()> {
        self.advance_by(1)
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by `step` would exceed the data
    /// length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        match self.position.checked_add(step) {
            Some(end) if end <= self.data.len() => {
                self.position = end;
                Ok(())
            }
            _ => Err(out_of_bounds_error!(self.position, step, self.data.len())),
        }
    }

    /// Align the position to a specific boundary.
    ///
    /// Advances to the next multiple of `alignment`; does nothing when already aligned.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if `alignment` is not a non-zero power of two, and
    /// [`crate::Error::OutOfBounds`] if aligning would exceed the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedbytes::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    /// let mut parser = Parser::new(&data);
    ///
    /// parser.advance()?;
    /// parser.align(4)?;
    /// assert_eq!(parser.pos(), 4);
    /// # Ok::<(), fixedbytes::Error>(())
    /// ```
    pub fn align(&mut self, alignment: usize) -> Result<()> {
        if !alignment.is_power_of_two() {
            return Err(malformed_error!(
                "Alignment must be a non-zero power of two - {}",
                alignment
            ));
        }

        let padding = (alignment - (self.position % alignment)) % alignment;
        self.advance_by(padding)
    }

    /// Peek at the next byte without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the position is at the end of the data.
    pub fn peek_byte(&self) -> Result<u8> {
        self.peek::<u8>(ByteOrder::LittleEndian)
    }

    /// Peek at a value of type `T` without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `T` would exceed the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedbytes::{ByteOrder, Parser};
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let parser = Parser::new(&data);
    ///
    /// let peeked: u16 = parser.peek(ByteOrder::LittleEndian)?;
    /// assert_eq!(peeked, 0x0201);
    /// assert_eq!(parser.pos(), 0);
    /// # Ok::<(), fixedbytes::Error>(())
    /// ```
    pub fn peek<T: FixedWidth>(&self, order: ByteOrder) -> Result<T> {
        let mut temp_position = self.position;
        read_at::<T>(self.data, &mut temp_position, order)
    }

    /// Read a value of type `T` in the given byte order and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read<T: FixedWidth>(&mut self, order: ByteOrder) -> Result<T> {
        read_at::<T>(self.data, &mut self.position, order)
    }

    /// Read a type `T` in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: FixedWidth>(&mut self) -> Result<T> {
        self.read(ByteOrder::LittleEndian)
    }

    /// Read a type `T` in big-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_be<T: FixedWidth>(&mut self) -> Result<T> {
        self.read(ByteOrder::BigEndian)
    }

    /// Read a value whose kind is only known at runtime and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_kind(&mut self, kind: IntKind, order: ByteOrder) -> Result<i64> {
        decode_at(self.data, &mut self.position, kind, order)
    }

    /// Borrow the next `count` bytes and advance the position past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `count` bytes remain.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let data = self.data;
        let start = self.position;
        self.advance_by(count)?;
        Ok(&data[start..self.position])
    }

    /// Execute a closure transactionally, rolling back on failure.
    ///
    /// The position is saved before calling `f` and restored if `f` returns `Err`. On success
    /// the position reflects everything `f` consumed.
    ///
    /// # Errors
    /// Returns any error produced by the closure `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedbytes::Parser;
    /// let mut parser = Parser::new(&[0x01, 0x02, 0x03]);
    ///
    /// // u16 fits, u32 does not: the whole pair is rolled back
    /// let result = parser.transactional(|p| {
    ///     let a = p.read_le::<u16>()?;
    ///     let b = p.read_le::<u32>()?;
    ///     Ok((a, b))
    /// });
    /// assert!(result.is_err());
    /// assert_eq!(parser.pos(), 0);
    /// ```
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved_position = self.position;
        let result = f(self);
        if result.is_err() {
            self.position = saved_position;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn basic_navigation() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.len(), 4);
        assert!(!parser.is_empty());
        assert_eq!(parser.remaining(), 4);

        parser.advance().unwrap();
        assert_eq!(parser.pos(), 1);

        parser.advance_by(2).unwrap();
        assert_eq!(parser.pos(), 3);
        assert_eq!(parser.remaining(), 1);

        assert!(matches!(
            parser.advance_by(2),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(parser.pos(), 3);

        parser.seek(4).unwrap();
        assert!(!parser.has_more_data());
        assert!(parser.seek(5).is_err());
        assert_eq!(parser.pos(), 4);

        assert!(parser.advance_by(usize::MAX).is_err());
    }

    #[test]
    fn empty_parser() {
        let mut parser = Parser::new(&[]);

        assert!(parser.is_empty());
        assert!(!parser.has_more_data());
        assert!(parser.peek_byte().is_err());
        assert!(parser.read_le::<u8>().is_err());
        assert!(parser.seek(0).is_ok());
    }

    #[test]
    fn mixed_order_reads() {
        let data = [0x12, 0x34, 0x78, 0x56, 0xFF, 0xFF, 0xFF, 0xFE];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_be::<u16>().unwrap(), 0x1234);
        assert_eq!(parser.read_le::<u16>().unwrap(), 0x5678);
        assert_eq!(parser.read::<i32>(ByteOrder::BigEndian).unwrap(), -2);
        assert!(!parser.has_more_data());

        assert_eq!(
            parser.read_le::<u8>(),
            Err(Error::OutOfBounds {
                offset: 8,
                width: 1,
                len: 8
            })
        );
    }

    #[test]
    fn failed_read_keeps_position() {
        let data = [0x01, 0x02, 0x03];
        let mut parser = Parser::new(&data);

        parser.advance().unwrap();
        assert!(parser.read_le::<u32>().is_err());
        assert_eq!(parser.pos(), 1);
        assert_eq!(parser.read_le::<u16>().unwrap(), 0x0302);
    }

    #[test]
    fn peek_does_not_advance() {
        let data = [0xAB, 0xCD];
        let parser = Parser::new(&data);

        assert_eq!(parser.peek_byte().unwrap(), 0xAB);
        assert_eq!(parser.peek::<u16>(ByteOrder::BigEndian).unwrap(), 0xABCD);
        assert_eq!(parser.pos(), 0);
    }

    #[test]
    fn read_kind_and_bytes() {
        let data = [0xFF, 0xFE, b'o', b'k', 0x80];
        let mut parser = Parser::new(&data);

        assert_eq!(
            parser.read_kind(IntKind::I16, ByteOrder::BigEndian).unwrap(),
            -2
        );
        assert_eq!(parser.read_bytes(2).unwrap(), b"ok");
        assert_eq!(
            parser.read_kind(IntKind::I8, ByteOrder::LittleEndian).unwrap(),
            -128
        );
        assert!(parser.read_bytes(1).is_err());
        assert_eq!(parser.read_bytes(0).unwrap(), b"");
    }

    #[test]
    fn alignment() {
        let data = [0u8; 8];
        let mut parser = Parser::new(&data);

        parser.align(4).unwrap();
        assert_eq!(parser.pos(), 0);

        parser.advance().unwrap();
        parser.align(4).unwrap();
        assert_eq!(parser.pos(), 4);

        parser.advance().unwrap();
        parser.align(8).unwrap();
        assert_eq!(parser.pos(), 8);

        parser.seek(7).unwrap();
        assert!(matches!(parser.align(16), Err(Error::OutOfBounds { .. })));
        assert_eq!(parser.pos(), 7);

        assert!(matches!(parser.align(0), Err(Error::Malformed { .. })));
        assert!(matches!(parser.align(3), Err(Error::Malformed { .. })));
    }

    #[test]
    fn transactional_rollback() {
        let data = [0x01, 0x00, 0x02];
        let mut parser = Parser::new(&data);

        let value = parser.transactional(|p| p.read_le::<u16>()).unwrap();
        assert_eq!(value, 1);
        assert_eq!(parser.pos(), 2);

        let result = parser.transactional(|p| {
            p.advance()?;
            p.read_le::<u8>()
        });
        assert!(result.is_err());
        assert_eq!(parser.pos(), 2);
    }
}
