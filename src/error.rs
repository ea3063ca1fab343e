use thiserror::Error;

use crate::codec::IntKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    ($offset:expr, $width:expr, $len:expr) => {
        crate::Error::OutOfBounds {
            offset: $offset,
            width: $width,
            len: $len,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every fallible codec operation reports its failure through this type. Nothing in the crate
/// substitutes a default value for a failed decode, so callers always see whether a value was
/// read, or why it could not be.
///
/// # Error Categories
///
/// - [`Error::OutOfBounds`] - A read, write or seek would have crossed the end of the buffer
/// - [`Error::ValueOutOfRange`] - A value does not fit the integer kind it should be encoded as
/// - [`Error::Malformed`] - An operation was called with invalid parameters
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{read_u32, ByteOrder, Error};
///
/// let data = [0x01, 0x02];
/// match read_u32(&data, 0, ByteOrder::LittleEndian) {
///     Ok(value) => println!("value: {}", value),
///     Err(Error::OutOfBounds { offset, width, len }) => {
///         eprintln!("need {} bytes at {}, buffer has {}", width, offset, len);
///     }
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An out of bound access was attempted.
    ///
    /// Raised whenever `offset + width` exceeds the length of the buffer, including the case
    /// where that sum would overflow `usize`. The buffer is never partially read or written.
    ///
    /// # Fields
    ///
    /// * `offset` - Position of the first byte of the attempted access
    /// * `width` - Number of bytes the access required
    /// * `len` - Length of the buffer
    #[error("Out of bound access would have occurred! {width} byte(s) at offset {offset}, buffer length {len}")]
    OutOfBounds {
        /// Position of the first byte of the attempted access
        offset: usize,
        /// Number of bytes the access required
        width: usize,
        /// Length of the buffer
        len: usize,
    },

    /// A value cannot be represented by the requested integer kind.
    ///
    /// Only the dynamically typed encoder raises this; the statically typed encoders accept
    /// native Rust integers, which always fit.
    #[error("Value {value} is not representable as {kind}")]
    ValueOutOfRange {
        /// The rejected value
        value: i64,
        /// The kind the value was supposed to be encoded as
        kind: IntKind,
    },

    /// An operation was called with parameters it cannot work with.
    ///
    /// Includes the source location where the problem was detected for debugging purposes.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}
