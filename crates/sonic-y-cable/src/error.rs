//! Error types for Y-cable register operations.
//!
//! All errors implement `std::error::Error` via `thiserror`. The driver in
//! [`crate::cable`] logs these and converts them to the legacy sentinel
//! values at its public boundary; nothing in this crate panics on a bad
//! register read.

use thiserror::Error;

/// Result type alias for Y-cable protocol operations.
pub type CableResult<T> = Result<T, CableError>;

/// Errors that can occur while reading or decoding cable registers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CableError {
    /// The port register accessor was never initialized. No register
    /// transaction is attempted in this state.
    #[error("port register accessor is not available")]
    TransportUnavailable,

    /// The accessor returned no data for a register read.
    #[error("eeprom read at offset {offset} returned no data")]
    ReadFailure {
        /// Register offset that was read.
        offset: u16,
    },

    /// The accessor returned a byte sequence of the wrong length. Every
    /// decoder in this protocol requires exactly one byte.
    #[error("eeprom read at offset {offset} returned {len} bytes, expected 1")]
    MalformedRead {
        /// Register offset that was read.
        offset: u16,
        /// Number of bytes actually returned.
        len: usize,
    },

    /// A successfully read byte does not match any enumerated state for
    /// its register.
    #[error("unknown status in register at offset {offset}: regval {value:#04x}")]
    UnrecognizedBitPattern {
        /// Register offset that was read.
        offset: u16,
        /// Raw byte value that failed to decode.
        value: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = CableError::MalformedRead {
            offset: 640,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "eeprom read at offset 640 returned 3 bytes, expected 1"
        );

        let err = CableError::UnrecognizedBitPattern {
            offset: 644,
            value: 0x02,
        };
        assert_eq!(
            err.to_string(),
            "unknown status in register at offset 644: regval 0x02"
        );
    }
}
