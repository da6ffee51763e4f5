//! # Error Types
//!
//! This module defines error types used throughout the escpos library.
//!
//! Validation errors are raised before any byte of the failing call reaches
//! the channel. I/O errors come straight from the channel and are never
//! retried or wrapped in recovery logic.

use thiserror::Error;

use crate::printer::config::Capability;
use crate::protocol::barcode::Symbology;

/// Main error type for escpos operations
#[derive(Debug, Error)]
pub enum EscPosError {
    /// I/O error from the underlying channel
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Barcode payload length outside the symbology's allowed range
    #[error("{symbology} code length ({length}) not in range ({min} <= len <= {max})")]
    BarcodeLength {
        symbology: Symbology,
        length: usize,
        min: usize,
        max: usize,
    },

    /// Barcode payload contains a character outside the allowed range
    #[error("{symbology} char ({codepoint}) in code is out of range ({min}, {max})")]
    BarcodeChar {
        symbology: Symbology,
        codepoint: u32,
        min: u32,
        max: u32,
    },

    /// Underline thickness other than 0, 1 or 2
    #[error("underline thickness ({0}) has to be between 0 and 2")]
    UnderlineThickness(u8),

    /// QR payload does not fit the 16-bit length field
    #[error("QR code payload length ({0}) exceeds {max}", max = u16::MAX)]
    QrTooLong(usize),

    /// Operation not available on the configured printer model
    #[error("{model} does not support {capability}")]
    Unsupported {
        model: String,
        capability: Capability,
    },

    /// Transport-level errors (opening or configuring a device)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Printer profile could not be parsed or loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid command or parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EscPosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_length_message_carries_bounds() {
        let err = EscPosError::BarcodeLength {
            symbology: Symbology::UpcA,
            length: 10,
            min: 11,
            max: 12,
        };
        assert_eq!(
            err.to_string(),
            "UPC-A code length (10) not in range (11 <= len <= 12)"
        );
    }

    #[test]
    fn test_barcode_char_message_carries_codepoint() {
        let err = EscPosError::BarcodeChar {
            symbology: Symbology::Ean8,
            codepoint: 'A' as u32,
            min: '0' as u32,
            max: '9' as u32,
        };
        assert_eq!(
            err.to_string(),
            "EAN-8 char (65) in code is out of range (48, 57)"
        );
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: EscPosError = io.into();
        assert!(matches!(err, EscPosError::Io(_)));
    }
}
