//! # ESC/POS Basic Commands
//!
//! Control bytes and the handful of fixed sequences every job uses:
//! initialization, the full cut, and real-time status requests.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Two bytes: `ESC @`
//! - Three bytes with a parameter: `ESC - n`, `GS ! n`, `DLE EOT n`
//! - Variable length with payload: `GS k m n data...`, `ESC Z ... data`
//!
//! ## Byte Order
//!
//! The only multi-byte integer on the wire is the QR payload length, which
//! is sent **big-endian**:
//! - `u16` value 0x1234 is sent as bytes `[0x12, 0x34]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for size, barcode and cutter commands.
pub const GS: u8 = 0x1D;

/// DLE (Data Link Escape) - Real-time command prefix
///
/// `DLE EOT n` is processed by the device as soon as it arrives, even when
/// the print buffer is full.
pub const DLE: u8 = 0x10;

/// EOT (End of Transmission) - Second byte of status requests
pub const EOT: u8 = 0x04;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets every mode set by earlier option
/// commands. Sent at the start of each print, barcode and QR job.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use escpos::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// Cutter function `m = 66`: feed by `n` then full cut.
const CUT_FEED_FULL: u8 = 66;

/// Feed amount sent with the cut, in motion units.
const CUT_FEED_UNITS: u8 = 30;

/// # Feed and Full Cut (GS V 66 n)
///
/// Feeds the paper `n` motion units past the cutter, then cuts.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | GS V B n       |
/// | Hex     | 1D 56 42 1E    |
/// | Decimal | 29 86 66 30    |
///
/// ## Example
///
/// ```
/// use escpos::protocol::commands;
///
/// assert_eq!(commands::cut_full(), vec![0x1D, b'V', 66, 30]);
/// ```
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![GS, b'V', CUT_FEED_FULL, CUT_FEED_UNITS]
}

// ============================================================================
// REAL-TIME STATUS
// ============================================================================

/// # Transmit Real-Time Status (DLE EOT n)
///
/// Asks the device to answer with a single status byte. The meaning of the
/// reply depends on `n`; see [`crate::status`] for the decoders.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | DLE EOT n    |
/// | Hex     | 10 04 n      |
/// | Decimal | 16 4 n       |
#[inline]
pub fn status_request(n: u8) -> Vec<u8> {
    vec![DLE, EOT, n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as big-endian bytes [high, low]
///
/// ## Example
///
/// ```
/// use escpos::protocol::commands::u16_be;
///
/// assert_eq!(u16_be(0x1234), [0x12, 0x34]);
/// assert_eq!(u16_be(300), [0x01, 0x2C]);
/// ```
#[inline]
pub const fn u16_be(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

// ============================================================================
// TESTS
// ============================================================================
