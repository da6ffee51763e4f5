//! # ESC/POS Text Styling Commands
//!
//! Builders for the formatting commands a print job may send between
//! initialization and payload.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Negative | GS B 1 | White on black |
//! | Font | ESC M n | Font A or B |
//! | Underline | ESC - n | 0 = off, 1 = thin, 2 = thick |
//! | Emphasize | ESC E 1 | **Bold** text |
//! | Rotate | ESC V 1 | 90° clockwise |
//! | Justify | ESC a n | Left, center, right |
//! | Size | GS ! n | 1-8x height and width |
//! | Line spacing | ESC 3 n | n motion units per line |
//!
//! Every style is reset by `ESC @`, so each job starts from defaults and
//! only the styles passed to that job are in effect.

use super::commands::{ESC, GS};
use crate::error::{EscPosError, Result};

// ============================================================================
// NEGATIVE (REVERSE VIDEO)
// ============================================================================

/// # Enable Reverse Printing (GS B 1)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS B n   |
/// | Hex     | 1D 42 01 |
#[inline]
pub fn negative() -> Vec<u8> {
    vec![GS, b'B', 1]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A,
    /// Font B: 9×17 dots
    B,
}

/// # Select Font (ESC M n)
///
/// The font selector is sent as an ASCII digit.
///
/// | Font | Bytes      |
/// |------|------------|
/// | A    | 1B 4D 30   |
/// | B    | 1B 4D 31   |
///
/// ## Example
///
/// ```
/// use escpos::protocol::text::{font, Font};
///
/// assert_eq!(font(Font::B), vec![0x1B, b'M', b'1']);
/// ```
pub fn font(f: Font) -> Vec<u8> {
    let n = match f {
        Font::A => b'0',
        Font::B => b'1',
    };
    vec![ESC, b'M', n]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// Thickest underline the device accepts.
pub const MAX_UNDERLINE: u8 = 2;

/// # Set Underline (ESC - n)
///
/// ## Parameters
///
/// - `thickness = 0`: underline off
/// - `thickness = 1`: one-dot underline
/// - `thickness = 2`: two-dot underline
///
/// ## Errors
///
/// [`EscPosError::UnderlineThickness`] for any other value. Nothing is
/// produced in that case.
pub fn underline(thickness: u8) -> Result<Vec<u8>> {
    if thickness > MAX_UNDERLINE {
        return Err(EscPosError::UnderlineThickness(thickness));
    }
    Ok(vec![ESC, b'-', thickness])
}

// ============================================================================
// EMPHASIS / ROTATION
// ============================================================================

/// # Enable Emphasized Mode (ESC E 1)
#[inline]
pub fn emphasize() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// # Enable 90° Clockwise Rotation (ESC V 1)
///
/// The rotation flag is sent as the ASCII digit `'1'`.
#[inline]
pub fn rotate() -> Vec<u8> {
    vec![ESC, b'V', b'1']
}

// ============================================================================
// JUSTIFICATION
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// | Alignment | Bytes    |
/// |-----------|----------|
/// | Left      | 1B 61 00 |
/// | Center    | 1B 61 01 |
/// | Right     | 1B 61 02 |
pub fn justify(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Select Character Size (GS ! n)
///
/// Width multiplier goes in the high nibble, height in the low nibble, both
/// stored as `multiplier - 1`.
///
/// ```text
///   bit  7 6 5 4 | 3 2 1 0
///        width-1 | height-1
/// ```
///
/// ## Parameters
///
/// - `height`, `width`: magnification, 1-8
///
/// Values are not range checked. A zero wraps around to `0xFF` before
/// packing, so a zero height sets every bit of `n`.
///
/// ## Example
///
/// ```
/// use escpos::protocol::text::size;
///
/// assert_eq!(size(2, 3), vec![0x1D, b'!', 0x21]);
/// ```
pub fn size(height: u8, width: u8) -> Vec<u8> {
    let n = (width.wrapping_sub(1) << 4) | height.wrapping_sub(1);
    vec![GS, b'!', n]
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// # Set Line Spacing (ESC 3 n)
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative() {
        assert_eq!(negative(), vec![0x1D, 0x42, 0x01]);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(Font::A), vec![0x1B, 0x4D, 0x30]);
        assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x31]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline(0).unwrap(), vec![0x1B, 0x2D, 0x00]);
        assert_eq!(underline(1).unwrap(), vec![0x1B, 0x2D, 0x01]);
        assert_eq!(underline(2).unwrap(), vec![0x1B, 0x2D, 0x02]);
    }

    #[test]
    fn test_underline_out_of_range() {
        assert!(matches!(
            underline(3),
            Err(EscPosError::UnderlineThickness(3))
        ));
        assert!(matches!(
            underline(255),
            Err(EscPosError::UnderlineThickness(255))
        ));
    }

    #[test]
    fn test_emphasize_and_rotate() {
        assert_eq!(emphasize(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(rotate(), vec![0x1B, 0x56, 0x31]);
    }

    #[test]
    fn test_justify() {
        assert_eq!(justify(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(justify(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(justify(Alignment::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_size() {
        assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x00]);
        assert_eq!(size(2, 3), vec![0x1D, 0x21, 0x21]);
        assert_eq!(size(8, 8), vec![0x1D, 0x21, 0x77]);
    }

    #[test]
    fn test_size_zero_wraps() {
        // 0 - 1 wraps to 0xFF
        assert_eq!(size(0, 1), vec![0x1D, 0x21, 0xFF]);
        assert_eq!(size(1, 0), vec![0x1D, 0x21, 0xF0]);
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(line_spacing(0), vec![0x1B, 0x33, 0x00]);
        assert_eq!(line_spacing(60), vec![0x1B, 0x33, 60]);
    }
}
