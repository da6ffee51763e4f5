//! # ESC/POS Barcode Commands
//!
//! This module implements 1D barcode and QR code commands.
//!
//! ## Supported Symbologies
//!
//! | Symbology | m  | Characters        | Length  |
//! |-----------|----|-------------------|---------|
//! | UPC-A     | 65 | `0`-`9`           | 11-12   |
//! | UPC-E     | 66 | `0`-`9`           | 11-12   |
//! | EAN-13    | 67 | `0`-`9`           | 12-13   |
//! | EAN-8     | 68 | `0`-`9`           | 7-8     |
//! | Code39    | 69 | codepoint 32-90   | 1-255   |
//! | ITF       | 70 | `0`-`9`           | 1-255   |
//! | Code93    | 72 | codepoint 0-127   | 1-255   |
//! | Codabar   | 73 | codepoint 36-68   | 1-255   |
//! | Code128   | 73 | codepoint 0-127   | 2-255   |
//!
//! Codabar and Code128 share type byte 73 on the NS8360L firmware these
//! tables were taken from.
//!
//! ## 1D Barcode Usage
//!
//! ```
//! use escpos::protocol::barcode::{self, Symbology};
//!
//! let cmd = barcode::barcode(Symbology::Ean8, "1234567").unwrap();
//! assert_eq!(&cmd[..4], &[0x1D, b'k', 68, 7]);
//! ```
//!
//! Layout (height, module width, start position) and HRI placement are
//! separate commands sent before the barcode itself.

use std::fmt;

use super::commands::{ESC, GS, u16_be};
use crate::error::{EscPosError, Result};

// ============================================================================
// SYMBOLOGY TABLE
// ============================================================================

/// Encoding limits of one symbology.
///
/// Both ranges are inclusive. Character bounds are Unicode codepoints, length
/// bounds are payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeSpec {
    /// `m` byte of `GS k m n data`
    pub type_code: u8,
    pub min_char: char,
    pub max_char: char,
    pub min_len: usize,
    pub max_len: usize,
}

impl BarcodeSpec {
    const fn new(type_code: u8, chars: (char, char), len: (usize, usize)) -> Self {
        Self {
            type_code,
            min_char: chars.0,
            max_char: chars.1,
            min_len: len.0,
            max_len: len.1,
        }
    }
}

const DIGITS: (char, char) = ('0', '9');
const ASCII: (char, char) = ('\u{0}', '\u{7F}');

/// Barcode symbologies understood by the `GS k` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Itf,
    Codabar,
    Code39,
    Code93,
    Code128,
}

impl Symbology {
    /// Every symbology, in table order.
    pub const ALL: [Symbology; 9] = [
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Itf,
        Symbology::Codabar,
        Symbology::Code39,
        Symbology::Code93,
        Symbology::Code128,
    ];

    /// Encoding limits for this symbology.
    pub const fn spec(self) -> BarcodeSpec {
        match self {
            Symbology::UpcA => BarcodeSpec::new(65, DIGITS, (11, 12)),
            Symbology::UpcE => BarcodeSpec::new(66, DIGITS, (11, 12)),
            Symbology::Ean13 => BarcodeSpec::new(67, DIGITS, (12, 13)),
            Symbology::Ean8 => BarcodeSpec::new(68, DIGITS, (7, 8)),
            Symbology::Itf => BarcodeSpec::new(70, DIGITS, (1, 255)),
            Symbology::Codabar => BarcodeSpec::new(73, ('\u{24}', '\u{44}'), (1, 255)),
            Symbology::Code39 => BarcodeSpec::new(69, ('\u{20}', '\u{5A}'), (1, 255)),
            Symbology::Code93 => BarcodeSpec::new(72, ASCII, (1, 255)),
            Symbology::Code128 => BarcodeSpec::new(73, ASCII, (2, 255)),
        }
    }

    /// Short lowercase name used on the command line.
    pub const fn slug(self) -> &'static str {
        match self {
            Symbology::UpcA => "upca",
            Symbology::UpcE => "upce",
            Symbology::Ean13 => "ean13",
            Symbology::Ean8 => "ean8",
            Symbology::Itf => "itf",
            Symbology::Codabar => "codabar",
            Symbology::Code39 => "code39",
            Symbology::Code93 => "code93",
            Symbology::Code128 => "code128",
        }
    }

    /// Parse a symbology name, ignoring case and `-`/`_` separators.
    ///
    /// ```
    /// use escpos::protocol::barcode::Symbology;
    ///
    /// assert_eq!(Symbology::parse("UPC-A"), Ok(Symbology::UpcA));
    /// assert_eq!(Symbology::parse("code_128"), Ok(Symbology::Code128));
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sym| sym.slug() == key)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.slug()).collect();
                format!("Unknown symbology '{}'. Use one of: {}", s, names.join(", "))
            })
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbology::UpcA => "UPC-A",
            Symbology::UpcE => "UPC-E",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Itf => "ITF",
            Symbology::Codabar => "Codabar",
            Symbology::Code39 => "Code39",
            Symbology::Code93 => "Code93",
            Symbology::Code128 => "Code128",
        };
        f.write_str(name)
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check `code` against the symbology's length and character limits.
///
/// Length is checked first, in bytes. Characters are then checked one
/// codepoint at a time and the first offender is reported.
pub fn validate(symbology: Symbology, code: &str) -> Result<()> {
    let spec = symbology.spec();

    let length = code.len();
    if length < spec.min_len || length > spec.max_len {
        return Err(EscPosError::BarcodeLength {
            symbology,
            length,
            min: spec.min_len,
            max: spec.max_len,
        });
    }

    if let Some(c) = code
        .chars()
        .find(|c| *c < spec.min_char || *c > spec.max_char)
    {
        return Err(EscPosError::BarcodeChar {
            symbology,
            codepoint: c as u32,
            min: spec.min_char as u32,
            max: spec.max_char as u32,
        });
    }

    Ok(())
}

// ============================================================================
// 1D BARCODE (GS k)
// ============================================================================

/// # Print Barcode (GS k m n data)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k m n d1...dn |
/// | Hex     | 1D 6B m n d1...dn |
///
/// ## Parameters
///
/// - `m`: symbology type code (see module table)
/// - `n`: payload length as a single byte, so at most 255
///
/// ## Errors
///
/// Fails validation (see [`validate`]) before any bytes are produced.
///
/// ## Example
///
/// ```
/// use escpos::protocol::barcode::{barcode, Symbology};
///
/// let cmd = barcode(Symbology::UpcA, "123456789012").unwrap();
/// assert_eq!(&cmd[..4], &[0x1D, b'k', 65, 12]);
/// assert_eq!(&cmd[4..], b"123456789012");
/// ```
pub fn barcode(symbology: Symbology, code: &str) -> Result<Vec<u8>> {
    validate(symbology, code)?;

    let data = code.as_bytes();
    let mut cmd = Vec::with_capacity(4 + data.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(symbology.spec().type_code);
    // validate() caps every symbology at 255 bytes
    cmd.push(data.len() as u8);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

// ============================================================================
// BARCODE LAYOUT
// ============================================================================

/// # Set Barcode Height (GS h n)
///
/// Height in dots.
#[inline]
pub fn height(n: u8) -> Vec<u8> {
    vec![GS, b'h', n]
}

/// # Set Barcode Module Width (GS w n)
#[inline]
pub fn width(n: u8) -> Vec<u8> {
    vec![GS, b'w', n]
}

/// # Set Barcode Horizontal Start Position (GS x n)
#[inline]
pub fn start_position(n: u8) -> Vec<u8> {
    vec![GS, b'x', n]
}

// ============================================================================
// HRI (HUMAN READABLE INTERPRETATION)
// ============================================================================

/// HRI font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriFont {
    #[default]
    FontA,
    FontB,
}

/// HRI position relative to the bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriPosition {
    /// No HRI text printed
    #[default]
    None,
    Top,
    Bottom,
    TopAndBottom,
}

/// # Select HRI Font (GS f n)
///
/// `n` is the ASCII digit `'0'` (font A) or `'1'` (font B).
pub fn hri_font(f: HriFont) -> Vec<u8> {
    let n = match f {
        HriFont::FontA => b'0',
        HriFont::FontB => b'1',
    };
    vec![GS, b'f', n]
}

/// # Select HRI Position (GS H n)
///
/// | Position       | n   |
/// |----------------|-----|
/// | None           | '0' |
/// | Top            | '1' |
/// | Bottom         | '2' |
/// | Top and bottom | '3' |
pub fn hri_position(p: HriPosition) -> Vec<u8> {
    let n = match p {
        HriPosition::None => b'0',
        HriPosition::Top => b'1',
        HriPosition::Bottom => b'2',
        HriPosition::TopAndBottom => b'3',
    };
    vec![GS, b'H', n]
}

// ============================================================================
// QR CODE (ESC Z)
// ============================================================================

/// Largest QR payload the 16-bit length field can describe.
pub const QR_MAX_LEN: usize = u16::MAX as usize;

/// # Print QR Code (ESC Z 0 ec type nH nL data)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC Z 0 ec t nH nL d1...dn |
/// | Hex     | 1B 5A 30 ec t nH nL d1...dn |
///
/// ## Parameters
///
/// - `ec`: error correction level byte, passed through as given
/// - `component_type`: component/module type byte, passed through as given
/// - `nH nL`: payload length, big-endian
///
/// ## Errors
///
/// [`EscPosError::QrTooLong`] when `data` is longer than [`QR_MAX_LEN`].
/// No other content check is made.
///
/// ## Example
///
/// ```
/// use escpos::protocol::barcode::qr_code;
///
/// let cmd = qr_code(b"hi", b'L', 4).unwrap();
/// assert_eq!(cmd, vec![0x1B, b'Z', b'0', b'L', 4, 0x00, 0x02, b'h', b'i']);
/// ```
pub fn qr_code(data: &[u8], ec: u8, component_type: u8) -> Result<Vec<u8>> {
    let len = u16::try_from(data.len()).map_err(|_| EscPosError::QrTooLong(data.len()))?;

    let mut cmd = Vec::with_capacity(7 + data.len());
    cmd.extend_from_slice(&[ESC, b'Z', b'0', ec, component_type]);
    cmd.extend_from_slice(&u16_be(len));
    cmd.extend_from_slice(data);
    Ok(cmd)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(c: char, n: usize) -> String {
        std::iter::repeat_n(c, n).collect()
    }

    #[test]
    fn test_type_codes() {
        let codes: Vec<u8> = Symbology::ALL.iter().map(|s| s.spec().type_code).collect();
        assert_eq!(codes, vec![65, 66, 67, 68, 70, 73, 69, 72, 73]);
    }

    #[test]
    fn test_length_bounds_accept_edges() {
        for sym in Symbology::ALL {
            let spec = sym.spec();
            // min_char is valid for every symbology
            assert!(validate(sym, &repeat(spec.min_char, spec.min_len)).is_ok(), "{sym} min");
            assert!(validate(sym, &repeat(spec.max_char, spec.max_len)).is_ok(), "{sym} max");
        }
    }

    #[test]
    fn test_length_bounds_reject_one_outside() {
        for sym in Symbology::ALL {
            let spec = sym.spec();
            let short = repeat(spec.min_char, spec.min_len - 1);
            let long = repeat(spec.min_char, spec.max_len + 1);
            for code in [short, long] {
                match validate(sym, &code) {
                    Err(EscPosError::BarcodeLength { length, min, max, .. }) => {
                        assert_eq!(length, code.len());
                        assert_eq!((min, max), (spec.min_len, spec.max_len));
                    }
                    other => panic!("{sym}: expected length error, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_char_bounds_reject_one_outside() {
        for sym in Symbology::ALL {
            let spec = sym.spec();
            let mut outside = vec![char::from_u32(spec.max_char as u32 + 1).unwrap()];
            if let Some(below) = (spec.min_char as u32).checked_sub(1) {
                outside.push(char::from_u32(below).unwrap());
            }
            for bad in outside {
                let mut code = repeat(spec.min_char, spec.min_len - 1);
                code.push(bad);
                match validate(sym, &code) {
                    Err(EscPosError::BarcodeChar { codepoint, min, max, .. }) => {
                        assert_eq!(codepoint, bad as u32);
                        assert_eq!(min, spec.min_char as u32);
                        assert_eq!(max, spec.max_char as u32);
                    }
                    other => panic!("{sym}: expected char error, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_length_checked_before_chars() {
        assert!(matches!(
            validate(Symbology::Ean8, "ABC"),
            Err(EscPosError::BarcodeLength { .. })
        ));
    }

    #[test]
    fn test_non_ascii_rejected() {
        // 'é' is two bytes; length 2 passes Code128, the codepoint does not
        assert!(matches!(
            validate(Symbology::Code128, "é"),
            Err(EscPosError::BarcodeChar { codepoint: 0xE9, .. })
        ));
    }

    #[test]
    fn test_barcode_upca() {
        let cmd = barcode(Symbology::UpcA, "123456789012").unwrap();
        let mut expected = vec![0x1D, 0x6B, 65, 12];
        expected.extend_from_slice(b"123456789012");
        assert_eq!(cmd, expected);
    }

    #[test]
    fn test_barcode_max_length_byte() {
        let code = repeat('7', 255);
        let cmd = barcode(Symbology::Itf, &code).unwrap();
        assert_eq!(cmd[3], 255);
        assert_eq!(cmd.len(), 4 + 255);
    }

    #[test]
    fn test_layout_commands() {
        assert_eq!(height(162), vec![0x1D, 0x68, 162]);
        assert_eq!(width(3), vec![0x1D, 0x77, 3]);
        assert_eq!(start_position(10), vec![0x1D, 0x78, 10]);
    }

    #[test]
    fn test_hri_commands() {
        assert_eq!(hri_font(HriFont::FontA), vec![0x1D, b'f', b'0']);
        assert_eq!(hri_font(HriFont::FontB), vec![0x1D, b'f', b'1']);
        assert_eq!(hri_position(HriPosition::None), vec![0x1D, b'H', b'0']);
        assert_eq!(hri_position(HriPosition::Top), vec![0x1D, b'H', b'1']);
        assert_eq!(hri_position(HriPosition::Bottom), vec![0x1D, b'H', b'2']);
        assert_eq!(
            hri_position(HriPosition::TopAndBottom),
            vec![0x1D, b'H', b'3']
        );
    }

    #[test]
    fn test_qr_length_big_endian() {
        let data = vec![b'x'; 300];
        let cmd = qr_code(&data, 2, 3).unwrap();
        assert_eq!(&cmd[..7], &[0x1B, 0x5A, 0x30, 2, 3, 0x01, 0x2C]);
        assert_eq!(cmd.len(), 7 + 300);
    }

    #[test]
    fn test_qr_empty_payload() {
        assert_eq!(
            qr_code(b"", 0, 0).unwrap(),
            vec![0x1B, 0x5A, 0x30, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_qr_too_long() {
        let data = vec![0u8; QR_MAX_LEN + 1];
        assert!(matches!(
            qr_code(&data, 0, 0),
            Err(EscPosError::QrTooLong(n)) if n == QR_MAX_LEN + 1
        ));
    }

    #[test]
    fn test_parse_symbology() {
        assert_eq!(Symbology::parse("ean-13"), Ok(Symbology::Ean13));
        assert_eq!(Symbology::parse("ITF"), Ok(Symbology::Itf));
        assert!(Symbology::parse("pdf417").is_err());
        for sym in Symbology::ALL {
            assert_eq!(Symbology::parse(sym.slug()), Ok(sym));
        }
    }
}
