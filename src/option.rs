//! # Print Options
//!
//! A [`PrintOption`] is a formatting instruction held as plain data until a
//! print, barcode or QR job applies it. Jobs apply their options strictly in
//! the order given, after `ESC @` and before the payload. Each option is one
//! write on the channel.
//!
//! Options carry no state of their own. When two options conflict (say,
//! [`PrintOption::FontA`] then [`PrintOption::FontB`]) the device keeps the
//! later one; the encoder does not reorder or deduplicate.
//!
//! ```
//! use escpos::option::PrintOption;
//! use escpos::protocol::text::Alignment;
//!
//! let opts = [
//!     PrintOption::Justify(Alignment::Center),
//!     PrintOption::Emphasize,
//!     PrintOption::Size { height: 2, width: 2 },
//! ];
//! assert_eq!(opts[2].encode().unwrap(), vec![0x1D, b'!', 0x11]);
//! ```

use std::io::Write;

use crate::error::Result;
use crate::protocol::barcode::{self, HriFont, HriPosition};
use crate::protocol::text::{self, Alignment, Font};

/// One deferred formatting command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOption {
    /// Reverse video (`GS B 1`)
    Negative,
    /// `ESC M '0'`
    FontA,
    /// `ESC M '1'`
    FontB,
    /// Underline thickness 0-2 (`ESC - n`); other values fail on encode
    Underline(u8),
    /// Bold (`ESC E 1`)
    Emphasize,
    /// 90° rotation (`ESC V '1'`)
    Rotate,
    /// `ESC a n`
    Justify(Alignment),
    /// Character magnification, each 1-8 (`GS ! n`)
    Size { height: u8, width: u8 },
    /// `ESC 3 n`
    LineSpacing(u8),
    /// `GS h n`
    BarcodeHeight(u8),
    /// `GS w n`
    BarcodeWidth(u8),
    /// `GS x n`
    BarcodeStartPosition(u8),
    /// `GS f n`
    BarcodeHriFont(HriFont),
    /// `GS H n`
    BarcodeHri(HriPosition),
    /// Caller-defined bytes, written verbatim
    Raw(Vec<u8>),
}

impl PrintOption {
    pub const JUSTIFY_LEFT: Self = PrintOption::Justify(Alignment::Left);
    pub const JUSTIFY_CENTER: Self = PrintOption::Justify(Alignment::Center);
    pub const JUSTIFY_RIGHT: Self = PrintOption::Justify(Alignment::Right);
    pub const HRI_FONT_A: Self = PrintOption::BarcodeHriFont(HriFont::FontA);
    pub const HRI_FONT_B: Self = PrintOption::BarcodeHriFont(HriFont::FontB);
    pub const NO_HRI: Self = PrintOption::BarcodeHri(HriPosition::None);
    pub const HRI_TOP: Self = PrintOption::BarcodeHri(HriPosition::Top);
    pub const HRI_BOTTOM: Self = PrintOption::BarcodeHri(HriPosition::Bottom);
    pub const HRI_TOP_AND_BOTTOM: Self = PrintOption::BarcodeHri(HriPosition::TopAndBottom);

    /// Select a font by value.
    pub fn font(f: Font) -> Self {
        match f {
            Font::A => PrintOption::FontA,
            Font::B => PrintOption::FontB,
        }
    }

    /// Bytes this option writes.
    ///
    /// ## Errors
    ///
    /// Only [`PrintOption::Underline`] can fail, with
    /// [`crate::EscPosError::UnderlineThickness`].
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            PrintOption::Negative => text::negative(),
            PrintOption::FontA => text::font(Font::A),
            PrintOption::FontB => text::font(Font::B),
            PrintOption::Underline(thickness) => text::underline(*thickness)?,
            PrintOption::Emphasize => text::emphasize(),
            PrintOption::Rotate => text::rotate(),
            PrintOption::Justify(a) => text::justify(*a),
            PrintOption::Size { height, width } => text::size(*height, *width),
            PrintOption::LineSpacing(n) => text::line_spacing(*n),
            PrintOption::BarcodeHeight(n) => barcode::height(*n),
            PrintOption::BarcodeWidth(n) => barcode::width(*n),
            PrintOption::BarcodeStartPosition(n) => barcode::start_position(*n),
            PrintOption::BarcodeHriFont(f) => barcode::hri_font(*f),
            PrintOption::BarcodeHri(p) => barcode::hri_position(*p),
            PrintOption::Raw(bytes) => bytes.clone(),
        };
        Ok(bytes)
    }

    /// Encode and write this option in a single write.
    ///
    /// Nothing is written if encoding fails. Channel errors are returned
    /// unchanged.
    pub fn apply<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        let bytes = self.encode()?;
        w.write_all(&bytes)?;
        Ok(())
    }
}

/// Encode a whole option list, stopping at the first invalid option.
///
/// Jobs call this before writing anything so a bad option never leaves a
/// half-sent job on the device.
pub fn encode_all(options: &[PrintOption]) -> Result<Vec<Vec<u8>>> {
    options.iter().map(PrintOption::encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EscPosError;
    use crate::transport::MemoryTransport;

    #[test]
    fn test_encode_table() {
        let cases: Vec<(PrintOption, Vec<u8>)> = vec![
            (PrintOption::Negative, vec![0x1D, b'B', 1]),
            (PrintOption::FontA, vec![0x1B, b'M', b'0']),
            (PrintOption::FontB, vec![0x1B, b'M', b'1']),
            (PrintOption::Underline(2), vec![0x1B, b'-', 2]),
            (PrintOption::Emphasize, vec![0x1B, b'E', 1]),
            (PrintOption::Rotate, vec![0x1B, b'V', b'1']),
            (PrintOption::JUSTIFY_LEFT, vec![0x1B, b'a', 0]),
            (PrintOption::JUSTIFY_CENTER, vec![0x1B, b'a', 1]),
            (PrintOption::JUSTIFY_RIGHT, vec![0x1B, b'a', 2]),
            (PrintOption::Size { height: 2, width: 3 }, vec![0x1D, b'!', 0x21]),
            (PrintOption::LineSpacing(30), vec![0x1B, b'3', 30]),
            (PrintOption::BarcodeHeight(100), vec![0x1D, b'h', 100]),
            (PrintOption::BarcodeWidth(2), vec![0x1D, b'w', 2]),
            (PrintOption::BarcodeStartPosition(5), vec![0x1D, b'x', 5]),
            (PrintOption::HRI_FONT_A, vec![0x1D, b'f', b'0']),
            (PrintOption::HRI_FONT_B, vec![0x1D, b'f', b'1']),
            (PrintOption::NO_HRI, vec![0x1D, b'H', b'0']),
            (PrintOption::HRI_TOP, vec![0x1D, b'H', b'1']),
            (PrintOption::HRI_BOTTOM, vec![0x1D, b'H', b'2']),
            (PrintOption::HRI_TOP_AND_BOTTOM, vec![0x1D, b'H', b'3']),
            (PrintOption::Raw(vec![0x0A, 0x0A]), vec![0x0A, 0x0A]),
        ];
        for (opt, expected) in cases {
            assert_eq!(opt.encode().unwrap(), expected, "{opt:?}");
        }
    }

    #[test]
    fn test_font_by_value() {
        assert_eq!(PrintOption::font(Font::A), PrintOption::FontA);
        assert_eq!(PrintOption::font(Font::B), PrintOption::FontB);
    }

    #[test]
    fn test_underline_out_of_range_writes_nothing() {
        let mut channel = MemoryTransport::new();
        let err = PrintOption::Underline(3).apply(&mut channel).unwrap_err();
        assert!(matches!(err, EscPosError::UnderlineThickness(3)));
        assert!(channel.written().is_empty());
    }

    #[test]
    fn test_apply_is_one_write() {
        let mut channel = MemoryTransport::new();
        PrintOption::Emphasize.apply(&mut channel).unwrap();
        assert_eq!(channel.writes(), &[vec![0x1B, b'E', 1]]);
    }

    #[test]
    fn test_apply_propagates_io_error() {
        let mut channel = MemoryTransport::new();
        channel.fail_write_at(0);
        let err = PrintOption::Rotate.apply(&mut channel).unwrap_err();
        assert!(matches!(err, EscPosError::Io(_)));
    }

    #[test]
    fn test_encode_all_stops_at_invalid() {
        let opts = [
            PrintOption::Emphasize,
            PrintOption::Underline(9),
            PrintOption::Rotate,
        ];
        assert!(matches!(
            encode_all(&opts),
            Err(EscPosError::UnderlineThickness(9))
        ));
        assert_eq!(encode_all(&[]).unwrap(), Vec::<Vec<u8>>::new());
    }
}
