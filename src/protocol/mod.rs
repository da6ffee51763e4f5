//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS command
//! family spoken by most thermal receipt printers. Every builder is a pure
//! function returning the exact bytes to put on the wire; nothing here
//! touches a channel.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes, init, cut, status requests
//! - [`text`]: Text styling (negative, font, underline, size, etc.)
//! - [`barcode`]: 1D barcodes, barcode layout, HRI and QR codes
//!
//! ## Usage Example
//!
//! ```
//! use escpos::protocol::{barcode, commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::justify(text::Alignment::Center));
//! data.extend(text::emphasize());
//! data.extend(b"RECEIPT\n");
//! data.extend(barcode::hri_position(barcode::HriPosition::Bottom));
//! data.extend(barcode::barcode(barcode::Symbology::Ean13, "400638133393").unwrap());
//! data.extend(commands::cut_full());
//!
//! // Send `data` to the printer via a transport...
//! ```

pub mod barcode;
pub mod commands;
pub mod text;
