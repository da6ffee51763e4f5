//! # escpos - ESC/POS Receipt Printer Client
//!
//! escpos turns print intents into the exact ESC/POS byte sequences a
//! thermal receipt printer expects, and decodes the printer's one-byte
//! status replies. It provides:
//!
//! - **Protocol implementation**: pure command builders (text, barcode, QR)
//! - **Options**: deferred formatting commands applied per job
//! - **Status decoding**: printer, offline, error and paper-feed state
//! - **Transport**: raw serial TTY and an in-memory recorder
//!
//! ## Quick Start
//!
//! ```no_run
//! use escpos::{
//!     option::PrintOption,
//!     printer::{Printer, PrinterConfig},
//!     transport::{SerialConfig, SerialTransport},
//! };
//!
//! // Open connection to printer
//! let transport = SerialTransport::open("/dev/ttyUSB0", &SerialConfig::default())?;
//! let mut printer = Printer::new(transport, PrinterConfig::NS8360L);
//!
//! // Check for paper
//! if printer.get_feed_state()?.paper_end {
//!     eprintln!("out of paper");
//! }
//!
//! // Centered bold header, a barcode, then cut
//! printer.print("RECEIPT\n", &[PrintOption::JUSTIFY_CENTER, PrintOption::Emphasize])?;
//! printer.print_ean13("400638133393", &[PrintOption::HRI_BOTTOM, PrintOption::BarcodeHeight(80)])?;
//! printer.cut()?;
//!
//! # Ok::<(), escpos::error::EscPosError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`option`] | Per-job formatting options |
//! | [`printer`] | Printer client and model profiles |
//! | [`status`] | Status byte decoding |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |

pub mod error;
pub mod option;
pub mod printer;
pub mod protocol;
pub mod status;
pub mod transport;

// Re-exports for convenience
pub use error::EscPosError;
pub use option::PrintOption;
pub use printer::{Printer, PrinterConfig};
pub use transport::{MemoryTransport, SerialTransport};
