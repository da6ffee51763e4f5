//! # Printer
//!
//! [`Printer`] pairs a caller-supplied duplex channel with a
//! [`PrinterConfig`] and exposes one method per printer operation.
//!
//! ## Job Structure
//!
//! Print, barcode and QR jobs all go out the same way:
//!
//! ```text
//! ESC @ | option 1 | option 2 | ... | payload
//! ```
//!
//! Each segment is a separate write. All validation (payload limits,
//! option parameters, model capability) happens before the first write,
//! so an invalid job sends nothing. A channel error aborts the job where
//! it happened; bytes already sent stay sent, and no later segment is
//! written. Nothing is retried.
//!
//! ## Status Queries
//!
//! ```text
//! host → DLE EOT n
//! host ← 1 byte
//! ```
//!
//! ## Concurrency
//!
//! A `Printer` holds no state besides the channel and its config, and every
//! operation takes `&mut self`. Sharing one device between threads means
//! sharing the channel, and serializing access to it is the caller's
//! responsibility (e.g. a `Mutex<Printer<_>>`). Timeouts, if wanted, belong
//! to the channel as well.

pub mod config;

use std::io::{self, Read, Write};

use tracing::{debug, trace};

pub use config::{Capability, PrinterConfig};

use crate::error::{EscPosError, Result};
use crate::option::{self, PrintOption};
use crate::protocol::barcode::{self, Symbology};
use crate::protocol::commands;
use crate::status::{ErrorState, FeedState, OffLineState, PrinterState, StatusQuery, StatusReport};

/// ESC/POS client over a duplex byte channel.
///
/// `C` is anything readable and writable: a [`crate::transport::SerialTransport`],
/// a `&mut` borrow of one, a TCP stream, or a
/// [`crate::transport::MemoryTransport`] in tests.
#[derive(Debug)]
pub struct Printer<C> {
    channel: C,
    config: PrinterConfig,
}

impl<C: Read + Write> Printer<C> {
    pub fn new(channel: C, config: PrinterConfig) -> Self {
        Self { channel, config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &C {
        &self.channel
    }

    pub fn get_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Give the channel back to the caller.
    pub fn into_inner(self) -> C {
        self.channel
    }

    // ========================================================================
    // RAW I/O
    // ========================================================================

    /// Write bytes to the channel unchanged.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        trace!(bytes = ?bytes, "write");
        self.channel.write_all(bytes)?;
        Ok(())
    }

    /// Send a status request and read its one-byte reply.
    fn query(&mut self, query: StatusQuery) -> Result<u8> {
        self.write_raw(&query.request())?;

        let mut reply = [0u8; 1];
        let n = self.channel.read(&mut reply)?;
        if n == 0 {
            return Err(EscPosError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no status byte received",
            )));
        }
        trace!(?query, reply = reply[0], "status reply");
        Ok(reply[0])
    }

    // ========================================================================
    // STATUS
    // ========================================================================

    pub fn get_printer_state(&mut self) -> Result<PrinterState> {
        self.query(StatusQuery::Printer).map(PrinterState::from_byte)
    }

    pub fn get_offline_state(&mut self) -> Result<OffLineState> {
        self.query(StatusQuery::OffLine).map(OffLineState::from_byte)
    }

    pub fn get_error_state(&mut self) -> Result<ErrorState> {
        self.query(StatusQuery::Error).map(ErrorState::from_byte)
    }

    pub fn get_feed_state(&mut self) -> Result<FeedState> {
        self.query(StatusQuery::Feed).map(FeedState::from_byte)
    }

    /// Run all four status queries (printer, offline, error, feed) in turn.
    pub fn status_report(&mut self) -> Result<StatusReport> {
        Ok(StatusReport {
            printer: self.get_printer_state()?,
            offline: self.get_offline_state()?,
            error: self.get_error_state()?,
            feed: self.get_feed_state()?,
        })
    }

    // ========================================================================
    // TEXT AND CUT
    // ========================================================================

    /// Print `text` with the given options.
    ///
    /// The text's UTF-8 bytes are sent verbatim. Embedded control bytes are
    /// not escaped, so `text` may carry its own commands (e.g. `\n`).
    pub fn print(&mut self, text: &str, options: &[PrintOption]) -> Result<()> {
        self.print_bytes(text.as_bytes(), options)
    }

    /// Like [`print`](Self::print), for payloads that are not UTF-8
    /// (e.g. text already encoded in the device's code page).
    pub fn print_bytes(&mut self, payload: &[u8], options: &[PrintOption]) -> Result<()> {
        debug!(len = payload.len(), options = options.len(), "print");
        self.job(options, payload)
    }

    /// Feed and full-cut.
    ///
    /// Models with `cut_then_reinitialize` follow the cut with an empty
    /// print (`ESC @`, no options, no payload).
    pub fn cut(&mut self) -> Result<()> {
        debug!(reinit = self.config.cut_then_reinitialize, "cut");
        self.write_raw(&commands::cut_full())?;
        if self.config.cut_then_reinitialize {
            self.print("", &[])?;
        }
        Ok(())
    }

    // ========================================================================
    // BARCODES
    // ========================================================================

    pub fn print_upc_a(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::UpcA, code, options)
    }

    pub fn print_upc_e(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::UpcE, code, options)
    }

    pub fn print_ean13(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::Ean13, code, options)
    }

    pub fn print_ean8(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::Ean8, code, options)
    }

    pub fn print_itf(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::Itf, code, options)
    }

    pub fn print_codabar(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::Codabar, code, options)
    }

    pub fn print_code39(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::Code39, code, options)
    }

    pub fn print_code93(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::Code93, code, options)
    }

    pub fn print_code128(&mut self, code: &str, options: &[PrintOption]) -> Result<()> {
        self.print_barcode(Symbology::Code128, code, options)
    }

    /// Print a 1D barcode.
    ///
    /// ## Errors
    ///
    /// - [`EscPosError::Unsupported`] if the model has no barcode support
    /// - [`EscPosError::BarcodeLength`] / [`EscPosError::BarcodeChar`] if
    ///   `code` violates the symbology's limits
    /// - [`EscPosError::Io`] from the channel
    pub fn print_barcode(
        &mut self,
        symbology: Symbology,
        code: &str,
        options: &[PrintOption],
    ) -> Result<()> {
        self.require(Capability::Barcode)?;
        let payload = barcode::barcode(symbology, code)?;
        debug!(%symbology, len = code.len(), options = options.len(), "barcode");
        self.job(options, &payload)
    }

    // ========================================================================
    // QR CODE
    // ========================================================================

    /// Print a QR code. `ec` and `component_type` are passed through to the
    /// device unchecked.
    pub fn print_qr_code(
        &mut self,
        code: &str,
        ec: u8,
        component_type: u8,
        options: &[PrintOption],
    ) -> Result<()> {
        self.require(Capability::QrCode)?;
        let payload = barcode::qr_code(code.as_bytes(), ec, component_type)?;
        debug!(len = code.len(), ec, component_type, "qr code");
        self.job(options, &payload)
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn require(&self, capability: Capability) -> Result<()> {
        if self.config.supports(capability) {
            Ok(())
        } else {
            Err(EscPosError::Unsupported {
                model: self.config.name.to_string(),
                capability,
            })
        }
    }

    /// `ESC @`, then each option, then the payload; one write each.
    fn job(&mut self, options: &[PrintOption], payload: &[u8]) -> Result<()> {
        let encoded = option::encode_all(options)?;

        self.write_raw(&commands::init())?;
        for bytes in &encoded {
            self.write_raw(bytes)?;
        }
        self.write_raw(payload)
    }
}

// ============================================================================
// TESTS
// ============================================================================
