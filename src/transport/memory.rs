//! # In-Memory Transport
//!
//! A duplex channel backed by memory. Every `write` call is recorded as its
//! own entry so callers can see exactly how a job was split on the wire, and
//! reads are served from a queue of scripted reply bytes.
//!
//! Used by the CLI's `--dry-run` mode and throughout the test suite.
//!
//! ```
//! use escpos::{Printer, PrinterConfig, transport::MemoryTransport};
//!
//! let mut channel = MemoryTransport::new();
//! channel.push_reply(0x6C);
//!
//! let mut printer = Printer::new(&mut channel, PrinterConfig::NS8360L);
//! let feed = printer.get_feed_state()?;
//! assert!(feed.paper_end && feed.paper_present);
//! assert_eq!(channel.written(), vec![0x10, 0x04, 0x04]);
//! # Ok::<(), escpos::EscPosError>(())
//! ```

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Recording channel with scripted replies.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    writes: Vec<Vec<u8>>,
    replies: VecDeque<u8>,
    write_calls: usize,
    fail_write_at: Option<usize>,
    fail_reads: bool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that will answer reads with `replies`, in order.
    pub fn with_replies(replies: &[u8]) -> Self {
        Self {
            replies: replies.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Queue one more reply byte.
    pub fn push_reply(&mut self, byte: u8) {
        self.replies.push_back(byte);
    }

    /// Make the `index`-th write call (0-based) fail with `BrokenPipe`.
    ///
    /// The failing call records nothing. Later calls succeed again, so a
    /// caller that keeps writing after an error shows up in [`writes`].
    ///
    /// [`writes`]: Self::writes
    pub fn fail_write_at(&mut self, index: usize) {
        self.fail_write_at = Some(index);
    }

    /// Make every read fail with `BrokenPipe`.
    pub fn fail_reads(&mut self) {
        self.fail_reads = true;
    }

    /// Each successful write call, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// All written bytes, concatenated.
    pub fn written(&self) -> Vec<u8> {
        self.writes.concat()
    }

    /// Reply bytes not yet read.
    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    /// Forget recorded writes, keeping scripted replies and failure setup.
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Write for MemoryTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let call = self.write_calls;
        self.write_calls += 1;
        if self.fail_write_at == Some(call) {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("injected failure on write {}", call),
            ));
        }
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for MemoryTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail_reads {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "injected read failure",
            ));
        }
        let n = buf.len().min(self.replies.len());
        for (slot, byte) in buf.iter_mut().zip(self.replies.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

// ============================================================================
// TESTS
// ============================================================================
