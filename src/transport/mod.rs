//! # Printer Transport Layer
//!
//! The encoder talks to any duplex byte channel implementing
//! [`std::io::Read`] and [`std::io::Write`]. This module provides two.
//!
//! ## Available Transports
//!
//! - [`serial`]: TTY / USB-serial device in raw mode
//! - [`memory`]: In-memory recorder with scripted replies
//!
//! Opening, configuring and closing a channel is the transport's job; the
//! [`crate::Printer`] never does any of it.

pub mod memory;
pub mod serial;

pub use memory::MemoryTransport;
pub use serial::{SerialConfig, SerialTransport};
