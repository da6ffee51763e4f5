//! # Serial / USB-Serial Transport
//!
//! Opens a TTY device (RS-232, USB-to-serial adapter, or a bound Bluetooth
//! RFCOMM node) for bidirectional raw byte I/O.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary command bytes are transmitted
//! without modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! XON/XOFF flow control is disabled too: 0x11 and 0x13 can appear inside
//! barcode and QR payloads.
//!
//! ## Read Timeout
//!
//! With a read timeout set, a status query against a silent device returns
//! after the timeout with zero bytes, which the printer layer reports as an
//! I/O error. Without one, reads block until a byte arrives.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::EscPosError;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Serial port settings.
///
/// Everything left as `None` keeps the device's current setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialConfig {
    /// Baud rate (e.g. 9600, 19200, 38400, 115200)
    pub baud_rate: Option<u32>,
    /// Read timeout, rounded up to tenths of a second (max 25.5s)
    pub read_timeout: Option<Duration>,
}

/// # Serial Printer Transport
///
/// Owns the open device file. Implements [`Read`] and [`Write`], so it can
/// be handed straight to [`crate::Printer::new`].
///
/// ## Example
///
/// ```no_run
/// use escpos::{Printer, PrinterConfig};
/// use escpos::transport::{SerialConfig, SerialTransport};
///
/// let transport = SerialTransport::open("/dev/ttyUSB0", &SerialConfig::default())?;
/// let mut printer = Printer::new(transport, PrinterConfig::NS8360L);
/// printer.print("Hello\n", &[])?;
///
/// # Ok::<(), escpos::EscPosError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open a serial device for reading and writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout group)
    /// - The baud rate is not one the platform supports
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, config: &SerialConfig) -> Result<Self, EscPosError> {
        let path = device.as_ref();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| {
                EscPosError::Transport(format!("Failed to open {}: {}", path.display(), e))
            })?;

        configure_tty(&file, config)?;

        info!(device = %path.display(), baud = ?config.baud_rate, "serial transport open");
        Ok(Self { file })
    }

    /// Open with default device path (/dev/ttyUSB0)
    pub fn open_default() -> Result<Self, EscPosError> {
        Self::open(DEFAULT_DEVICE, &SerialConfig::default())
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// Convert a read timeout into the termios `VTIME` unit (deciseconds).
fn timeout_deciseconds(timeout: Duration) -> u8 {
    let tenths = timeout.as_millis().div_ceil(100);
    tenths.clamp(1, u8::MAX as u128) as u8
}

#[cfg(unix)]
fn baud_constant(baud: u32) -> Option<libc::speed_t> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        230400 => libc::B230400,
        _ => return None,
    };
    Some(speed)
}

/// Put the device into raw 8N1 mode and apply the requested settings.
#[cfg(unix)]
fn configure_tty(file: &File, config: &SerialConfig) -> Result<(), EscPosError> {
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(EscPosError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8 | libc::CREAD | libc::CLOCAL;

    // VMIN=1: block for the first byte. VMIN=0 + VTIME: return after timeout.
    match config.read_timeout {
        Some(timeout) => {
            termios.c_cc[libc::VMIN] = 0;
            termios.c_cc[libc::VTIME] = timeout_deciseconds(timeout);
        }
        None => {
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;
        }
    }

    if let Some(baud) = config.baud_rate {
        let speed = baud_constant(baud)
            .ok_or_else(|| EscPosError::Transport(format!("Unsupported baud rate: {}", baud)))?;
        let result = unsafe { libc::cfsetspeed(&mut termios, speed) };
        if result != 0 {
            return Err(EscPosError::Transport(format!(
                "cfsetspeed failed: {}",
                io::Error::last_os_error()
            )));
        }
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(EscPosError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    debug!(fd, "tty configured raw 8N1");
    Ok(())
}

#[cfg(not(unix))]
fn configure_tty(_file: &File, _config: &SerialConfig) -> Result<(), EscPosError> {
    // No termios outside Unix; the device is used as opened
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
