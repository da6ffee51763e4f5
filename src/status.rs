//! # Real-Time Status Decoding
//!
//! The device answers a `DLE EOT n` request with exactly one byte whose bits
//! flag individual conditions. This module maps those bytes onto plain
//! records. Decoding is a pure function of the byte; the request/reply
//! exchange lives in [`crate::printer::Printer`].
//!
//! ## Request Codes
//!
//! | Record | Request | Bits |
//! |--------|---------|------|
//! | [`PrinterState`] | `DLE EOT 4` | 0x04 drawer, 0x08 offline, 0x20 wait-recover |
//! | [`OffLineState`] | `DLE EOT 4` | 0x04 cover, 0x08 feed button, 0x20 paper shortage, 0x40 error |
//! | [`ErrorState`] | `DLE EOT 3` | 0x08 cutter, 0x20 unrecoverable, 0x40 head temp/voltage |
//! | [`FeedState`] | `DLE EOT 4` | 0x0C paper end, 0x60 paper present |
//!
//! Three records share request code 4. Each getter still sends its own
//! request and reads its own reply; nothing is cached between calls.
//! Telling the replies apart on hardware that answers code 4 differently
//! per context is up to the transport.

use serde::Serialize;

use crate::protocol::commands;

/// Which status record a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusQuery {
    Printer,
    OffLine,
    Error,
    Feed,
}

impl StatusQuery {
    /// `n` byte of `DLE EOT n` for this query.
    pub const fn code(self) -> u8 {
        match self {
            StatusQuery::Error => 3,
            StatusQuery::Printer | StatusQuery::OffLine | StatusQuery::Feed => 4,
        }
    }

    /// Full request bytes.
    pub fn request(self) -> Vec<u8> {
        commands::status_request(self.code())
    }
}

#[inline]
const fn bit(byte: u8, mask: u8) -> bool {
    byte & mask != 0
}

/// General printer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PrinterState {
    pub drawer_closed: bool,
    pub offline: bool,
    pub wait_for_online_recover: bool,
}

impl PrinterState {
    pub const fn from_byte(b: u8) -> Self {
        Self {
            drawer_closed: bit(b, 0x04),
            offline: bit(b, 0x08),
            wait_for_online_recover: bit(b, 0x20),
        }
    }
}

/// Reason the printer went offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OffLineState {
    pub top_cover_open: bool,
    pub feed_by_feed_button: bool,
    pub shortage_of_paper: bool,
    pub error: bool,
}

impl OffLineState {
    pub const fn from_byte(b: u8) -> Self {
        Self {
            top_cover_open: bit(b, 0x04),
            feed_by_feed_button: bit(b, 0x08),
            shortage_of_paper: bit(b, 0x20),
            error: bit(b, 0x40),
        }
    }
}

/// Error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ErrorState {
    pub auto_cutter_error: bool,
    pub unrecoverable_error: bool,
    /// Print head temperature or supply voltage out of range
    pub temperature_and_voltage_out_of_range: bool,
}

impl ErrorState {
    pub const fn from_byte(b: u8) -> Self {
        Self {
            auto_cutter_error: bit(b, 0x08),
            unrecoverable_error: bit(b, 0x20),
            temperature_and_voltage_out_of_range: bit(b, 0x40),
        }
    }
}

/// Paper sensor status.
///
/// Each flag covers two bits; either bit set raises the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FeedState {
    pub paper_end: bool,
    pub paper_present: bool,
}

impl FeedState {
    pub const fn from_byte(b: u8) -> Self {
        Self {
            paper_end: bit(b, 0x0C),
            paper_present: bit(b, 0x60),
        }
    }
}

/// All four records, as reported by the CLI `status` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusReport {
    pub printer: PrinterState,
    pub offline: OffLineState,
    pub error: ErrorState,
    pub feed: FeedState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_codes() {
        assert_eq!(StatusQuery::Error.request(), vec![0x10, 0x04, 3]);
        assert_eq!(StatusQuery::Feed.request(), vec![0x10, 0x04, 4]);
        assert_eq!(StatusQuery::OffLine.request(), vec![0x10, 0x04, 4]);
        assert_eq!(StatusQuery::Printer.request(), vec![0x10, 0x04, 4]);
    }

    #[test]
    fn test_feed_state_0x6c() {
        assert_eq!(
            FeedState::from_byte(0x6C),
            FeedState {
                paper_end: true,
                paper_present: true
            }
        );
    }

    #[test]
    fn test_feed_state_either_bit() {
        assert!(FeedState::from_byte(0x04).paper_end);
        assert!(FeedState::from_byte(0x08).paper_end);
        assert!(FeedState::from_byte(0x20).paper_present);
        assert!(FeedState::from_byte(0x40).paper_present);
        assert_eq!(FeedState::from_byte(0x93), FeedState::default());
    }

    #[test]
    fn test_printer_state() {
        assert_eq!(PrinterState::from_byte(0x00), PrinterState::default());
        assert_eq!(
            PrinterState::from_byte(0x2C),
            PrinterState {
                drawer_closed: true,
                offline: true,
                wait_for_online_recover: true
            }
        );
        // 0x12 is the fixed pattern the device always sets; no flags
        assert_eq!(PrinterState::from_byte(0x12), PrinterState::default());
    }

    #[test]
    fn test_offline_state() {
        let s = OffLineState::from_byte(0x64);
        assert!(s.top_cover_open);
        assert!(!s.feed_by_feed_button);
        assert!(s.shortage_of_paper);
        assert!(s.error);
    }

    #[test]
    fn test_error_state() {
        assert_eq!(
            ErrorState::from_byte(0x68),
            ErrorState {
                auto_cutter_error: true,
                unrecoverable_error: true,
                temperature_and_voltage_out_of_range: true
            }
        );
        assert_eq!(ErrorState::from_byte(0x97), ErrorState::default());
    }

    #[test]
    fn test_decoding_deterministic() {
        for b in 0..=u8::MAX {
            assert_eq!(PrinterState::from_byte(b), PrinterState::from_byte(b));
            assert_eq!(OffLineState::from_byte(b), OffLineState::from_byte(b));
            assert_eq!(ErrorState::from_byte(b), ErrorState::from_byte(b));
            assert_eq!(FeedState::from_byte(b), FeedState::from_byte(b));

            let p = PrinterState::from_byte(b);
            assert_eq!(p.drawer_closed, b & 0x04 != 0);
            assert_eq!(p.offline, b & 0x08 != 0);
            assert_eq!(p.wait_for_online_recover, b & 0x20 != 0);
        }
    }

    #[test]
    fn test_report_serializes() {
        let report = StatusReport {
            feed: FeedState::from_byte(0x0C),
            ..Default::default()
        };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["feed"]["paper_end"], true);
        assert_eq!(json["printer"]["offline"], false);
    }
}
