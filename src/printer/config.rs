//! # Printer Configuration
//!
//! Device profiles describing which command groups a printer model accepts
//! and how it wants to be left after a cut.
//!
//! ## Built-in Profiles
//!
//! | Profile | Barcode | QR code | Reinitialize after cut |
//! |---------|---------|---------|------------------------|
//! | `generic` | no | no | no |
//! | `generic-barcode` | yes | no | no |
//! | `ns8360l` | yes | yes | yes |
//!
//! ## Usage
//!
//! ```
//! use escpos::printer::{Capability, PrinterConfig};
//!
//! let config = PrinterConfig::parse("ns8360l").unwrap();
//! assert!(config.supports(Capability::QrCode));
//! ```
//!
//! Custom profiles load from JSON:
//!
//! ```
//! use escpos::printer::PrinterConfig;
//!
//! let config = PrinterConfig::from_json(
//!     r#"{"name": "Shop printer", "barcode": true}"#,
//! ).unwrap();
//! assert!(config.barcode);
//! assert!(!config.qr_code);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EscPosError;

/// Optional command groups. Text, cut, raw writes and status queries are
/// always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Barcode,
    QrCode,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Barcode => f.write_str("barcodes"),
            Capability::QrCode => f.write_str("QR codes"),
        }
    }
}

/// # Printer Configuration
///
/// - **barcode**: accepts `GS k` barcodes and the barcode layout options
/// - **qr_code**: accepts `ESC Z` QR codes
/// - **cut_then_reinitialize**: after a cut, send `ESC @` so the next job
///   starts from a clean state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: Cow<'static, str>,

    #[serde(default)]
    pub barcode: bool,

    #[serde(default)]
    pub qr_code: bool,

    #[serde(default)]
    pub cut_then_reinitialize: bool,
}

impl PrinterConfig {
    /// Core ESC/POS commands only.
    pub const GENERIC: Self = Self {
        name: Cow::Borrowed("Generic ESC/POS"),
        barcode: false,
        qr_code: false,
        cut_then_reinitialize: false,
    };

    /// Core commands plus 1D barcodes.
    pub const GENERIC_BARCODE: Self = Self {
        name: Cow::Borrowed("Generic ESC/POS with barcodes"),
        barcode: true,
        qr_code: false,
        cut_then_reinitialize: false,
    };

    /// # Netum NS8360L
    ///
    /// 80mm receipt printer with USB-serial interface. Supports every command
    /// group and is reinitialized after each cut.
    pub const NS8360L: Self = Self {
        name: Cow::Borrowed("Netum NS8360L"),
        barcode: true,
        qr_code: true,
        cut_then_reinitialize: true,
    };

    /// Whether the model accepts an optional command group.
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Barcode => self.barcode,
            Capability::QrCode => self.qr_code,
        }
    }

    /// Short names accepted by [`parse`](Self::parse), paired with profiles.
    pub fn built_in() -> Vec<(&'static str, Self)> {
        vec![
            ("generic", Self::GENERIC),
            ("generic-barcode", Self::GENERIC_BARCODE),
            ("ns8360l", Self::NS8360L),
        ]
    }

    /// Look up a built-in profile by short name or display name.
    pub fn parse(s: &str) -> Result<Self, EscPosError> {
        let key = s.to_lowercase();
        Self::built_in()
            .into_iter()
            .find(|(slug, config)| *slug == key || config.name.to_lowercase() == key)
            .map(|(_, config)| config)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::built_in().iter().map(|(slug, _)| *slug).collect();
                EscPosError::Config(format!(
                    "Unknown printer model '{}'. Use one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }

    /// Parse a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, EscPosError> {
        serde_json::from_str(json).map_err(|e| EscPosError::Config(format!("Invalid profile: {}", e)))
    }

    /// Load a JSON profile from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EscPosError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            EscPosError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::GENERIC
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_levels() {
        assert!(!PrinterConfig::GENERIC.supports(Capability::Barcode));
        assert!(!PrinterConfig::GENERIC.supports(Capability::QrCode));
        assert!(PrinterConfig::GENERIC_BARCODE.supports(Capability::Barcode));
        assert!(!PrinterConfig::GENERIC_BARCODE.supports(Capability::QrCode));
        assert!(PrinterConfig::NS8360L.supports(Capability::Barcode));
        assert!(PrinterConfig::NS8360L.supports(Capability::QrCode));
    }

    #[test]
    fn test_cut_policy() {
        assert!(!PrinterConfig::GENERIC.cut_then_reinitialize);
        assert!(PrinterConfig::NS8360L.cut_then_reinitialize);
    }

    #[test]
    fn test_parse_by_slug_and_name() {
        assert_eq!(PrinterConfig::parse("NS8360L").unwrap(), PrinterConfig::NS8360L);
        assert_eq!(
            PrinterConfig::parse("Generic ESC/POS").unwrap(),
            PrinterConfig::GENERIC
        );
        assert!(matches!(
            PrinterConfig::parse("tsp650"),
            Err(EscPosError::Config(_))
        ));
    }

    #[test]
    fn test_from_json_defaults() {
        let config = PrinterConfig::from_json(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(config.name, "Bare");
        assert!(!config.barcode);
        assert!(!config.qr_code);
        assert!(!config.cut_then_reinitialize);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            PrinterConfig::from_json("{"),
            Err(EscPosError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&PrinterConfig::NS8360L).unwrap();
        assert_eq!(PrinterConfig::from_json(&json).unwrap(), PrinterConfig::NS8360L);
    }

    #[test]
    fn test_default_is_generic() {
        assert_eq!(PrinterConfig::default(), PrinterConfig::GENERIC);
    }
}
