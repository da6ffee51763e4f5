//! # escpos CLI
//!
//! Command-line interface for ESC/POS receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print centered bold text and cut
//! escpos print "Hello" --align center --bold --newline --cut
//!
//! # Print an EAN-13 barcode with HRI below
//! escpos barcode ean13 400638133393 --hri bottom --height 80
//!
//! # Print a QR code
//! escpos qr "https://example.com" --ec M
//!
//! # Query all status bytes as JSON
//! escpos status --json
//!
//! # Show the bytes a job would send, without a device
//! escpos --dry-run print "Hello" --size 2x2
//! ```

use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use escpos::{
    EscPosError, MemoryTransport, PrintOption, Printer, PrinterConfig, SerialTransport,
    protocol::barcode::{HriFont, HriPosition, Symbology},
    protocol::text::{Alignment, Font},
    transport::{SerialConfig, serial::DEFAULT_DEVICE},
};

/// escpos - ESC/POS thermal printer utility
#[derive(Parser, Debug)]
#[command(name = "escpos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer device path
    #[arg(long, global = true, default_value = DEFAULT_DEVICE)]
    device: PathBuf,

    /// Baud rate (leave unset to keep the port's current speed)
    #[arg(long, global = true)]
    baud: Option<u32>,

    /// Status read timeout in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Built-in printer model (see `escpos models`)
    #[arg(long, global = true, default_value = "ns8360l")]
    model: String,

    /// JSON printer profile; overrides --model
    #[arg(long, global = true, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Encode without a device and print the bytes as hex
    #[arg(long, global = true)]
    dry_run: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print text
    Print {
        text: String,

        #[command(flatten)]
        style: StyleArgs,

        /// Append a line feed
        #[arg(long)]
        newline: bool,

        /// Cut after printing
        #[arg(long)]
        cut: bool,
    },

    /// Print a 1D barcode
    Barcode {
        /// upca, upce, ean13, ean8, itf, codabar, code39, code93, code128
        symbology: String,

        code: String,

        #[command(flatten)]
        layout: BarcodeArgs,

        #[arg(long, value_enum)]
        align: Option<AlignArg>,
    },

    /// Print a QR code
    Qr {
        data: String,

        /// Error correction level: L, M, Q, H, or a raw byte value
        #[arg(long, default_value = "L")]
        ec: String,

        /// Component type byte
        #[arg(long, default_value_t = 4)]
        component: u8,

        #[arg(long, value_enum)]
        align: Option<AlignArg>,
    },

    /// Feed and cut the paper
    Cut,

    /// Query printer, offline, error and feed status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send raw bytes given as hex (e.g. "1b 40 0a")
    Raw { hex: String },

    /// List built-in printer models
    Models,
}

#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// White on black
    #[arg(long)]
    negative: bool,

    #[arg(long, value_enum)]
    font: Option<FontArg>,

    /// Underline thickness (0-2)
    #[arg(long)]
    underline: Option<u8>,

    /// Emphasized text
    #[arg(long)]
    bold: bool,

    /// Rotate 90° clockwise
    #[arg(long)]
    rotate: bool,

    #[arg(long, value_enum)]
    align: Option<AlignArg>,

    /// Character magnification as HEIGHTxWIDTH, each 1-8
    #[arg(long, value_name = "HxW")]
    size: Option<String>,

    #[arg(long)]
    line_spacing: Option<u8>,
}

#[derive(Args, Debug, Default)]
struct BarcodeArgs {
    /// Bar height in dots
    #[arg(long)]
    height: Option<u8>,

    /// Module width
    #[arg(long)]
    width: Option<u8>,

    /// Horizontal start position
    #[arg(long)]
    position: Option<u8>,

    #[arg(long, value_enum)]
    hri_font: Option<FontArg>,

    #[arg(long, value_enum)]
    hri: Option<HriArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FontArg {
    A,
    B,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlignArg {
    Left,
    Center,
    Right,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HriArg {
    None,
    Top,
    Bottom,
    Both,
}

impl From<AlignArg> for Alignment {
    fn from(a: AlignArg) -> Self {
        match a {
            AlignArg::Left => Alignment::Left,
            AlignArg::Center => Alignment::Center,
            AlignArg::Right => Alignment::Right,
        }
    }
}

impl StyleArgs {
    fn options(&self) -> Result<Vec<PrintOption>, EscPosError> {
        let mut opts = Vec::new();
        if self.negative {
            opts.push(PrintOption::Negative);
        }
        if let Some(f) = self.font {
            opts.push(PrintOption::font(match f {
                FontArg::A => Font::A,
                FontArg::B => Font::B,
            }));
        }
        if let Some(t) = self.underline {
            opts.push(PrintOption::Underline(t));
        }
        if self.bold {
            opts.push(PrintOption::Emphasize);
        }
        if self.rotate {
            opts.push(PrintOption::Rotate);
        }
        if let Some(a) = self.align {
            opts.push(PrintOption::Justify(a.into()));
        }
        if let Some(size) = &self.size {
            let (height, width) = parse_size(size)?;
            opts.push(PrintOption::Size { height, width });
        }
        if let Some(n) = self.line_spacing {
            opts.push(PrintOption::LineSpacing(n));
        }
        Ok(opts)
    }
}

impl BarcodeArgs {
    fn options(&self) -> Vec<PrintOption> {
        let mut opts = Vec::new();
        if let Some(n) = self.height {
            opts.push(PrintOption::BarcodeHeight(n));
        }
        if let Some(n) = self.width {
            opts.push(PrintOption::BarcodeWidth(n));
        }
        if let Some(n) = self.position {
            opts.push(PrintOption::BarcodeStartPosition(n));
        }
        if let Some(f) = self.hri_font {
            opts.push(PrintOption::BarcodeHriFont(match f {
                FontArg::A => HriFont::FontA,
                FontArg::B => HriFont::FontB,
            }));
        }
        if let Some(p) = self.hri {
            opts.push(PrintOption::BarcodeHri(match p {
                HriArg::None => HriPosition::None,
                HriArg::Top => HriPosition::Top,
                HriArg::Bottom => HriPosition::Bottom,
                HriArg::Both => HriPosition::TopAndBottom,
            }));
        }
        opts
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), EscPosError> {
    if let Commands::Models = cli.command {
        for (slug, config) in PrinterConfig::built_in() {
            println!(
                "{:<16} {} (barcode: {}, qr: {}, reinit after cut: {})",
                slug, config.name, config.barcode, config.qr_code, config.cut_then_reinitialize
            );
        }
        return Ok(());
    }

    let config = match &cli.profile {
        Some(path) => PrinterConfig::load(path)?,
        None => PrinterConfig::parse(&cli.model)?,
    };

    if cli.dry_run {
        let mut printer = Printer::new(MemoryTransport::new(), config);
        execute(&mut printer, &cli.command)?;
        for write in printer.get_ref().writes() {
            println!("{}", to_hex(write));
        }
        return Ok(());
    }

    let serial = SerialConfig {
        baud_rate: cli.baud,
        read_timeout: cli.timeout_ms.map(Duration::from_millis),
    };
    let transport = SerialTransport::open(&cli.device, &serial)?;
    let mut printer = Printer::new(transport, config);
    execute(&mut printer, &cli.command)
}

fn execute<C: Read + Write>(
    printer: &mut Printer<C>,
    command: &Commands,
) -> Result<(), EscPosError> {
    match command {
        Commands::Print {
            text,
            style,
            newline,
            cut,
        } => {
            let mut payload = text.clone();
            if *newline {
                payload.push('\n');
            }
            printer.print(&payload, &style.options()?)?;
            if *cut {
                printer.cut()?;
            }
        }
        Commands::Barcode {
            symbology,
            code,
            layout,
            align,
        } => {
            let symbology = Symbology::parse(symbology).map_err(EscPosError::InvalidCommand)?;
            let mut opts = layout.options();
            if let Some(a) = align {
                opts.push(PrintOption::Justify((*a).into()));
            }
            printer.print_barcode(symbology, code, &opts)?;
        }
        Commands::Qr {
            data,
            ec,
            component,
            align,
        } => {
            let opts: Vec<PrintOption> = align
                .iter()
                .map(|a| PrintOption::Justify((*a).into()))
                .collect();
            printer.print_qr_code(data, parse_ec(ec)?, *component, &opts)?;
        }
        Commands::Cut => printer.cut()?,
        Commands::Status { json } => {
            let report = printer.status_report()?;
            if *json {
                let out = serde_json::to_string_pretty(&report)
                    .map_err(|e| EscPosError::InvalidCommand(e.to_string()))?;
                println!("{}", out);
            } else {
                println!("{:#?}", report);
            }
        }
        Commands::Raw { hex } => printer.write_raw(&parse_hex(hex)?)?,
        Commands::Models => {}
    }
    Ok(())
}

/// Parse "HxW" into (height, width).
fn parse_size(s: &str) -> Result<(u8, u8), EscPosError> {
    let invalid = || EscPosError::InvalidCommand(format!("Invalid size '{}', expected HxW", s));
    let (h, w) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
    let height = h.trim().parse().map_err(|_| invalid())?;
    let width = w.trim().parse().map_err(|_| invalid())?;
    Ok((height, width))
}

/// Parse a QR error correction level: a letter L/M/Q/H or a byte value.
fn parse_ec(s: &str) -> Result<u8, EscPosError> {
    match s.to_uppercase().as_str() {
        "L" => Ok(b'L'),
        "M" => Ok(b'M'),
        "Q" => Ok(b'Q'),
        "H" => Ok(b'H'),
        other => other.parse().map_err(|_| {
            EscPosError::InvalidCommand(format!(
                "Invalid error correction level '{}'. Use L, M, Q, H or 0-255",
                s
            ))
        }),
    }
}

/// Parse hex bytes, ignoring whitespace.
fn parse_hex(s: &str) -> Result<Vec<u8>, EscPosError> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EscPosError::InvalidCommand(format!("Invalid hex in '{}'", s)));
    }
    if digits.len() % 2 != 0 {
        return Err(EscPosError::InvalidCommand(format!(
            "Odd number of hex digits in '{}'",
            s
        )));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| EscPosError::InvalidCommand(format!("Invalid hex in '{}': {}", s, e)))
        })
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("2x3").unwrap(), (2, 3));
        assert_eq!(parse_size("8X8").unwrap(), (8, 8));
        assert!(parse_size("2").is_err());
        assert!(parse_size("ax1").is_err());
    }

    #[test]
    fn test_parse_ec() {
        assert_eq!(parse_ec("m").unwrap(), b'M');
        assert_eq!(parse_ec("48").unwrap(), 48);
        assert!(parse_ec("Z").is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("1b 40 0A").unwrap(), vec![0x1B, 0x40, 0x0A]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(parse_hex("1b4").is_err());
        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("aé1").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x1B, 0x40]), "1B 40");
    }

    #[test]
    fn test_style_options_order() {
        let style = StyleArgs {
            bold: true,
            align: Some(AlignArg::Center),
            size: Some("2x2".to_string()),
            ..Default::default()
        };
        assert_eq!(
            style.options().unwrap(),
            vec![
                PrintOption::Emphasize,
                PrintOption::JUSTIFY_CENTER,
                PrintOption::Size {
                    height: 2,
                    width: 2
                },
            ]
        );
    }

    #[test]
    fn test_dry_run_print() {
        let cli = Cli::parse_from(["escpos", "--dry-run", "print", "hi", "--bold"]);
        let mut printer = Printer::new(MemoryTransport::new(), PrinterConfig::NS8360L);
        execute(&mut printer, &cli.command).unwrap();
        assert_eq!(
            printer.get_ref().written(),
            vec![0x1B, 0x40, 0x1B, b'E', 1, b'h', b'i']
        );
    }
}
