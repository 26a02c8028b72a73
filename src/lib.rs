//! # epos - ePOS-Print XML Client
//!
//! epos is a Rust library for printing on Epson TM receipt printers over
//! the network using the ePOS-Print XML protocol. It provides:
//!
//! - **Element model**: validated print commands (text, feed, image, logo,
//!   barcode, cut, ...) that render to ePOS-Print markup
//! - **Documents**: ordered parameter and body element lists
//! - **Client**: one SOAP-over-HTTP exchange per job, with reply parsing
//! - **Status decoding**: the ASB bitmask as readable messages
//!
//! ## Quick Start
//!
//! ```no_run
//! use epos::{
//!     document::Document,
//!     printer::{Printer, PrinterConfig},
//!     protocol::{Align, Barcode, BarcodeType, Feed, Hri, Text},
//! };
//!
//! let printer = Printer::new(PrinterConfig::new("192.168.1.50"))?;
//!
//! let mut header = Text::new("ACME COFFEE\n");
//! header.align.set(Align::Center);
//! header.double_width.set(true);
//!
//! let mut barcode = Barcode::new(BarcodeType::Code128, "{B12345");
//! barcode.hri.set(Hri::Below);
//!
//! let mut doc = Document::new();
//! doc.add_body(header);
//! doc.add_body(Feed::lines(2)?);
//! doc.add_body(barcode);
//!
//! // Appends a cut, sends the job and waits for the printer's answer
//! let response = printer.print(&mut doc)?;
//! println!("success={} {:?}", response.success, response.statuses());
//!
//! # Ok::<(), epos::EposError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ePOS-Print elements, vocabulary, SOAP framing |
//! | [`document`] | Print job assembly and serialization |
//! | [`printer`] | Printer configuration and client |
//! | [`transport`] | Communication backends |
//! | [`status`] | ASB status decoding |
//! | [`json_api`] | JSON job input |
//! | [`error`] | Error types |
//!
//! ## Logging
//!
//! The library emits `tracing` events and spans but installs no subscriber.

pub mod document;
pub mod error;
pub mod json_api;
pub mod printer;
pub mod protocol;
pub mod status;
pub mod transport;

// Re-exports for convenience
pub use document::Document;
pub use error::EposError;
pub use printer::{Printer, PrinterConfig};
pub use protocol::Response;
