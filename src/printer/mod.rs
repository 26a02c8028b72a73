//! # Printer Module
//!
//! Connection settings and the client that sends jobs to a printer.
//!
//! ## Modules
//!
//! - [`config`]: where the printer lives and how to talk to it
//! - [`client`]: one SOAP exchange per print call

pub mod client;
pub mod config;

pub use client::Printer;
pub use config::PrinterConfig;
