//! # Print Client
//!
//! Drives one print exchange per call:
//!
//! 1. optionally append a [`Cut`] to the document body
//! 2. serialize the body and wrap it in a SOAP envelope
//! 3. POST it once through the [`Transport`]
//! 4. interpret the reply with [`soap::parse_response`]
//!
//! There is no retry. Transport failures (refused connection, timeout) are
//! returned as errors; replies that arrive but cannot be understood become a
//! failed [`Response`].
//!
//! ```no_run
//! use epos::document::Document;
//! use epos::printer::{Printer, PrinterConfig};
//! use epos::protocol::Text;
//!
//! let printer = Printer::new(PrinterConfig::new("10.0.0.12"))?;
//!
//! let mut doc = Document::new();
//! doc.add_body(Text::new("Hello\n"));
//! let response = printer.print(&mut doc)?;
//! if !response.success {
//!     eprintln!("{}: {:?}", response.code, response.statuses());
//! }
//! # Ok::<(), epos::EposError>(())
//! ```

use tracing::{debug, info, instrument};

use super::config::PrinterConfig;
use crate::document::Document;
use crate::error::EposError;
use crate::json_api::JsonJob;
use crate::protocol::soap::{self, CONTENT_TYPE, IF_MODIFIED_SINCE, SOAP_ACTION};
use crate::protocol::{Cut, Response};
use crate::transport::{HttpTransport, SoapRequest, Transport};

/// A network printer reachable through `T`.
#[derive(Debug, Clone)]
pub struct Printer<T: Transport = HttpTransport> {
    config: PrinterConfig,
    transport: T,
}

impl Printer<HttpTransport> {
    /// Validate `config` and build an HTTP transport with its request timeout.
    pub fn new(config: PrinterConfig) -> Result<Self, EposError> {
        config.validate()?;
        let transport = HttpTransport::new(config.request_timeout())?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Printer<T> {
    /// Validate `config` and send through `transport`.
    pub fn with_transport(config: PrinterConfig, transport: T) -> Result<Self, EposError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Print `document`, cutting the paper afterwards.
    pub fn print(&self, document: &mut Document) -> Result<Response, EposError> {
        self.print_with_autocut(document, true)
    }

    /// Print `document`. With `autocut`, a [`Cut`] is appended to its body
    /// first; the document keeps that element afterwards.
    #[instrument(
        skip_all,
        fields(endpoint = %self.config.endpoint(), devid = %self.config.devid)
    )]
    pub fn print_with_autocut(
        &self,
        document: &mut Document,
        autocut: bool,
    ) -> Result<Response, EposError> {
        if autocut {
            document.add_body(Cut::default());
        }

        let markup = document.serialize_body_with(self.config.escape_newlines)?;
        debug!(elements = document.body().len(), %markup, "serialized job");

        let request = self.request(soap::envelope(&markup));
        let reply = self.transport.post(&request)?;

        let response = soap::parse_response(&reply);
        info!(
            success = response.success,
            code = %response.code,
            status = response.status,
            "printer responded"
        );
        Ok(response)
    }

    /// Print a JSON job, honoring its `autocut` flag.
    pub fn print_job(&self, job: &JsonJob) -> Result<Response, EposError> {
        let mut document = job.to_document()?;
        self.print_with_autocut(&mut document, job.autocut)
    }

    /// Send an empty job without a cut. Used to probe the device.
    pub fn print_empty(&self) -> Result<Response, EposError> {
        self.print_with_autocut(&mut Document::new(), false)
    }

    /// Whether the device accepted an empty job.
    pub fn printer_ready(&self) -> Result<bool, EposError> {
        Ok(self.print_empty()?.success)
    }

    fn request(&self, body: String) -> SoapRequest {
        SoapRequest {
            url: self.config.endpoint(),
            query: self.config.query(),
            headers: vec![
                ("Content-Type", CONTENT_TYPE),
                ("If-Modified-Since", IF_MODIFIED_SINCE),
                ("SOAPAction", SOAP_ACTION),
            ],
            body,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
