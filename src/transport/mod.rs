//! # Printer Transport Layer
//!
//! This module provides communication backends for sending print jobs to
//! printers.
//!
//! ## Available Transports
//!
//! - [`http`]: one synchronous HTTP(S) POST per job via `reqwest`
//!
//! A transport performs exactly one round trip per call. It does not retry,
//! queue, or interpret the reply; that is left to [`crate::printer`].

pub mod http;

pub use http::HttpTransport;

use crate::error::EposError;

/// One outgoing SOAP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    /// `{scheme}://{host}{path}`
    pub url: String,
    /// Query string pairs
    pub query: Vec<(&'static str, String)>,
    /// Request headers
    pub headers: Vec<(&'static str, &'static str)>,
    /// SOAP envelope
    pub body: String,
}

impl SoapRequest {
    /// Look up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    /// Look up a query value by name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Sends a request and returns the raw reply text.
pub trait Transport {
    fn post(&self, request: &SoapRequest) -> Result<String, EposError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, request: &SoapRequest) -> Result<String, EposError> {
        (**self).post(request)
    }
}

// ============================================================================
// TESTS
// ============================================================================
