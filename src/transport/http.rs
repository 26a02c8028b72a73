//! # HTTP Transport
//!
//! Sends a [`SoapRequest`] as a single blocking HTTP(S) POST using
//! `reqwest`'s blocking client.
//!
//! ## Failure Semantics
//!
//! - Connection refused, DNS failure, TLS failure and request timeout are
//!   returned as [`EposError::Http`]
//! - Any HTTP status is accepted; the body text is handed back for the
//!   caller to interpret. Non-2xx statuses are logged.
//!
//! The blocking client runs its own runtime, so it must not be used from
//! inside an async executor thread.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::{SoapRequest, Transport};
use crate::error::EposError;

/// # HTTP Printer Transport
///
/// ```no_run
/// use std::time::Duration;
/// use epos::transport::HttpTransport;
///
/// let transport = HttpTransport::new(Duration::from_secs(10))?;
/// # Ok::<(), epos::EposError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport whose requests fail after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, EposError> {
        Ok(Self::with_client(Client::builder().timeout(timeout).build()?))
    }

    /// Use a preconfigured client (custom TLS roots, proxies, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn post(&self, request: &SoapRequest) -> Result<String, EposError> {
        let mut builder = self.client.post(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }

        debug!(url = %request.url, bytes = request.body.len(), "POST");
        let response = builder.body(request.body.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %request.url, "printer answered with non-success HTTP status");
        }

        Ok(response.text()?)
    }
}
