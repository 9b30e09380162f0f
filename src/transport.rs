//! Signed HTTP GET transport.
//!
//! The rest of the crate only needs one capability from the network: send a
//! signed GET for a URL and hand back the parsed JSON body. [`Transport`]
//! names that capability; [`HttpTransport`] is the reqwest-backed default.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use url::Url;

use crate::error::{BricklinkError, Result};
use crate::oauth::RequestSigner;

pub trait Transport: Send + Sync {
    /// Perform an authenticated GET and parse the response body as JSON.
    fn get_json(&self, url: &Url) -> Result<Value>;
}

/// Blocking reqwest client that signs each request before sending it.
pub struct HttpTransport {
    client: Client,
    signer: Box<dyn RequestSigner>,
}

impl HttpTransport {
    pub fn new(signer: Box<dyn RequestSigner>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client, signer })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &Url) -> Result<Value> {
        let authorization = self.signer.authorization("GET", url)?;
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json")
            .send()?;

        // BrickLink reports most failures inside the envelope with HTTP 200,
        // so the status line is only used when the body is not JSON.
        let status = resp.status();
        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|e| {
            BricklinkError::MalformedResponse(format!("HTTP {status}: body is not JSON ({e})"))
        })
    }
}
