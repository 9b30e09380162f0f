//! BrickLink SDK for Rust.
//!
//! Provides a blocking client for the catalog endpoints of the BrickLink
//! store API: item details, item images, supersets, subsets, and price
//! guides. Requests are signed with OAuth 1.0a, the `meta` status envelope
//! is checked, and the `data` payload is decoded into typed models.
//!
//! # Quick start
//!
//! ```no_run
//! use bricklink_sdk::{BricklinkClient, Credentials, ItemType};
//! use bricklink_sdk::url_builder::SubsetParams;
//!
//! let client = BricklinkClient::builder()
//!     .credentials(Credentials::from_env().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let item = client.catalog().get_item(&ItemType::Part, "3001").unwrap();
//! let parts = client
//!     .catalog()
//!     .get_subsets(&ItemType::Set, "6020-1", &SubsetParams::default())
//!     .unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod models;
pub mod oauth;
pub mod queries;
pub mod transport;
pub mod url_builder;

#[cfg(feature = "async")]
pub use async_client::AsyncBricklinkClient;
pub use config::Credentials;
pub use error::{BricklinkError, Result};
pub use models::*;
pub use oauth::{OAuth1Signer, RequestSigner};
pub use transport::{HttpTransport, Transport};
pub use url_builder::{Endpoint, PriceGuideParams, SubsetParams, SupersetParams};

use std::fmt;
use std::time::Duration;

use url::Url;

// ---------------------------------------------------------------------------
// BricklinkClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BricklinkClient`].
///
/// Use [`BricklinkClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](BricklinkClientBuilder::build).
pub struct BricklinkClientBuilder {
    credentials: Option<Credentials>,
    base_url: String,
    timeout: Duration,
    transport: Option<Box<dyn Transport>>,
}

impl Default for BricklinkClientBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl BricklinkClientBuilder {
    /// Set the OAuth secrets used to sign requests.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the API base URL.
    ///
    /// Defaults to `https://api.bricklink.com/api/store/v1`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport instead of the signed reqwest client.
    ///
    /// When set, credentials are not required.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL does not parse, or if neither credentials nor a
    /// transport were supplied.
    pub fn build(self) -> Result<BricklinkClient> {
        let base_url = Url::parse(&self.base_url)?;
        let transport: Box<dyn Transport> = match (self.transport, self.credentials) {
            (Some(transport), _) => transport,
            (None, Some(credentials)) => Box::new(HttpTransport::new(
                Box::new(OAuth1Signer::new(credentials)),
                self.timeout,
            )?),
            (None, None) => {
                return Err(BricklinkError::InvalidArgument(
                    "credentials are required unless a transport is supplied".to_string(),
                ))
            }
        };
        Ok(BricklinkClient {
            base_url,
            transport,
        })
    }
}

// ---------------------------------------------------------------------------
// BricklinkClient
// ---------------------------------------------------------------------------

/// The main entry point for the BrickLink SDK.
///
/// Holds the base URL and a [`Transport`]; exposes domain-specific query
/// interfaces as lightweight borrowing wrappers. Calls are independent and
/// share no mutable state.
///
/// Created via [`BricklinkClient::builder()`].
pub struct BricklinkClient {
    base_url: Url,
    transport: Box<dyn Transport>,
}

impl fmt::Debug for BricklinkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BricklinkClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BricklinkClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> BricklinkClientBuilder {
        BricklinkClientBuilder::default()
    }

    /// Access the catalog query interface.
    pub fn catalog(&self) -> queries::catalog::CatalogQuery<'_> {
        queries::catalog::CatalogQuery::new(self)
    }

    /// The base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET an endpoint and return its validated `data` payload.
    pub fn fetch(&self, endpoint: Endpoint<'_>) -> Result<serde_json::Value> {
        let url = endpoint.url(&self.base_url)?;
        tracing::debug!(endpoint = endpoint.name(), %url, "fetching");
        self.get_json(&url)
    }

    /// GET an arbitrary URL and return its validated `data` payload.
    ///
    /// Escape hatch for endpoints without a typed wrapper.
    pub fn get_json(&self, url: &Url) -> Result<serde_json::Value> {
        let document = self.transport.get_json(url)?;
        envelope::into_data(document)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for BricklinkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BricklinkClient(base_url={})", self.base_url)
    }
}
