//! Async wrapper around [`BricklinkClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs each blocking request on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use bricklink_sdk::{AsyncBricklinkClient, BricklinkClient, Credentials, ItemType};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let builder = BricklinkClient::builder().credentials(Credentials::from_env().unwrap());
//!     let client = AsyncBricklinkClient::build(builder).await.unwrap();
//!
//!     let item = client.get_item(ItemType::Part, "3001").await.unwrap();
//!
//!     // Run any sync client method via closure
//!     let groups = client
//!         .run(|c| c.catalog().get_supersets(&ItemType::Part, "3001", &Default::default()))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{BricklinkError, Result};
use crate::models::{CatalogItem, ItemType, PriceGuide, SubsetEntry, SupersetGroup};
use crate::url_builder::{PriceGuideParams, SubsetParams, SupersetParams};
use crate::{BricklinkClient, BricklinkClientBuilder};

/// Async wrapper around [`BricklinkClient`].
///
/// The client holds no mutable state, so it is shared behind an [`Arc`] and
/// each call runs on its own blocking task.
#[derive(Clone)]
pub struct AsyncBricklinkClient {
    inner: Arc<BricklinkClient>,
}

impl AsyncBricklinkClient {
    pub fn new(client: BricklinkClient) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Build the underlying client on the blocking thread pool.
    ///
    /// reqwest's blocking client must not be constructed on an async worker.
    pub async fn build(builder: BricklinkClientBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || builder.build().map(Self::new))
            .await
            .map_err(|e| BricklinkError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&BricklinkClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| BricklinkError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn get_item(&self, item_type: ItemType, no: impl Into<String>) -> Result<CatalogItem> {
        let no = no.into();
        self.run(move |c| c.catalog().get_item(&item_type, &no)).await
    }

    pub async fn get_item_image(
        &self,
        item_type: ItemType,
        no: impl Into<String>,
        color_id: u32,
    ) -> Result<CatalogItem> {
        let no = no.into();
        self.run(move |c| c.catalog().get_item_image(&item_type, &no, color_id))
            .await
    }

    pub async fn get_supersets(
        &self,
        item_type: ItemType,
        no: impl Into<String>,
        params: SupersetParams,
    ) -> Result<Vec<SupersetGroup>> {
        let no = no.into();
        self.run(move |c| c.catalog().get_supersets(&item_type, &no, &params))
            .await
    }

    pub async fn get_subsets(
        &self,
        item_type: ItemType,
        no: impl Into<String>,
        params: SubsetParams,
    ) -> Result<Vec<SubsetEntry>> {
        let no = no.into();
        self.run(move |c| c.catalog().get_subsets(&item_type, &no, &params))
            .await
    }

    pub async fn get_price_guide(
        &self,
        item_type: ItemType,
        no: impl Into<String>,
        params: PriceGuideParams,
    ) -> Result<PriceGuide> {
        let no = no.into();
        self.run(move |c| c.catalog().get_price_guide(&item_type, &no, &params))
            .await
    }
}
