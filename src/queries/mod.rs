//! Query modules for the BrickLink SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`BricklinkClient`](crate::BricklinkClient) and returns typed models.

pub mod catalog;

pub use catalog::CatalogQuery;
