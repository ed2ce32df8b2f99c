//! Typed models for the GroupVAN V3 product-catalog API.
//!
//! Each type mirrors one JSON response shape and is constructed with
//! `from_value`/`from_json`, read immutably, and discarded. There is no
//! transport here; pair these models with any HTTP client, and with
//! `gvan-auth` for request signing.
//!
//! Decoding is strict about types and lenient about absence: a missing field
//! becomes `None`/`false`/empty, a present field of the wrong type is a
//! [`CatalogError::Deserialize`].

pub mod error;
pub mod types;

mod decode;

pub use error::CatalogError;
pub use types::{
    Asset, AssetImage, Document, InfoAttribute, LocationDetails, ProductInfoResponse, SpinAsset,
    SpinAssetResponse,
};
