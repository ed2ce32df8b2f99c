//! GroupVAN catalog API response types.
//!
//! All types model the JSON structures returned by the V3 catalog endpoints.
//! Field names on the wire are snake_case; every field may be omitted by the
//! API, so absence always decodes to the field's default and never errors.
//! A present field with the wrong JSON type is a decode failure; see
//! [`CatalogError::Deserialize`](crate::error::CatalogError).
//!
//! Defaults are intentionally uneven across types (`false` for
//! `AssetImage::primary`, empty `Vec` for collections, `None` for scalars)
//! because that is what each endpoint documents; do not unify them.

use std::collections::HashMap;

use serde::Deserialize;

use crate::decode;
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Product info
// ---------------------------------------------------------------------------

/// Full product metadata returned by the product-info endpoint.
///
/// Scalar identifiers plus the product's documents, attributes, and 360°
/// spin sets, composed by value. Absent arrays decode to empty collections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInfoResponse {
    /// Catalog brand identifier, e.g. `"123"`. Numeric on some endpoints
    /// but always transported as a string here.
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Distribution line code, e.g. `"BWD"`.
    #[serde(default)]
    pub line_code: Option<String>,
    /// Manufacturer part number, e.g. `"PSW144"`.
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub spin_assets: Vec<SpinAsset>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub attributes: Vec<InfoAttribute>,
}

/// A piece of product literature (installation sheet, MSDS, brochure, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Document category. `"type"` on the wire.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// File format, e.g. `"pdf"`.
    #[serde(default)]
    pub format: Option<String>,
    /// ISO language code, e.g. `"en"`.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A generic name/value annotation on a product.
///
/// `group` and `sequence` are presentation hints: attributes with the same
/// `group` belong together, ordered by `sequence` within the group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InfoAttribute {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub group: Option<i32>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// One product image, offered at up to three resolutions.
///
/// `primary` marks the image shown first in galleries; the API omits the
/// field entirely for non-primary images, so it defaults to `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetImage {
    #[serde(default)]
    pub primary: bool,
    /// Full-resolution URL. `"large_path"` on the wire.
    #[serde(default, rename = "large_path")]
    pub large: Option<String>,
    /// Mid-resolution URL. `"medium_path"` on the wire.
    #[serde(default, rename = "medium_path")]
    pub medium: Option<String>,
    /// Thumbnail URL. `"thumb_path"` on the wire.
    #[serde(default, rename = "thumb_path")]
    pub thumb: Option<String>,
}

/// A typed group of product images, e.g. all packaging shots.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Asset {
    /// Asset category. `"type"` on the wire.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub images: Vec<AssetImage>,
}

/// One 360° spin set: an ordered sequence of frame URLs.
///
/// Frame order is significant: frames are captured at fixed angular steps
/// and played back in wire order. `base_url` is the common URL prefix some
/// viewers need alongside the individual frames.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpinAsset {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub frames: Vec<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Response envelope for the spin-asset endpoint: `{ "spin_assets": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpinAssetResponse {
    #[serde(default)]
    pub spin_assets: Vec<SpinAsset>,
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// A store or branch location.
///
/// The only catalog type that travels in both directions (location updates
/// are submitted with the same shape they are fetched in), so it implements
/// [`LocationDetails::to_value`] and `PartialEq` for round-trip checks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationDetails {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Opening hours keyed by day name, e.g. `"monday" => "8:00-17:00"`.
    #[serde(default)]
    pub hours: HashMap<String, String>,
}

impl LocationDetails {
    /// Encodes this location back into the untyped map shape the API accepts,
    /// symmetric with decoding: `from_value(x.to_value()) == x`.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "latitude": &self.latitude,
            "longitude": &self.longitude,
            "description": &self.description,
            "hours": &self.hours,
        })
    }
}

// ---------------------------------------------------------------------------
// Decode constructors
// ---------------------------------------------------------------------------

impl ProductInfoResponse {
    /// Decodes a value produced by a JSON parser.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] if a present field has the
    /// wrong JSON type. Absent fields are not an error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "ProductInfoResponse")
    }

    /// Decodes a raw JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] if the document is not valid
    /// JSON or a present field has the wrong JSON type.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "ProductInfoResponse")
    }
}

impl Document {
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on a type mismatch.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "Document")
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on invalid JSON or a type mismatch.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "Document")
    }
}

impl InfoAttribute {
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on a type mismatch.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "InfoAttribute")
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on invalid JSON or a type mismatch.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "InfoAttribute")
    }
}

impl AssetImage {
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on a type mismatch.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "AssetImage")
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on invalid JSON or a type mismatch.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "AssetImage")
    }
}

impl Asset {
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on a type mismatch.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "Asset")
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on invalid JSON or a type mismatch.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "Asset")
    }
}

impl SpinAsset {
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on a type mismatch.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "SpinAsset")
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on invalid JSON or a type mismatch.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "SpinAsset")
    }
}

impl SpinAssetResponse {
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on a type mismatch.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "SpinAssetResponse")
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on invalid JSON or a type mismatch.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "SpinAssetResponse")
    }
}

impl LocationDetails {
    /// Decodes a value produced by a JSON parser.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] if a present field has the
    /// wrong JSON type. `{"latitude": "not-a-number"}` fails rather than
    /// producing a silently wrong coordinate.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        decode::from_value(value, "LocationDetails")
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] on invalid JSON or a type mismatch.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        decode::from_json(json, "LocationDetails")
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
