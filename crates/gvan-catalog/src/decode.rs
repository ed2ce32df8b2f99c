//! Strict decoding of catalog payloads with operation context.
//!
//! Thin wrappers over `serde_json` that attach the model name to the error
//! so callers can tell *which* response shape was violated. Failures are
//! logged at `debug!` and then propagated to the caller, never swallowed.

use serde::de::DeserializeOwned;

use crate::error::CatalogError;

pub(crate) fn from_value<T: DeserializeOwned>(
    value: serde_json::Value,
    context: &str,
) -> Result<T, CatalogError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(context, error = %e, "catalog payload decode failed");
        CatalogError::Deserialize {
            context: context.to_string(),
            source: e,
        }
    })
}

pub(crate) fn from_json<T: DeserializeOwned>(
    json: &str,
    context: &str,
) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|e| {
        tracing::debug!(context, error = %e, "catalog payload decode failed");
        CatalogError::Deserialize {
            context: context.to_string(),
            source: e,
        }
    })
}
