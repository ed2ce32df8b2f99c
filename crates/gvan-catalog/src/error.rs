use thiserror::Error;

/// Errors returned when decoding catalog API payloads.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload could not be deserialized into the expected type.
    ///
    /// Raised only for *present* fields of the wrong JSON type (or for
    /// documents that are not JSON at all); absent optional fields decode
    /// to their defaults instead.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
