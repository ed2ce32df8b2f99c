use thiserror::Error;

/// Errors returned while generating or inspecting V3 API tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The private key PEM could not be parsed, or the key material was
    /// rejected (wrong algorithm, unsupported size, corrupt DER).
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// The RSA signature computation failed.
    #[error("failed to sign token")]
    Signing,

    /// The input to [`inspect_token`](crate::token::inspect_token) is not a
    /// compact JWS.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Header or claims could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
