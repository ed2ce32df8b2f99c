//! RS256 token generation for authenticated V3 API requests.
//!
//! A token is the compact JWS `base64url(header).base64url(claims).
//! base64url(signature)`, signed RSA-PKCS1-SHA256 with the developer's
//! private key. The server verifies with the registered public key only;
//! no shared secret ever leaves the client.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use ring::rand::SystemRandom;
use ring::signature::{RsaKeyPair, RSA_PKCS1_SHA256};

use crate::access_key::AccessKey;
use crate::claims::{Claims, TokenHeader};
use crate::error::AuthError;
use crate::pem::{self, KeyEncoding};

/// Default token lifetime in seconds. Tokens are meant to be minted per
/// request batch, not cached long-term.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 300;

/// Generates a signed V3 API token for the given access key.
///
/// `expires_in_secs` sets `exp` relative to the current Unix time; use
/// [`DEFAULT_TOKEN_TTL_SECS`] unless the server contract says otherwise.
///
/// # Errors
///
/// - [`AuthError::InvalidKey`] if the PEM cannot be parsed or `ring`
///   rejects the key material.
/// - [`AuthError::Json`] if header or claims fail to serialize.
/// - [`AuthError::Signing`] if the signature computation fails.
pub fn generate_token(key: &AccessKey, expires_in_secs: i64) -> Result<String, AuthError> {
    let decoded = pem::decode_private_key(&key.private_key_pem)?;
    let key_pair = match decoded.encoding {
        KeyEncoding::Pkcs8 => RsaKeyPair::from_pkcs8(&decoded.der),
        KeyEncoding::Pkcs1 => RsaKeyPair::from_der(&decoded.der),
    }
    .map_err(|e| AuthError::InvalidKey(e.to_string()))?;

    let issued_at = chrono::Utc::now().timestamp();
    let header = TokenHeader::for_key(&key.key_id);
    let claims = Claims::new(&key.developer_id, &key.key_id, issued_at, expires_in_secs);

    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?);
    let claims_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
    let signing_input = format!("{header_b64}.{claims_b64}");

    let rng = SystemRandom::new();
    let mut signature = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(
            &RSA_PKCS1_SHA256,
            &rng,
            signing_input.as_bytes(),
            &mut signature,
        )
        .map_err(|_| AuthError::Signing)?;

    tracing::debug!(
        developer_id = %key.developer_id,
        kid = %key.key_id,
        ttl_secs = expires_in_secs,
        "generated V3 API token"
    );

    Ok(format!(
        "{signing_input}.{}",
        URL_SAFE_NO_PAD.encode(&signature)
    ))
}

/// Decodes a token's header and claims **without verifying the signature**.
///
/// Debugging aid: it shows the shape the signer put on the wire, nothing
/// more. Verification belongs to the server, which holds the public key.
///
/// # Errors
///
/// Returns [`AuthError::MalformedToken`] if the input is not three
/// dot-separated base64url segments carrying JSON.
pub fn inspect_token(token: &str) -> Result<(TokenHeader, Claims), AuthError> {
    let mut segments = token.split('.');
    let (Some(header), Some(claims), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::MalformedToken(
            "expected three dot-separated segments".to_string(),
        ));
    };

    Ok((
        decode_segment(header, "header")?,
        decode_segment(claims, "claims")?,
    ))
}

/// The `Authorization` header value for a generated token.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

fn decode_segment<T: serde::de::DeserializeOwned>(
    segment: &str,
    what: &str,
) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| AuthError::MalformedToken(format!("{what} segment is not base64url: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::MalformedToken(format!("{what} segment is not valid JSON: {e}")))
}

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;
