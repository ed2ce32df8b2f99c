//! JWT header and claims for V3 API authentication.
//!
//! The wire format follows the server contract exactly: claims
//! `{aud, iss, kid, exp, iat}` and a JOSE header extended with the custom
//! `gv-ver` parameter identifying the token scheme version.

use serde::{Deserialize, Serialize};

/// Audience expected by the V3 API.
pub const AUDIENCE: &str = "groupvan";

/// Token scheme version carried in the `gv-ver` header parameter.
pub const HEADER_VERSION: &str = "GV-JWT-V1";

/// Signing algorithm. The server rejects anything but RS256.
pub const ALGORITHM: &str = "RS256";

/// Registered claims of a V3 API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub aud: String,
    /// Issuer: the developer ID.
    pub iss: String,
    /// ID of the key pair the token is signed with.
    pub kid: String,
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Issued-at, Unix seconds.
    pub iat: i64,
}

impl Claims {
    /// Builds the claim set for a token issued now-ish.
    #[must_use]
    pub fn new(developer_id: &str, key_id: &str, issued_at: i64, expires_in_secs: i64) -> Self {
        Self {
            aud: AUDIENCE.to_string(),
            iss: developer_id.to_string(),
            kid: key_id.to_string(),
            exp: issued_at + expires_in_secs,
            iat: issued_at,
        }
    }
}

/// JOSE header of a V3 API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
    /// Custom parameter: `"GV-JWT-V1"`. `"gv-ver"` on the wire.
    #[serde(rename = "gv-ver")]
    pub gv_ver: String,
    pub kid: String,
}

impl TokenHeader {
    /// The header every token signed with `key_id` carries.
    #[must_use]
    pub fn for_key(key_id: &str) -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
            gv_ver: HEADER_VERSION.to_string(),
            kid: key_id.to_string(),
        }
    }
}
