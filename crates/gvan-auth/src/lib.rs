//! Developer authentication for the GroupVAN V3 APIs.
//!
//! Implements the `GV-JWT-V1` scheme: short-lived RS256 JWTs signed with a
//! developer's registered RSA private key. Pair with `gvan-catalog` for the
//! response models and any HTTP client for transport; this crate never
//! touches the network.
//!
//! ```no_run
//! use gvan_auth::{generate_token, bearer_value, AccessKey, DEFAULT_TOKEN_TTL_SECS};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let key = AccessKey::from_json(&std::fs::read_to_string("credentials.json")?)?;
//! let token = generate_token(&key, DEFAULT_TOKEN_TTL_SECS)?;
//! let authorization = bearer_value(&token);
//! # Ok(())
//! # }
//! ```

pub mod access_key;
pub mod claims;
pub mod error;
pub mod token;

mod pem;

pub use access_key::AccessKey;
pub use claims::{Claims, TokenHeader, ALGORITHM, AUDIENCE, HEADER_VERSION};
pub use error::AuthError;
pub use token::{bearer_value, generate_token, inspect_token, DEFAULT_TOKEN_TTL_SECS};
