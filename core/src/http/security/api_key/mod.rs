//! API Key extraction for Actix Web.
//!
//! # Overview
//!
//! Clients send a pre-shared key in the Authorization header:
//!
//! ```text
//! Authorization: ApiKey sk_live_abc123
//! ```
//!
//! This module only reads the key. Checking it against a credential store is
//! left to the caller.
//!
//! # Header Grammar
//!
//! The header value is split on single spaces. The first field must equal the
//! scheme (`ApiKey`) and the second field is the key:
//!
//! | Header value            | Result                          |
//! |-------------------------|---------------------------------|
//! | *(absent or empty)*     | `Err(NoAuthHeader)`             |
//! | `ApiKey my-secret`      | `Ok("my-secret")`               |
//! | `ApiKey my-secret `     | `Ok("my-secret")`               |
//! | `ApiKey    my-secret`   | `Ok("")`                        |
//! | `ApiKeymy-secret`       | `Err(MalformedHeader)`          |
//! | `Bearer my-secret`      | `Err(MalformedHeader)`          |
//!
//! Runs of spaces are not collapsed, so extra spaces after the scheme produce
//! an empty key rather than an error.
//!
//! # Usage
//!
//! ```ignore
//! use apikey_auth::http::security::api_key::{get_api_key, ApiKeyError};
//!
//! match get_api_key(req.headers()) {
//!     Ok(key) => lookup(&key),
//!     Err(ApiKeyError::NoAuthHeader) => challenge(),
//!     Err(ApiKeyError::MalformedHeader) => reject(),
//! }
//! ```
//!
//! ## With Custom Header
//!
//! ```ignore
//! let extractor = ApiKeyExtractor::new()
//!     .config(ApiKeyConfig::new().header("X-Service-Auth").scheme("Token"));
//!
//! let key = extractor.extract(&req)?;
//! ```

mod config;
mod error;
mod extractor;

pub use config::{ApiKeyConfig, DEFAULT_SCHEME};
pub use error::ApiKeyError;
pub use extractor::{get_api_key, parse_authorization, ApiKeyExtractor, HeaderSource};
