//! # API Key Auth
//!
//! `Authorization: ApiKey <key>` extraction for Actix Web.
//!
//! This crate re-exports `apikey-auth-core` and adds a prelude.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! actix-web = "4"
//! apikey-auth = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use actix_web::{get, App, HttpServer, HttpResponse, Responder};
//! use apikey_auth::prelude::*;
//!
//! #[get("/api/data")]
//! async fn data(key: ApiKey) -> impl Responder {
//!     HttpResponse::Ok().body(format!("key has {} characters", key.len()))
//! }
//!
//! App::new()
//!     .app_data(ApiKeyConfig::new())
//!     .service(data)
//! ```
//!
//! Outside of a handler, read the key from any header map:
//!
//! ```rust,ignore
//! let key = get_api_key(req.headers())?;
//! ```
//!
//! ## Modules
//!
//! - [`http::security::api_key`] - header grammar, configuration and error kinds
//! - [`http::security::extractor`] - request extractors

// Re-export everything from apikey-auth-core
pub use apikey_auth_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use apikey_auth_core::http::security::{
        get_api_key, ApiKey, ApiKeyConfig, ApiKeyError, ApiKeyExtractor, OptionalApiKey,
    };
}
