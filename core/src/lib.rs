//! # API Key Auth Core
//!
//! Extraction of API keys carried in the `Authorization` header
//! (`Authorization: ApiKey <key>`) for Actix Web applications.
//!
//! The functionality lives in the `http` module:
//!
//! - [`http::security::api_key`] - header grammar, configuration and error kinds
//! - [`http::security::extractor`] - request extractors for handlers

pub mod http;
