//! Extractors for reading the API key in handlers.

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::http::security::api_key::{ApiKeyConfig, ApiKeyError, ApiKeyExtractor};

fn extractor_for(req: &HttpRequest) -> ApiKeyExtractor {
    let config = req.app_data::<ApiKeyConfig>().cloned().unwrap_or_default();
    ApiKeyExtractor::new().config(config)
}

/// Extractor for the API key sent with the request.
///
/// Reads the header described by the app's [`ApiKeyConfig`] (registered with
/// `App::app_data`), or `Authorization: ApiKey <key>` when none is set.
///
/// # Usage
/// ```ignore
/// use apikey_auth_core::http::security::ApiKey;
///
/// async fn handler(key: ApiKey) -> impl Responder {
///     format!("{} characters", key.len())
/// }
/// ```
///
/// # Errors
/// Returns `401 Unauthorized` with the [`ApiKeyError`] message if the header
/// is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns the inner key.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ApiKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for ApiKey {
    type Error = ApiKeyError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extractor_for(req).extract(req).map(ApiKey))
    }
}

/// Optional extractor for the API key.
///
/// Yields `None` instead of an error when the header is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalApiKey(Option<String>);

impl OptionalApiKey {
    /// Returns the inner Option<String>.
    pub fn into_inner(self) -> Option<String> {
        self.0
    }

    /// Returns true if a key was read.
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl Deref for OptionalApiKey {
    type Target = Option<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for OptionalApiKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let key = extractor_for(req).extract(req).ok();
        ready(Ok(OptionalApiKey(key)))
    }
}
