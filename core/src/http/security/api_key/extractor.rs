//! Authorization header parsing.

use actix_web::dev::ServiceRequest;
use actix_web::http::header::{HeaderMap, HeaderValue};
use actix_web::HttpRequest;

use super::config::ApiKeyConfig;
use super::error::ApiKeyError;

/// Anything that can hand out a header value by (case-insensitive) name.
pub trait HeaderSource {
    /// Returns the first value stored under `name`, if any.
    fn header_value(&self, name: &str) -> Option<&HeaderValue>;
}

impl HeaderSource for HeaderMap {
    fn header_value(&self, name: &str) -> Option<&HeaderValue> {
        self.get(name)
    }
}

impl HeaderSource for HttpRequest {
    fn header_value(&self, name: &str) -> Option<&HeaderValue> {
        self.headers().get(name)
    }
}

impl HeaderSource for ServiceRequest {
    fn header_value(&self, name: &str) -> Option<&HeaderValue> {
        self.headers().get(name)
    }
}

/// Splits a header value of the form `<scheme> <key>` and returns the key.
///
/// The value is split on single spaces and the key is the second field, so
/// `"ApiKey    k"` yields an empty key and `"ApiKey k "` yields `"k"`.
/// Anything that does not start with exactly `scheme` followed by a space is
/// [`ApiKeyError::MalformedHeader`]; an empty value is
/// [`ApiKeyError::NoAuthHeader`].
pub fn parse_authorization<'a>(value: &'a str, scheme: &str) -> Result<&'a str, ApiKeyError> {
    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }

    let (found, rest) = value
        .split_once(' ')
        .ok_or(ApiKeyError::MalformedHeader)?;

    if found != scheme {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(rest.split_once(' ').map_or(rest, |(key, _)| key))
}

/// Extracts the key from `Authorization: ApiKey <key>`.
///
/// # Example
///
/// ```
/// use actix_web::http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
/// use apikey_auth_core::http::security::{get_api_key, ApiKeyError};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
///
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey my-secret"));
/// assert_eq!(get_api_key(&headers).as_deref(), Ok("my-secret"));
/// ```
pub fn get_api_key<S>(headers: &S) -> Result<String, ApiKeyError>
where
    S: HeaderSource + ?Sized,
{
    ApiKeyExtractor::default().extract(headers)
}

/// Reads API keys according to an [`ApiKeyConfig`].
///
/// Stateless apart from its configuration; one instance can be shared across
/// workers.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyExtractor {
    config: ApiKeyConfig,
}

impl ApiKeyExtractor {
    /// Creates an extractor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration for this extractor.
    pub fn config(mut self, config: ApiKeyConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration in use.
    pub fn get_config(&self) -> &ApiKeyConfig {
        &self.config
    }

    /// Extracts the API key from the configured header.
    pub fn extract<S>(&self, source: &S) -> Result<String, ApiKeyError>
    where
        S: HeaderSource + ?Sized,
    {
        match self.read(source) {
            Ok(key) => {
                log::trace!("API key read from {} header", self.config.get_header());
                Ok(key.to_string())
            }
            Err(err) => {
                log::debug!(
                    "API key rejected from {} header: {}",
                    self.config.get_header(),
                    err
                );
                Err(err)
            }
        }
    }

    fn read<'a, S>(&self, source: &'a S) -> Result<&'a str, ApiKeyError>
    where
        S: HeaderSource + ?Sized,
    {
        let value = source
            .header_value(self.config.get_header())
            .ok_or(ApiKeyError::NoAuthHeader)?;

        if value.is_empty() {
            return Err(ApiKeyError::NoAuthHeader);
        }

        // UTF-8 keys are accepted; only bytes that do not decode are rejected.
        let value =
            std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

        parse_authorization(value, self.config.get_scheme())
    }
}
