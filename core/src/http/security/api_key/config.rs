//! API Key extraction configuration.

use actix_web::http::header::AUTHORIZATION;

/// Scheme token expected in front of the key.
pub const DEFAULT_SCHEME: &str = "ApiKey";

/// Configuration for API key extraction.
///
/// Register it with `App::app_data` to change what the
/// [`ApiKey`](crate::http::security::ApiKey) extractor reads; without it the
/// defaults below apply.
///
/// # Example
///
/// ```
/// use apikey_auth_core::http::security::ApiKeyConfig;
///
/// let config = ApiKeyConfig::new().header("X-Service-Auth").scheme("Token");
/// assert_eq!(config.get_scheme(), "Token");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyConfig {
    /// Header holding `<scheme> <key>`.
    header: String,
    /// Scheme token, compared exactly.
    scheme: String,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            header: AUTHORIZATION.as_str().to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl ApiKeyConfig {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header to read the key from.
    pub fn header(mut self, name: impl Into<String>) -> Self {
        self.header = name.into();
        self
    }

    /// Sets the scheme token expected before the key.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Returns the header name.
    pub fn get_header(&self) -> &str {
        &self.header
    }

    /// Returns the scheme token.
    pub fn get_scheme(&self) -> &str {
        &self.scheme
    }
}
