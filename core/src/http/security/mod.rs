//! Request security helpers.

pub mod api_key;
pub mod extractor;

pub use api_key::{
    get_api_key, parse_authorization, ApiKeyConfig, ApiKeyError, ApiKeyExtractor, HeaderSource,
};
pub use extractor::{ApiKey, OptionalApiKey};
