//! Authorization header grammar tests.
//!
//! Runs `get_api_key` directly against header maps.


use actix_web::http::header::HeaderMap;

use apikey_auth::prelude::{get_api_key, ApiKeyError};
use common::authorization;

struct Case {
    name: &'static str,
    header: Option<&'static str>,
    expected: Result<&'static str, ApiKeyError>,
}

#[test]
fn test_get_api_key_scenarios() {
    let cases = [
        Case {
            name: "missing header",
            header: None,
            expected: Err(ApiKeyError::NoAuthHeader),
        },
        Case {
            name: "valid header",
            header: Some("ApiKey my-secret"),
            expected: Ok("my-secret"),
        },
        Case {
            name: "no space between scheme and key",
            header: Some("ApiKeymy-secret"),
            expected: Err(ApiKeyError::MalformedHeader),
        },
        Case {
            name: "wrong scheme",
            header: Some("Bearer my-secret"),
            expected: Err(ApiKeyError::MalformedHeader),
        },
        Case {
            // Runs of spaces are not collapsed: the second field is empty.
            name: "multiple spaces between scheme and key",
            header: Some("ApiKey    my-secret"),
            expected: Ok(""),
        },
        Case {
            name: "trailing space after key",
            header: Some("ApiKey my-secret "),
            expected: Ok("my-secret"),
        },
    ];

    for case in cases {
        let headers = match case.header {
            Some(value) => authorization(value),
            None => HeaderMap::new(),
        };

        let got = get_api_key(&headers);
        assert_eq!(
            got,
            case.expected.map(String::from),
            "case {:?}: header {:?}",
            case.name,
            case.header
        );
    }
}

#[test]
fn test_malformed_message_text() {
    let err = get_api_key(&authorization("Bearer my-secret")).unwrap_err();
    assert_eq!(err.to_string(), "malformed authorization header");
}

#[test]
fn test_empty_header_is_missing() {
    assert_eq!(
        get_api_key(&authorization("")),
        Err(ApiKeyError::NoAuthHeader)
    );
}

#[test]
fn test_any_token_without_spaces_is_returned() {
    let tokens = [
        "k",
        "my-secret",
        "sk_live_abc123",
        "ApiKey",
        "a.b.c",
        "0123456789abcdef0123456789abcdef",
        "key=with/base64+chars==",
    ];

    for token in tokens {
        let headers = authorization(&format!("ApiKey {}", token));
        assert_eq!(get_api_key(&headers).as_deref(), Ok(token), "token {:?}", token);
    }
}

#[test]
fn test_any_other_scheme_is_malformed() {
    let schemes = ["Bearer", "Basic", "apikey", "APIKEY", "Api-Key", "Token", "ApiKeys", "X"];

    for scheme in schemes {
        let headers = authorization(&format!("{} my-secret", scheme));
        assert_eq!(
            get_api_key(&headers),
            Err(ApiKeyError::MalformedHeader),
            "scheme {:?}",
            scheme
        );
    }
}

#[test]
fn test_any_value_without_space_is_malformed() {
    let values = ["ApiKey", "ApiKeymy-secret", "Bearer", "my-secret", "ApiKey\tmy-secret"];

    for value in values {
        assert_eq!(
            get_api_key(&authorization(value)),
            Err(ApiKeyError::MalformedHeader),
            "value {:?}",
            value
        );
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let inputs = [
        HeaderMap::new(),
        authorization("ApiKey my-secret"),
        authorization("Bearer my-secret"),
        authorization("ApiKey    my-secret"),
    ];

    for headers in &inputs {
        assert_eq!(get_api_key(headers), get_api_key(headers));
    }
}

#[test]
fn test_concurrent_calls() {
    let headers = authorization("ApiKey shared-secret");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| get_api_key(&headers)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok("shared-secret".to_string()));
        }
    });
}
