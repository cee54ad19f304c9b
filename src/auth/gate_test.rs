//! Tests for the access gate and credential extraction.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use super::{AccessSecret, AuthConfig, AuthError};

fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    map
}

fn gated(secret: &str) -> AuthConfig {
    AuthConfig::new(AccessSecret::new(secret))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_valid_secret_and_bearer_token_resolves_session() {
    let auth = gated("s3cret");
    let request = headers(&[("X-Mcp-Token", "s3cret"), ("Authorization", "Bearer abc123")]);

    let session = auth.authenticate(&request).expect("should authenticate");
    assert_eq!(session.api_token(), "abc123");
}

#[test]
fn test_wrong_secret_is_rejected() {
    let auth = gated("s3cret");
    let request = headers(&[("X-Mcp-Token", "wrong"), ("Authorization", "Bearer abc123")]);

    let err = auth.authenticate(&request).unwrap_err();
    assert_eq!(err, AuthError::InvalidAccessSecret);
    assert_eq!(err.status().as_u16(), 401);
    assert_eq!(err.to_string(), "Unauthorized - Invalid MCP token");
}

#[test]
fn test_missing_authorization_is_rejected() {
    let auth = gated("s3cret");
    let request = headers(&[("X-Mcp-Token", "s3cret")]);

    let err = auth.authenticate(&request).unwrap_err();
    assert_eq!(err, AuthError::MissingCredential);
    assert_eq!(err.status().as_u16(), 401);
    assert_eq!(err.to_string(), "Unauthorized - Missing Todoist API token");
}

#[test]
fn test_unset_secret_allows_request_without_access_header() {
    let auth = AuthConfig::default();
    let request = headers(&[("Authorization", "Bearer abc123")]);

    let session = auth.authenticate(&request).expect("gate should be disabled");
    assert_eq!(session.api_token(), "abc123");
}

// =============================================================================
// Access gate
// =============================================================================

#[test]
fn test_missing_access_header_is_rejected_when_secret_configured() {
    let auth = gated("s3cret");
    let request = headers(&[("Authorization", "Bearer abc123")]);

    assert_eq!(
        auth.check_access(&request),
        Err(AuthError::InvalidAccessSecret)
    );
}

#[test]
fn test_access_gate_runs_before_credential_check() {
    // Neither header is valid; the access failure must win.
    let auth = gated("s3cret");
    let request = headers(&[]);

    assert_eq!(
        auth.authenticate(&request),
        Err(AuthError::InvalidAccessSecret)
    );
}

#[test]
fn test_secret_comparison_is_exact() {
    let auth = gated("s3cret");

    for candidate in ["S3CRET", "s3cret ", "s3cre", "s3cret2"] {
        let request = headers(&[("X-Mcp-Token", candidate)]);
        assert_eq!(
            auth.check_access(&request),
            Err(AuthError::InvalidAccessSecret),
            "candidate {candidate:?} should not match"
        );
    }
}

#[test]
fn test_access_header_lookup_is_case_insensitive() {
    let auth = gated("s3cret");

    for name in ["x-mcp-token", "X-Mcp-Token", "X-MCP-TOKEN"] {
        let request = headers(&[(name, "s3cret")]);
        assert!(auth.check_access(&request).is_ok(), "{name} should match");
    }
}

#[test]
fn test_repeated_access_header_uses_first_value() {
    let auth = gated("s3cret");

    let first_ok = headers(&[("X-Mcp-Token", "s3cret"), ("X-Mcp-Token", "wrong")]);
    assert!(auth.check_access(&first_ok).is_ok());

    let first_wrong = headers(&[("X-Mcp-Token", "wrong"), ("X-Mcp-Token", "s3cret")]);
    assert_eq!(
        auth.check_access(&first_wrong),
        Err(AuthError::InvalidAccessSecret)
    );
}

#[test]
fn test_custom_access_header() {
    let auth = gated("s3cret").with_access_header(HeaderName::from_static("x-server-key"));

    let request = headers(&[("X-Server-Key", "s3cret"), ("Authorization", "Bearer abc")]);
    assert!(auth.authenticate(&request).is_ok());

    let request = headers(&[("X-Mcp-Token", "s3cret"), ("Authorization", "Bearer abc")]);
    assert_eq!(
        auth.authenticate(&request),
        Err(AuthError::InvalidAccessSecret)
    );
}

// =============================================================================
// Credential extraction
// =============================================================================

#[test]
fn test_bearer_prefix_is_stripped_and_trimmed() {
    let auth = AuthConfig::default();

    for value in [
        "Bearer abc123",
        "bearer abc123",
        "BEARER abc123",
        "Bearer    abc123   ",
        "  Bearer\tabc123",
    ] {
        let request = headers(&[("Authorization", value)]);
        let session = auth.extract_session(&request).unwrap();
        assert_eq!(session.api_token(), "abc123", "value {value:?}");
    }
}

#[test]
fn test_credential_header_lookup_is_case_insensitive() {
    let auth = AuthConfig::default();

    for name in ["authorization", "Authorization", "AUTHORIZATION"] {
        let request = headers(&[(name, "Bearer abc123")]);
        assert_eq!(auth.extract_session(&request).unwrap().api_token(), "abc123");
    }
}

#[test]
fn test_empty_credential_after_stripping_is_rejected() {
    let auth = AuthConfig::default();

    for value in ["", "Bearer", "Bearer   ", "   "] {
        let request = headers(&[("Authorization", value)]);
        assert_eq!(
            auth.extract_session(&request),
            Err(AuthError::MissingCredential),
            "value {value:?}"
        );
    }
}

#[test]
fn test_dedicated_token_header_without_scheme() {
    let auth = AuthConfig::default()
        .with_credential_header(HeaderName::from_static("x-todoist-token"));

    let request = headers(&[("X-Todoist-Token", "raw-token")]);
    assert_eq!(auth.extract_session(&request).unwrap().api_token(), "raw-token");

    // The default header is no longer consulted.
    let request = headers(&[("Authorization", "Bearer abc123")]);
    assert_eq!(
        auth.extract_session(&request),
        Err(AuthError::MissingCredential)
    );
}

#[test]
fn test_repeated_credential_header_uses_first_value() {
    let auth = AuthConfig::default();
    let request = headers(&[("Authorization", "Bearer first"), ("Authorization", "Bearer second")]);

    assert_eq!(auth.extract_session(&request).unwrap().api_token(), "first");
}

#[test]
fn test_non_utf8_credential_is_missing() {
    let auth = AuthConfig::default();
    let mut request = HeaderMap::new();
    request.insert(
        HeaderName::from_static("authorization"),
        HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap(),
    );

    assert_eq!(
        auth.extract_session(&request),
        Err(AuthError::MissingCredential)
    );
}
