//! Authorization Header Parsing
//!
//! Extracts credentials from `Authorization: Token <value>` (the scheme used by
//! the quiz frontend) or `Authorization: Bearer <value>`.

use axum::http::{HeaderMap, header};

/// Schemes accepted in the `Authorization` header (case-insensitive)
pub const ACCEPTED_SCHEMES: &[&str] = &["Token", "Bearer"];

/// Outcome of reading the `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No `Authorization` header at all
    Absent,
    /// A token under an accepted scheme
    Token(String),
    /// Header present but unusable (unknown scheme, empty value, non-ASCII)
    Invalid,
}

pub fn extract_credentials(headers: &HeaderMap) -> Credentials {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Credentials::Absent;
    };

    let Ok(value) = value.to_str() else {
        return Credentials::Invalid;
    };

    let Some((scheme, token)) = value.trim().split_once(' ') else {
        return Credentials::Invalid;
    };

    let token = token.trim();
    let scheme_ok = ACCEPTED_SCHEMES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(scheme));

    if !scheme_ok || token.is_empty() || token.contains(' ') {
        return Credentials::Invalid;
    }

    Credentials::Token(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_credentials(&HeaderMap::new()), Credentials::Absent);
    }

    #[test]
    fn test_token_scheme() {
        assert_eq!(
            extract_credentials(&headers_with("Token abc.def")),
            Credentials::Token("abc.def".to_string())
        );
    }

    #[test]
    fn test_bearer_scheme_case_insensitive() {
        assert_eq!(
            extract_credentials(&headers_with("bearer abc.def")),
            Credentials::Token("abc.def".to_string())
        );
    }

    #[test]
    fn test_invalid_headers() {
        assert_eq!(extract_credentials(&headers_with("Basic dXNlcjpwdw==")), Credentials::Invalid);
        assert_eq!(extract_credentials(&headers_with("Token")), Credentials::Invalid);
        assert_eq!(extract_credentials(&headers_with("Token ")), Credentials::Invalid);
        assert_eq!(extract_credentials(&headers_with("Token a b")), Credentials::Invalid);
    }
}
