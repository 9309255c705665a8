//! Basic and Bearer authentication checks.
//!
//! Credentials are static strings from the endpoint configuration; every
//! request is checked fresh against them.

use crate::config::AuthRule;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Outcome of an authentication check, carried into the request log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCheck {
    pub ok: bool,
    /// Scheme the check ran under ("basic", "bearer", empty without a rule)
    pub auth_type: String,
    /// Machine-readable outcome such as "success" or "invalid-token"
    pub result: String,
}

impl AuthCheck {
    fn pass(auth_type: &str, result: &str) -> Self {
        AuthCheck {
            ok: true,
            auth_type: auth_type.to_string(),
            result: result.to_string(),
        }
    }

    fn fail(auth_type: &str, result: &str) -> Self {
        AuthCheck {
            ok: false,
            auth_type: auth_type.to_string(),
            result: result.to_string(),
        }
    }
}

/// Check an `Authorization` header value against an endpoint's auth rule.
///
/// Without a rule every request passes. With one, a missing or empty
/// header fails, and the scheme-specific checks narrow the outcome from
/// format errors down to credential mismatches. The configured type is
/// matched case-insensitively; unsupported types fail closed.
pub fn authenticate(header: Option<&str>, rule: Option<&AuthRule>) -> AuthCheck {
    let rule = match rule {
        Some(rule) => rule,
        None => return AuthCheck::pass("", "no-auth"),
    };

    // Before a scheme is established the reported type is the configured
    // string as written; the scheme checks report the canonical name.
    let header = match header {
        Some(header) if !header.is_empty() => header,
        _ => return AuthCheck::fail(&rule.kind, "missing-auth"),
    };

    match rule.kind.to_lowercase().as_str() {
        "basic" => check_basic(header, rule),
        "bearer" => check_bearer(header, rule),
        _ => AuthCheck::fail(&rule.kind, "invalid-auth-type"),
    }
}

fn check_basic(header: &str, rule: &AuthRule) -> AuthCheck {
    let payload = match header.strip_prefix("Basic ") {
        Some(payload) => payload,
        None => return AuthCheck::fail("basic", "invalid-basic-format"),
    };
    let decoded = match STANDARD.decode(payload) {
        Ok(decoded) => decoded,
        Err(_) => return AuthCheck::fail("basic", "invalid-base64"),
    };
    let credentials = match String::from_utf8(decoded) {
        Ok(credentials) => credentials,
        Err(_) => return AuthCheck::fail("basic", "invalid-credentials-format"),
    };
    // Split on the first colon; passwords may themselves contain colons.
    let (username, password) = match credentials.split_once(':') {
        Some(parts) => parts,
        None => return AuthCheck::fail("basic", "invalid-credentials-format"),
    };

    if username == rule.username && password == rule.password {
        AuthCheck::pass("basic", "success")
    } else {
        AuthCheck::fail("basic", "invalid-credentials")
    }
}

fn check_bearer(header: &str, rule: &AuthRule) -> AuthCheck {
    let token = match header.strip_prefix("Bearer ") {
        Some(token) => token,
        None => return AuthCheck::fail("bearer", "invalid-bearer-format"),
    };

    if token == rule.token {
        AuthCheck::pass("bearer", "success")
    } else {
        AuthCheck::fail("bearer", "invalid-token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_rule() -> AuthRule {
        AuthRule {
            kind: "basic".to_string(),
            token: String::new(),
            username: "testuser".to_string(),
            password: "testpass".to_string(),
        }
    }

    fn bearer_rule() -> AuthRule {
        AuthRule {
            kind: "bearer".to_string(),
            token: "secret".to_string(),
            username: String::new(),
            password: String::new(),
        }
    }

    fn basic_header(credentials: &str) -> String {
        format!("Basic {}", STANDARD.encode(credentials))
    }

    #[test]
    fn test_no_rule_always_passes() {
        let check = authenticate(None, None);
        assert!(check.ok);
        assert_eq!(check.auth_type, "");
        assert_eq!(check.result, "no-auth");
    }

    #[test]
    fn test_missing_header_fails() {
        let check = authenticate(None, Some(&bearer_rule()));
        assert!(!check.ok);
        assert_eq!(check.auth_type, "bearer");
        assert_eq!(check.result, "missing-auth");

        let check = authenticate(Some(""), Some(&basic_rule()));
        assert_eq!(check.result, "missing-auth");
    }

    #[test]
    fn test_basic_success() {
        let header = basic_header("testuser:testpass");
        let check = authenticate(Some(&header), Some(&basic_rule()));
        assert!(check.ok);
        assert_eq!(check.auth_type, "basic");
        assert_eq!(check.result, "success");
    }

    #[test]
    fn test_basic_wrong_credentials() {
        let header = basic_header("wrong:wrong");
        let check = authenticate(Some(&header), Some(&basic_rule()));
        assert!(!check.ok);
        assert_eq!(check.result, "invalid-credentials");
    }

    #[test]
    fn test_basic_wrong_scheme_prefix() {
        let check = authenticate(Some("Bearer abc"), Some(&basic_rule()));
        assert_eq!(check.result, "invalid-basic-format");
    }

    #[test]
    fn test_basic_bad_base64() {
        let check = authenticate(Some("Basic !!!not-base64!!!"), Some(&basic_rule()));
        assert_eq!(check.result, "invalid-base64");
    }

    #[test]
    fn test_basic_payload_without_colon() {
        let header = basic_header("nocolon");
        let check = authenticate(Some(&header), Some(&basic_rule()));
        assert_eq!(check.result, "invalid-credentials-format");
    }

    #[test]
    fn test_basic_non_utf8_payload() {
        let header = format!("Basic {}", STANDARD.encode([0xff, 0xfe, 0xfd]));
        let check = authenticate(Some(&header), Some(&basic_rule()));
        assert_eq!(check.result, "invalid-credentials-format");
    }

    #[test]
    fn test_basic_password_containing_colon() {
        let mut rule = basic_rule();
        rule.password = "pa:ss".to_string();

        let header = basic_header("testuser:pa:ss");
        let check = authenticate(Some(&header), Some(&rule));
        assert!(check.ok);
    }

    #[test]
    fn test_bearer_success() {
        let check = authenticate(Some("Bearer secret"), Some(&bearer_rule()));
        assert!(check.ok);
        assert_eq!(check.auth_type, "bearer");
        assert_eq!(check.result, "success");
    }

    #[test]
    fn test_bearer_wrong_token() {
        let check = authenticate(Some("Bearer nope"), Some(&bearer_rule()));
        assert!(!check.ok);
        assert_eq!(check.result, "invalid-token");
    }

    #[test]
    fn test_bearer_wrong_scheme_prefix() {
        let check = authenticate(Some("Token secret"), Some(&bearer_rule()));
        assert_eq!(check.result, "invalid-bearer-format");
    }

    #[test]
    fn test_configured_type_is_case_insensitive() {
        let mut rule = bearer_rule();
        rule.kind = "Bearer".to_string();
        let check = authenticate(Some("Bearer secret"), Some(&rule));
        assert!(check.ok);
        assert_eq!(check.auth_type, "bearer");
    }

    #[test]
    fn test_missing_header_reports_configured_type_verbatim() {
        let mut rule = bearer_rule();
        rule.kind = "Bearer".to_string();
        let check = authenticate(None, Some(&rule));
        assert_eq!(check.auth_type, "Bearer");
        assert_eq!(check.result, "missing-auth");
    }

    #[test]
    fn test_unsupported_type_fails_closed() {
        let mut rule = basic_rule();
        rule.kind = "digest".to_string();

        let header = basic_header("testuser:testpass");
        let check = authenticate(Some(&header), Some(&rule));
        assert!(!check.ok);
        assert_eq!(check.auth_type, "digest");
        assert_eq!(check.result, "invalid-auth-type");
    }
}
