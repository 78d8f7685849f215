//! Authentication header building for API requests.

use super::credentials::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization` header for a session token.
///
/// Returns `None` when there is no token or it is empty, in which case the
/// request goes out anonymously.
pub fn build_auth_header(token: Option<&SecureString>) -> Option<AuthHeader> {
    match token {
        Some(token) if !token.is_empty() => Some((
            "Authorization".to_string(),
            format!("Bearer {}", token.expose()),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let token = SecureString::new("fake-jwt-token".to_string());
        let (name, value) = build_auth_header(Some(&token)).unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer fake-jwt-token");
    }

    #[test]
    fn test_no_token() {
        assert!(build_auth_header(None).is_none());
    }

    #[test]
    fn test_empty_token() {
        let token = SecureString::new(String::new());
        assert!(build_auth_header(Some(&token)).is_none());
    }
}
