//! Cookie parsing and the anti-forgery token.
//!
//! The backend expects every mutating request to echo the token it set in the
//! `csrftoken` cookie. Cookie headers are `;`-separated name=value pairs,
//! trimmed and percent-decoded.

use secrecy::{ExposeSecret, SecretString};

use crate::page::CookieSource;

/// An anti-forgery token read from a cookie.
///
/// Wrapped in [`SecretString`] so it never appears in `Debug` output; it is
/// only exposed when written into a form body.
#[derive(Clone)]
pub struct CsrfToken(SecretString);

impl Default for CsrfToken {
    /// An empty token; the backend rejects the request and the UI surfaces
    /// the rejection like any other.
    fn default() -> Self {
        Self(SecretString::from(""))
    }
}

impl CsrfToken {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Expose the raw token for writing into a request body.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CsrfToken").field(&"[REDACTED]").finish()
    }
}

/// Extract a cookie value from a raw cookie header string.
///
/// Pairs are separated by `;`, trimmed, and the value is percent-decoded.
/// Returns `None` when the cookie is absent or its value is not valid
/// percent-encoded UTF-8.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    for pair in header.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=')
            && key == name
        {
            return urlencoding::decode(value)
                .ok()
                .map(std::borrow::Cow::into_owned);
        }
    }
    None
}

/// Read the anti-forgery token from the page's cookies.
#[must_use]
pub fn csrf_token(cookies: &dyn CookieSource, cookie_name: &str) -> Option<CsrfToken> {
    cookie_value(&cookies.cookie_header(), cookie_name).map(CsrfToken::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_basic() {
        let header = "sessionid=abc123; csrftoken=tok-456";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("tok-456"));
        assert_eq!(cookie_value(header, "sessionid").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cookie_value_trims_whitespace() {
        let header = "  csrftoken=tok  ;other=x";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("tok  "));
    }

    #[test]
    fn test_cookie_value_percent_decodes() {
        let header = "csrftoken=a%2Fb%3Dc";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("a/b=c"));
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("a=1; b=2", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn test_cookie_value_does_not_match_prefix() {
        let header = "csrftoken2=wrong; csrftoken=right";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("right"));
    }

    #[test]
    fn test_csrf_token_debug_redacts() {
        let token = CsrfToken::new("super-secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
