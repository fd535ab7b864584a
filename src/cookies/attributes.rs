//! Attribute configuration for a single cookie assignment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `SameSite` values that survive encoding.
///
/// Anything else (including `None`) is dropped silently by the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SameSite {
    Lax,
    Strict,
}

impl SameSite {
    /// Normalize a raw `sameSite` option, case-insensitively.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "lax" => Some(Self::Lax),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lax => "lax",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options applied when encoding a cookie.
///
/// Keys missing from a deserialized document keep their defaults, so a JSON
/// options object like `{"expires": 7, "sameSite": "lax"}` is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CookieAttributes {
    /// Lifetime in days from now (default: 0, a session cookie)
    #[serde(rename = "expires", alias = "expiresDays")]
    pub expires_days: i64,
    /// `max-age` in seconds, written verbatim (default: omitted)
    #[serde(rename = "maxAge", alias = "maxAgeSeconds")]
    pub max_age_seconds: Option<i64>,
    /// Cookie path (default: "/")
    pub path: String,
    /// Cookie domain, lowercased on output (default: "", omitted)
    pub domain: String,
    /// Whether to add the `secure` flag (default: false)
    pub secure: bool,
    /// Raw `sameSite` option; only `lax` and `strict` are emitted (default: "")
    pub same_site: String,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            expires_days: 0,
            max_age_seconds: None,
            path: "/".to_string(),
            domain: String::new(),
            secure: false,
            same_site: String::new(),
        }
    }
}

impl CookieAttributes {
    /// Attributes for a session cookie on the root path.
    pub fn session() -> Self {
        Self::default()
    }

    /// Attributes that ask the store to evict a cookie on `path`.
    pub fn deletion(path: impl Into<String>) -> Self {
        Self {
            expires_days: -1,
            max_age_seconds: Some(0),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Load attributes from a JSON options object.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> crate::base::cookieerror::CookieResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_expires_days(mut self, days: i64) -> Self {
        self.expires_days = days;
        self
    }

    pub fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age_seconds = Some(seconds);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_same_site(mut self, same_site: impl Into<String>) -> Self {
        self.same_site = same_site.into();
        self
    }

    /// The `SameSite` value that will be emitted, if any.
    pub fn same_site(&self) -> Option<SameSite> {
        SameSite::from_attr(&self.same_site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = CookieAttributes::default();
        assert_eq!(attrs.expires_days, 0);
        assert_eq!(attrs.max_age_seconds, None);
        assert_eq!(attrs.path, "/");
        assert!(attrs.domain.is_empty());
        assert!(!attrs.secure);
        assert_eq!(attrs.same_site(), None);
    }

    #[test]
    fn test_same_site_normalization() {
        assert_eq!(SameSite::from_attr("Strict"), Some(SameSite::Strict));
        assert_eq!(SameSite::from_attr("LAX"), Some(SameSite::Lax));
        assert_eq!(SameSite::from_attr("none"), None);
        assert_eq!(SameSite::from_attr(" lax"), None);
        assert_eq!(SameSite::from_attr(""), None);
    }

    #[test]
    fn test_deletion_preset() {
        let attrs = CookieAttributes::deletion("/account");
        assert_eq!(attrs.expires_days, -1);
        assert_eq!(attrs.max_age_seconds, Some(0));
        assert_eq!(attrs.path, "/account");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_keeps_defaults() {
        let attrs = CookieAttributes::from_json(r#"{"expires": 7, "sameSite": "Lax"}"#).unwrap();
        assert_eq!(attrs.expires_days, 7);
        assert_eq!(attrs.path, "/");
        assert_eq!(attrs.same_site(), Some(SameSite::Lax));

        let attrs = CookieAttributes::from_json(r#"{"maxAge": null, "domain": "a.com"}"#).unwrap();
        assert_eq!(attrs.max_age_seconds, None);
        assert_eq!(attrs.domain, "a.com");

        let attrs = CookieAttributes::from_json(r#"{"maxAgeSeconds": -5}"#).unwrap();
        assert_eq!(attrs.max_age_seconds, Some(-5));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_rejects_bad_types() {
        assert!(CookieAttributes::from_json(r#"{"secure": "yes"}"#).is_err());
    }
}
