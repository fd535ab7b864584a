//! The public cookie operations.
//!
//! [`CookieCodec`] wraps a [`CookieStore`] and exposes the familiar script
//! API: `set`, `list`, `read`, `check`, `write` and `delete`. Writes are
//! validated and encoded before they reach the store; reads parse a fresh
//! snapshot on every call.

use crate::base::cookieerror::CookieResult;
use crate::cookies::attributes::CookieAttributes;
use crate::cookies::parser;
use crate::cookies::serializer;
use crate::cookies::store::CookieStore;
use std::collections::HashMap;

/// Reads and writes cookies through a host cookie store.
///
/// # Example
/// ```rust
/// use cookiecodec::cookies::codec::CookieCodec;
/// use cookiecodec::cookies::attributes::CookieAttributes;
/// use cookiecodec::cookies::monster::DocumentCookieStore;
/// use url::Url;
///
/// let store = DocumentCookieStore::new(Url::parse("https://example.com/").unwrap());
/// let cookies = CookieCodec::new(store);
///
/// cookies.set("theme", "dark", &CookieAttributes::default().with_expires_days(30))?;
/// assert_eq!(cookies.read("theme").as_deref(), Some("dark"));
///
/// cookies.delete("theme", "/")?;
/// assert!(!cookies.check("theme"));
/// # Ok::<(), cookiecodec::base::cookieerror::CookieError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CookieCodec<S> {
    store: S,
}

impl<S: CookieStore> CookieCodec<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write a cookie with the given attributes.
    ///
    /// Returns the attribute string handed to the store. The store may still
    /// ignore it; nothing here observes whether the write took effect.
    pub fn set(&self, name: &str, value: &str, attributes: &CookieAttributes) -> CookieResult<String> {
        let cookie = serializer::encode(name, value, attributes)?;
        tracing::debug!(name = %name, cookie = %cookie, "writing cookie");
        self.store.append_one(&cookie);
        Ok(cookie)
    }

    /// All visible cookies, keyed by name. Values are returned as stored.
    pub fn list(&self) -> HashMap<String, String> {
        let cookies = parser::decode_all(&self.store.get_all());
        tracing::trace!(count = cookies.len(), "listed cookies");
        cookies
    }

    /// Value of the cookie called `name`, if present.
    pub fn read(&self, name: &str) -> Option<String> {
        let value = parser::decode_one(&self.store.get_all(), name);
        tracing::trace!(name = %name, found = value.is_some(), "read cookie");
        value
    }

    /// Whether a cookie called `name` is present.
    pub fn check(&self, name: &str) -> bool {
        parser::exists(&self.store.get_all(), name)
    }

    /// Positional form of [`set`](Self::set); `max-age` is never written.
    #[allow(clippy::too_many_arguments)]
    pub fn write(
        &self,
        name: &str,
        value: &str,
        expires_days: i64,
        path: &str,
        domain: &str,
        secure: bool,
        same_site: &str,
    ) -> CookieResult<String> {
        let attributes = CookieAttributes {
            expires_days,
            max_age_seconds: None,
            path: path.to_string(),
            domain: domain.to_string(),
            secure,
            same_site: same_site.to_string(),
        };
        self.set(name, value, &attributes)
    }

    /// Ask the store to drop the cookie called `name` on `path`.
    ///
    /// Writes the value `deleted` with an expiry in the past and `max-age=0`.
    pub fn delete(&self, name: &str, path: &str) -> CookieResult<String> {
        let cookie = serializer::encode(name, "deleted", &CookieAttributes::deletion(path))?;
        tracing::debug!(name = %name, path = %path, "deleting cookie");
        self.store.append_one(&cookie);
        Ok(cookie)
    }
}
