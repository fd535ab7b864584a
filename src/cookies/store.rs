//! The cookie store seam.
//!
//! A browser exposes its cookie store as the single string property
//! `document.cookie`: reading returns every visible `name=value` pair joined by
//! `; `, writing merges one attribute string into the store. [`CookieStore`]
//! captures exactly those two operations so the codec can run against a real
//! host binding or an in-memory double like
//! [`DocumentCookieStore`](crate::cookies::monster::DocumentCookieStore).

use std::sync::Arc;

/// A host cookie store with `document.cookie` semantics.
///
/// Implementations resolve overwrite-by-name, scoping and expiry themselves.
/// `append_one` reports nothing back: a host is free to ignore or truncate
/// an assignment.
pub trait CookieStore: Send + Sync {
    /// Snapshot of all visible cookies as `name=value` pairs joined by `; `.
    fn get_all(&self) -> String;

    /// Merge a single attribute string into the store.
    fn append_one(&self, cookie: &str);
}

impl<T: CookieStore + ?Sized> CookieStore for &T {
    fn get_all(&self) -> String {
        (**self).get_all()
    }

    fn append_one(&self, cookie: &str) {
        (**self).append_one(cookie)
    }
}

impl<T: CookieStore + ?Sized> CookieStore for Arc<T> {
    fn get_all(&self) -> String {
        (**self).get_all()
    }

    fn append_one(&self, cookie: &str) {
        (**self).append_one(cookie)
    }
}

impl<T: CookieStore + ?Sized> CookieStore for Box<T> {
    fn get_all(&self) -> String {
        (**self).get_all()
    }

    fn append_one(&self, cookie: &str) {
        (**self).append_one(cookie)
    }
}
