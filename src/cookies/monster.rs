use crate::cookies::attributes::SameSite;
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::psl;
use crate::cookies::store::CookieStore;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use url::Url;

/// Source of the current time for expiry decisions.
pub type Clock = Arc<dyn Fn() -> OffsetDateTime + Send + Sync>;

/// In-memory cookie store that behaves like `document.cookie` for one page.
/// Modeled after Chromium's `net::CookieMonster`, seen through the script API.
///
/// Assignments are accepted or silently ignored the way a browser would:
/// - `HttpOnly` assignments are ignored (script cannot set them)
/// - `Secure` assignments need an https document
/// - a `Domain` must cover the document host and must not be a public suffix
/// - a `Max-Age <= 0` or past `Expires` evicts the matching cookie
pub struct DocumentCookieStore {
    // Store: Map<Domain, List<Cookie>>
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
    url: Url,
    clock: Clock,
    sequence: AtomicU64,
}

impl DocumentCookieStore {
    pub fn new(url: Url) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            url,
            clock: Arc::new(OffsetDateTime::now_utc),
            sequence: AtomicU64::new(0),
        }
    }

    /// Use `clock` instead of the system time.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> OffsetDateTime + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// The document URL cookies are read and written for.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Navigate to another document; stored cookies are kept.
    pub fn set_url(&mut self, url: Url) {
        self.url = url;
    }

    fn host(&self) -> String {
        self.url.host_str().unwrap_or("").to_lowercase()
    }

    fn is_secure_document(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// Apply one attribute string, as an assignment to `document.cookie` does.
    pub fn set_cookie_line(&self, cookie_line: &str) {
        let parsed = match cookie::Cookie::parse(cookie_line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unparseable cookie assignment");
                return;
            }
        };

        if parsed.http_only().unwrap_or(false) {
            tracing::debug!(name = %parsed.name(), "ignoring HttpOnly cookie set from script");
            return;
        }

        let secure = parsed.secure().unwrap_or(false);
        if secure && !self.is_secure_document() {
            tracing::debug!(name = %parsed.name(), url = %self.url, "ignoring Secure cookie from insecure document");
            return;
        }

        let host = self.host();
        let (domain, host_only) = match parsed.domain() {
            Some(attr) => match psl::cookie_domain_for(attr, &host) {
                Some(domain) => (domain, false),
                None => {
                    tracing::debug!(name = %parsed.name(), domain = %attr, host = %host, "ignoring cookie for foreign domain");
                    return;
                }
            },
            None => (host, true),
        };

        let path = match parsed.path() {
            Some(path) if path.starts_with('/') => path.to_string(),
            _ => default_path(self.url.path()),
        };

        let now = (self.clock)();
        let expiration_time = match parsed.max_age() {
            Some(max_age) if max_age <= Duration::ZERO => Some(now),
            Some(max_age) => now.checked_add(max_age),
            None => parsed.expires_datetime(),
        };

        let same_site = match parsed.same_site() {
            Some(cookie::SameSite::Lax) => Some(SameSite::Lax),
            Some(cookie::SameSite::Strict) => Some(SameSite::Strict),
            _ => None,
        };

        let cookie = CanonicalCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path,
            creation_time: now,
            expiration_time,
            secure,
            host_only,
            same_site,
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
        };

        if cookie.is_expired(now) {
            self.evict(&cookie);
        } else {
            self.set_canonical_cookie(cookie);
        }
    }

    /// Insert `cookie`, replacing any cookie with the same name, domain and path.
    pub fn set_canonical_cookie(&self, mut cookie: CanonicalCookie) {
        tracing::trace!(name = %cookie.name, domain = %cookie.domain, path = %cookie.path, "storing cookie");

        let mut entry = self.store.entry(cookie.domain.clone()).or_default();

        // An overwrite keeps the original creation time (RFC 6265 5.3 step 11.3)
        if let Some(existing) = entry.iter().find(|c| c.is_equivalent(&cookie)) {
            cookie.creation_time = existing.creation_time;
            cookie.sequence = existing.sequence;
        }

        entry.retain(|c| !c.is_equivalent(&cookie));
        entry.push(cookie);
    }

    fn evict(&self, cookie: &CanonicalCookie) {
        if let Some(mut entry) = self.store.get_mut(&cookie.domain) {
            let before = entry.len();
            entry.retain(|c| !c.is_equivalent(cookie));
            if entry.len() < before {
                tracing::debug!(name = %cookie.name, domain = %cookie.domain, path = %cookie.path, "evicted cookie");
            }
        }
    }

    /// Cookies visible to the current document, in `document.cookie` order.
    pub fn visible_cookies(&self) -> Vec<CanonicalCookie> {
        let host = self.host();
        let request_path = self.url.path();
        let secure_document = self.is_secure_document();
        let now = (self.clock)();

        let mut result: Vec<CanonicalCookie> = self
            .store
            .iter()
            .flat_map(|entry| entry.value().clone())
            .filter(|cookie| {
                let domain_ok = if cookie.host_only {
                    cookie.domain.eq_ignore_ascii_case(&host)
                } else {
                    psl::domain_matches(&cookie.domain, &host)
                };

                domain_ok
                    && path_matches(&cookie.path, request_path)
                    && (!cookie.secure || secure_document)
                    && !cookie.is_expired(now)
            })
            .collect();

        // Longest path first, then oldest first
        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
                .then_with(|| a.sequence.cmp(&b.sequence))
        });

        result
    }

    /// Get total cookie count, including cookies not visible to the document.
    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    /// Clear all cookies.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Iterate over all stored cookies.
    pub fn iter_all_cookies(&self) -> impl Iterator<Item = CanonicalCookie> + '_ {
        self.store.iter().flat_map(|entry| entry.value().clone())
    }
}

impl CookieStore for DocumentCookieStore {
    fn get_all(&self) -> String {
        self.visible_cookies()
            .iter()
            .map(CanonicalCookie::pair)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn append_one(&self, cookie: &str) {
        self.set_cookie_line(cookie);
    }
}

impl std::fmt::Debug for DocumentCookieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCookieStore")
            .field("url", &self.url.as_str())
            .field("cookie_count", &self.total_cookie_count())
            .finish()
    }
}

/// RFC 6265 default-path of a request path.
fn default_path(request_path: &str) -> String {
    if !request_path.starts_with('/') {
        return "/".to_string();
    }

    match request_path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => request_path[..idx].to_string(),
    }
}

/// Check if request path matches cookie path.
/// Implements RFC 6265 path matching.
fn path_matches(cookie_path: &str, request_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }

    if request_path.starts_with(cookie_path) {
        if cookie_path.ends_with('/') {
            return true;
        }
        return request_path.as_bytes().get(cookie_path.len()) == Some(&b'/');
    }

    false
}
