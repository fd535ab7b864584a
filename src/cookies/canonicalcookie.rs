use crate::cookies::attributes::SameSite;
use time::OffsetDateTime;

/// A cookie held by [`DocumentCookieStore`](crate::cookies::monster::DocumentCookieStore).
/// Modeled after Chromium's `net::CanonicalCookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub host_only: bool,
    pub same_site: Option<SameSite>,
    /// Insertion sequence; breaks creation-time ties when ordering output.
    pub sequence: u64,
}

impl CanonicalCookie {
    pub fn new(
        name: String,
        value: String,
        domain: String,
        path: String,
        creation_time: OffsetDateTime,
        expiration_time: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            name,
            value,
            domain,
            path,
            creation_time,
            expiration_time,
            secure: false,
            host_only: true,
            same_site: None,
            sequence: 0,
        }
    }

    /// Session cookies never expire on their own.
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.expiration_time
            .is_some_and(|expiry| expiry <= current_time)
    }

    /// Whether `other` would replace this cookie in the store.
    pub fn is_equivalent(&self, other: &CanonicalCookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }

    /// The `name=value` form returned by `document.cookie`.
    pub fn pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}
