//! Cookie reading and writing through the `document.cookie` attribute-string grammar.
//!
//! - **Codec**: the public operations ([`CookieCodec`](codec::CookieCodec))
//! - **Serialization**: attribute strings for a single assignment ([`serializer`])
//! - **Parsing**: lookups over a cookie-string snapshot ([`parser`])
//! - **Stores**: the host seam ([`CookieStore`](store::CookieStore)) and an
//!   in-memory browser double ([`DocumentCookieStore`](monster::DocumentCookieStore))
//!
//! # Architecture
//!
//! | Browser | cookiecodec (Rust) | Responsibility |
//! |---------|--------------------|----------------|
//! | `document.cookie` getter | [`CookieStore::get_all`](store::CookieStore::get_all) | Snapshot of visible cookies |
//! | `document.cookie` setter | [`CookieStore::append_one`](store::CookieStore::append_one) | Merge one assignment |
//! | `net::CookieMonster` | [`DocumentCookieStore`](monster::DocumentCookieStore) | Scoping, overwrite, expiry |
//! | `net::CanonicalCookie` | [`CanonicalCookie`](canonicalcookie::CanonicalCookie) | Single stored cookie |
//!
//! # Writing and reading
//!
//! ```rust
//! use cookiecodec::cookies::attributes::CookieAttributes;
//! use cookiecodec::cookies::codec::CookieCodec;
//! use cookiecodec::cookies::monster::DocumentCookieStore;
//! use url::Url;
//!
//! let cookies = CookieCodec::new(DocumentCookieStore::new(Url::parse("https://example.com/").unwrap()));
//! let attrs = CookieAttributes::default().with_secure(true).with_same_site("Lax");
//!
//! let written = cookies.set("session_id", "abc123", &attrs)?;
//! assert_eq!(written, "session_id=abc123;path=/;secure;samesite=lax");
//! assert_eq!(cookies.list().get("session_id").map(String::as_str), Some("abc123"));
//! # Ok::<(), cookiecodec::base::cookieerror::CookieError>(())
//! ```

pub mod attributes;
pub mod canonicalcookie;
pub mod codec;
pub mod monster;
pub mod name;
pub mod parser;
pub mod psl;
pub mod serializer;
pub mod store;
