//! # cookiecodec
//!
//! Read, write, list and delete cookies through the `Set-Cookie`-style
//! attribute-string grammar used by `document.cookie`.
//!
//! The cookie store itself is injected through the
//! [`CookieStore`](cookies::store::CookieStore) trait (`get_all` /
//! `append_one`), so the same code runs against a host binding or the
//! in-memory [`DocumentCookieStore`](cookies::monster::DocumentCookieStore).
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiecodec::cookies::codec::CookieCodec;
//! use cookiecodec::cookies::attributes::CookieAttributes;
//! use cookiecodec::cookies::monster::DocumentCookieStore;
//! use url::Url;
//!
//! let store = DocumentCookieStore::new(Url::parse("https://example.com/").unwrap());
//! let cookies = CookieCodec::new(store);
//!
//! cookies.write("lang", "en", 7, "/", "", false, "")?;
//! assert!(cookies.check("lang"));
//! # Ok::<(), cookiecodec::base::cookieerror::CookieError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - Codec, serializer, parser and cookie stores

pub mod base;
pub mod cookies;

pub use base::cookieerror::{CookieError, CookieResult};
pub use cookies::attributes::{CookieAttributes, SameSite};
pub use cookies::codec::CookieCodec;
pub use cookies::store::CookieStore;
