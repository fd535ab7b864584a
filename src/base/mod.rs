//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): errors raised before a cookie write
//! - [`CookieResult`](cookieerror::CookieResult): result alias used across the crate

pub mod cookieerror;
