//! Cookie name validation.
//!
//! Names follow the token rules of RFC 2616 section 2.2 as far as
//! `document.cookie` cares: they must be non-empty and must not contain
//! `=`, `,`, `;` or whitespace (space, tab, CR, LF, vertical tab, form feed).

use crate::base::cookieerror::{CookieError, CookieResult};
use std::fmt;
use std::str::FromStr;

/// Characters that may never appear in a cookie name.
const FORBIDDEN_NAME_CHARS: [char; 9] = ['=', ',', ';', ' ', '\t', '\r', '\n', '\x0B', '\x0C'];

/// Validate a cookie name before it is written.
pub fn validate_name(name: &str) -> CookieResult<()> {
    if name.is_empty() {
        return Err(CookieError::EmptyName);
    }

    if name.contains(&FORBIDDEN_NAME_CHARS[..]) {
        return Err(CookieError::invalid_name(name));
    }

    Ok(())
}

/// Validate a name that may be missing altogether.
pub fn validate_name_opt(name: Option<&str>) -> CookieResult<()> {
    match name {
        Some(name) => validate_name(name),
        None => Err(CookieError::EmptyName),
    }
}

/// A cookie name that has passed [`validate_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CookieName(String);

impl CookieName {
    pub fn new(name: impl Into<String>) -> CookieResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for CookieName {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CookieName {
    type Error = CookieError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CookieName {
    type Error = CookieError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for CookieName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CookieName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
