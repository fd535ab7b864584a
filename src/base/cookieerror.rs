use thiserror::Error;

/// Errors raised by cookie operations.
///
/// Every variant is raised before the cookie store is touched; a write that
/// fails here never reaches [`CookieStore::append_one`](crate::cookies::store::CookieStore::append_one).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    // Name Errors
    #[error("The cookie name cannot be empty.")]
    EmptyName,
    #[error("The cookie name `{name}` contains invalid characters.")]
    InvalidName { name: String },

    // Attribute Errors
    #[error("Cookie expiry of {days} days is out of range")]
    ExpiryOutOfRange { days: i64 },
    #[error("Failed to format cookie expiry: {message}")]
    DateFormat { message: String },

    // Configuration Errors
    #[error("Invalid cookie attributes: {message}")]
    InvalidAttributes { message: String },
}

impl CookieError {
    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Whether the error was caused by the cookie name rather than its attributes.
    pub fn is_name_error(&self) -> bool {
        matches!(self, Self::EmptyName | Self::InvalidName { .. })
    }
}

impl From<time::error::Format> for CookieError {
    fn from(err: time::error::Format) -> Self {
        Self::DateFormat {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for CookieError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidAttributes {
            message: err.to_string(),
        }
    }
}

/// Result type alias for cookie operations.
pub type CookieResult<T> = Result<T, CookieError>;
