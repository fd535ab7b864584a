//! Attribute-string serialization.
//!
//! Produces the string handed to the cookie store for a single assignment:
//!
//! ```text
//! name=value[;expires=<date>][;max-age=<int>][;domain=<domain>];path=<path>[;secure][;samesite=<lax|strict>]
//! ```
//!
//! Attribute order is fixed. Values are written verbatim; callers must
//! pre-encode anything unsafe for a cookie string (such as `;`).

use crate::base::cookieerror::{CookieError, CookieResult};
use crate::cookies::attributes::CookieAttributes;
use crate::cookies::name::validate_name;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

/// RFC 1123 HTTP-date, e.g. `Tue, 20 Oct 2026 08:00:00 GMT`.
const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Format a timestamp as an HTTP-date in GMT.
pub fn format_http_date(time: OffsetDateTime) -> CookieResult<String> {
    Ok(time.to_offset(UtcOffset::UTC).format(HTTP_DATE)?)
}

/// Absolute expiry `days` after `now`.
pub fn expiry_after_days(now: OffsetDateTime, days: i64) -> CookieResult<OffsetDateTime> {
    days.checked_mul(SECONDS_PER_DAY)
        .map(Duration::seconds)
        .and_then(|offset| now.checked_add(offset))
        .ok_or(CookieError::ExpiryOutOfRange { days })
}

/// Encode a cookie assignment using the current time for `expires`.
pub fn encode(name: &str, value: &str, attributes: &CookieAttributes) -> CookieResult<String> {
    encode_at(name, value, attributes, OffsetDateTime::now_utc())
}

/// Encode a cookie assignment with an explicit clock.
pub fn encode_at(
    name: &str,
    value: &str,
    attributes: &CookieAttributes,
    now: OffsetDateTime,
) -> CookieResult<String> {
    validate_name(name)?;

    let mut cookie = format!("{}={}", name, value);

    if attributes.expires_days != 0 {
        let expiry = expiry_after_days(now, attributes.expires_days)?;
        cookie.push_str(";expires=");
        cookie.push_str(&format_http_date(expiry)?);
    }

    if let Some(max_age) = attributes.max_age_seconds {
        cookie.push_str(&format!(";max-age={}", max_age));
    }

    if !attributes.domain.is_empty() {
        cookie.push_str(";domain=");
        cookie.push_str(&attributes.domain.to_lowercase());
    }

    cookie.push_str(";path=");
    cookie.push_str(&attributes.path);

    if attributes.secure {
        cookie.push_str(";secure");
    }

    match attributes.same_site() {
        Some(same_site) => {
            cookie.push_str(";samesite=");
            cookie.push_str(same_site.as_str());
        }
        None if !attributes.same_site.is_empty() => {
            tracing::debug!(
                name = %name,
                same_site = %attributes.same_site,
                "dropping unsupported samesite value"
            );
        }
        None => {}
    }

    Ok(cookie)
}
