//! Public Suffix List (PSL) checks for `domain=` attributes.
//!
//! Stops a document from scoping a cookie to a public suffix like `.com`
//! or `.co.uk`. Uses Mozilla's list via the `psl` crate.

use psl::{List, Psl};

/// Check if a domain is a public suffix (e.g., "com", "co.uk").
pub fn is_public_suffix(domain: &str) -> bool {
    let domain_lower = domain.to_lowercase();
    let domain_bytes = domain_lower.as_bytes();

    List.suffix(domain_bytes)
        .is_some_and(|suffix| suffix.as_bytes() == domain_bytes)
}

/// Whether `host` equals `domain` or is a subdomain of it.
pub fn domain_matches(domain: &str, host: &str) -> bool {
    if host.eq_ignore_ascii_case(domain) {
        return true;
    }

    host.len() > domain.len()
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
        && host[host.len() - domain.len()..].eq_ignore_ascii_case(domain)
}

/// Resolve the `domain=` attribute of an assignment made from `host`.
///
/// Returns the canonical (lowercase, dot-less) domain, or `None` when the
/// browser would reject the assignment: the domain does not cover `host`, or
/// it is a public suffix other than `host` itself.
pub fn cookie_domain_for(domain_attr: &str, host: &str) -> Option<String> {
    let domain = domain_attr.trim_start_matches('.').to_lowercase();
    if domain.is_empty() || !domain_matches(&domain, host) {
        return None;
    }

    if is_public_suffix(&domain) && !domain.eq_ignore_ascii_case(host) {
        return None;
    }

    Some(domain)
}
