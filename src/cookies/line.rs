//! Parsing and formatting of the jar string.
//!
//! Reads see the jar as `name1=value1; name2=value2`. Writes are one
//! assignment line per call, e.g.
//! `name=value; SameSite=Strict; Path=/; Expires=Wed, 21 Oct 2026 07:28:00 GMT`.
//! Attribute order does not matter to the jar.

use std::borrow::Cow;

use cookie::Cookie;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use time::{macros::datetime, Duration, OffsetDateTime};

use crate::cookies::canonicalcookie::SameSite;

/// Latest instant an HTTP-date can carry (four-digit year).
pub const MAX_EXPIRATION: OffsetDateTime = datetime!(9999-12-31 23:59:59 UTC);

/// https://www.rfc-editor.org/rfc/rfc6265#section-4.1.1 + ' ', '%', '(', ')', '='
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'(')
    .add(b')')
    .add(b',')
    .add(b';')
    .add(b'=')
    .add(b'\\');

/// Percent-encode a value so it can be embedded in a jar entry.
/// [`decode`] reverses it.
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, COOKIE_VALUE).to_string()
}

/// Percent-decode the whole jar string.
///
/// Malformed escapes are kept verbatim and invalid UTF-8 becomes U+FFFD,
/// so decoding never fails.
pub fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// Raw entries of the jar string, untrimmed.
pub fn split_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';')
}

/// Name part of a raw entry: everything before the first `=`, or the whole
/// entry when there is none. Leading whitespace is kept.
pub fn entry_name(entry: &str) -> &str {
    match entry.find('=') {
        Some(pos) => &entry[..pos],
        None => entry,
    }
}

/// Value of the first entry whose trimmed text starts with `name=`.
pub fn find_value<'a>(jar: &'a str, name: &str) -> Option<&'a str> {
    split_entries(jar).find_map(|entry| {
        entry
            .trim()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

/// True if any trimmed entry starts with `name=`.
pub fn contains(jar: &str, name: &str) -> bool {
    find_value(jar, name).is_some()
}

/// `now + ttl_secs`, saturating at [`MAX_EXPIRATION`].
pub fn expiration_after(now: OffsetDateTime, ttl_secs: u64) -> OffsetDateTime {
    let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
    now.checked_add(Duration::seconds(ttl))
        .map_or(MAX_EXPIRATION, |expiry| expiry.min(MAX_EXPIRATION))
}

/// One write to the jar.
#[derive(Debug, Clone)]
pub struct Assignment<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub path: &'a str,
    pub expires: OffsetDateTime,
    pub same_site: SameSite,
    pub secure: bool,
    pub domain: Option<&'a str>,
}

impl<'a> Assignment<'a> {
    /// An assignment that evicts `name` from the jar.
    pub fn expiry(name: &'a str, path: &'a str, domain: Option<&'a str>) -> Self {
        Self {
            name,
            value: "",
            path,
            expires: OffsetDateTime::UNIX_EPOCH,
            same_site: SameSite::Unspecified,
            secure: false,
            domain,
        }
    }

    /// Render the assignment line. The value is written as given.
    pub fn to_line(&self) -> String {
        let mut builder = Cookie::build((self.name, self.value))
            .path(self.path)
            .expires(self.expires);

        if let Some(same_site) = self.same_site.to_attribute() {
            builder = builder.same_site(same_site);
        }
        if self.secure {
            builder = builder.secure(true);
        }
        if let Some(domain) = self.domain {
            builder = builder.domain(domain);
        }

        builder.build().to_string()
    }
}
