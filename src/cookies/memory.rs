use crate::base::clock::{system_clock, Clock};
use crate::base::cookieerror::CookieError;
use crate::cookies::canonicalcookie::{CanonicalCookie, SameSite};
use crate::cookies::jar::CookieJar;
use crate::cookies::line::MAX_EXPIRATION;
use cookie::Cookie;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory jar with `document.cookie` semantics.
///
/// Used as the backend outside the browser and as the fake jar in tests.
/// Cookies are keyed by name alone, so a later write to the same name
/// replaces the earlier one whatever its path.
pub struct MemoryJar {
    store: DashMap<String, CanonicalCookie>,
    next_order: AtomicU64,
    clock: Clock,
}

impl Default for MemoryJar {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::with_clock(system_clock)
    }

    /// A jar that judges expiry against `clock` instead of the wall clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            store: DashMap::new(),
            next_order: AtomicU64::new(0),
            clock,
        }
    }

    /// The live cookie named `name`, with all its attributes.
    pub fn cookie(&self, name: &str) -> Option<CanonicalCookie> {
        let now = (self.clock)();
        self.store
            .get(name)
            .map(|entry| entry.value().clone())
            .filter(|cookie| !cookie.is_expired(now))
    }

    /// Number of live cookies.
    pub fn len(&self) -> usize {
        self.live_cookies().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop expired cookies and return the rest in read order:
    /// longer paths first, then creation order (RFC 6265 section 5.4).
    fn live_cookies(&self) -> Vec<CanonicalCookie> {
        let now = (self.clock)();
        self.store.retain(|_, cookie| !cookie.is_expired(now));

        let mut cookies: Vec<CanonicalCookie> =
            self.store.iter().map(|entry| entry.value().clone()).collect();
        cookies.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_order.cmp(&b.creation_order))
        });
        cookies
    }
}

impl CookieJar for MemoryJar {
    fn read(&self) -> String {
        self.live_cookies()
            .iter()
            .map(CanonicalCookie::pair)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        let parsed =
            Cookie::parse(line).map_err(|e| CookieError::invalid_line(line, e.to_string()))?;
        let now = (self.clock)();

        // Max-Age wins over Expires.
        let expiration_time = match parsed.max_age() {
            Some(max_age) => Some(
                now.checked_add(max_age)
                    .map_or(MAX_EXPIRATION, |t| t.min(MAX_EXPIRATION)),
            ),
            None => parsed.expires_datetime(),
        };

        let name = parsed.name().to_string();
        if expiration_time.is_some_and(|expiry| expiry <= now) {
            if self.store.remove(&name).is_some() {
                tracing::trace!(cookie = %name, "evicted expired cookie");
            }
            return Ok(());
        }

        // Overwrites keep their original position.
        let creation_order = self
            .store
            .get(&name)
            .map(|existing| existing.creation_order)
            .unwrap_or_else(|| self.next_order.fetch_add(1, Ordering::Relaxed));

        let cookie = CanonicalCookie {
            name: name.clone(),
            value: parsed.value().to_string(),
            path: parsed.path().unwrap_or("/").to_string(),
            domain: parsed
                .domain()
                .map(|d| d.trim_start_matches('.').to_lowercase()),
            expiration_time,
            secure: parsed.secure().unwrap_or(false),
            same_site: SameSite::from_attribute(parsed.same_site()),
            creation_order,
        };

        self.store.insert(name, cookie);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::OffsetDateTime;

    fn fixed_now() -> OffsetDateTime {
        datetime!(2026-10-17 12:00:00 UTC)
    }

    #[test]
    fn test_read_empty() {
        let jar = MemoryJar::new();
        assert_eq!(jar.read(), "");
        assert!(jar.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("a=1; Path=/; Expires=Sat, 17 Oct 2026 13:00:00 GMT")
            .unwrap();
        jar.write("b=2").unwrap();

        assert_eq!(jar.read(), "a=1; b=2");
        assert_eq!(jar.len(), 2);
    }

    #[test]
    fn test_longer_path_first() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("root=1; Path=/").unwrap();
        jar.write("app=2; Path=/app").unwrap();

        assert_eq!(jar.read(), "app=2; root=1");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("a=1").unwrap();
        jar.write("b=2").unwrap();
        jar.write("a=3").unwrap();

        assert_eq!(jar.read(), "a=3; b=2");
    }

    #[test]
    fn test_past_expiry_evicts() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("a=1").unwrap();
        jar.write("a=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
            .unwrap();

        assert_eq!(jar.read(), "");
        assert!(jar.cookie("a").is_none());
    }

    #[test]
    fn test_expiry_equal_to_now_evicts() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("a=1; Expires=Sat, 17 Oct 2026 12:00:00 GMT").unwrap();

        assert!(jar.is_empty());
    }

    #[test]
    fn test_max_age_wins_over_expires() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("a=1; Max-Age=0; Expires=Sat, 17 Oct 2026 13:00:00 GMT")
            .unwrap();
        assert!(jar.is_empty());

        jar.write("b=2; Max-Age=60; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
            .unwrap();
        let cookie = jar.cookie("b").unwrap();
        assert_eq!(
            cookie.expiration_time,
            Some(datetime!(2026-10-17 12:01:00 UTC))
        );
    }

    #[test]
    fn test_attributes_recorded() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("sid=abc; SameSite=Strict; Secure; Path=/app; Domain=.Example.com")
            .unwrap();

        let cookie = jar.cookie("sid").unwrap();
        assert_eq!(cookie.path, "/app");
        assert_eq!(cookie.domain.as_deref(), Some("example.com"));
        assert!(cookie.secure);
        assert_eq!(cookie.same_site, SameSite::Strict);
    }

    #[test]
    fn test_name_is_trimmed() {
        let jar = MemoryJar::with_clock(fixed_now);
        jar.write("a=1").unwrap();
        jar.write(" a=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
            .unwrap();

        assert!(jar.is_empty());
    }

    #[test]
    fn test_invalid_line_rejected() {
        let jar = MemoryJar::new();

        let err = jar.write("=orphan").unwrap_err();
        assert!(matches!(err, CookieError::InvalidLine { .. }));

        let err = jar.write("no-pair").unwrap_err();
        assert!(err.is_permanent());
        assert!(jar.is_empty());
    }
}
