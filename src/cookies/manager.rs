//! Get, set, check, update, delete and clear cookies through a [`CookieJar`].
//!
//! Every call reads or writes the jar as it is at that moment; nothing is
//! cached between calls. The plain operations never fail: a missing cookie
//! reads as `""`/`false`, and a write the jar rejects is logged and dropped.
//! Use the `try_*` variants to observe rejected writes.

use time::OffsetDateTime;

use crate::base::clock::{system_clock, Clock};
use crate::base::cookieerror::CookieError;
use crate::cookies::config::{CookieConfig, CookieOptions};
use crate::cookies::jar::CookieJar;
use crate::cookies::line::{self, Assignment};

pub struct CookieManager<J> {
    jar: J,
    config: CookieConfig,
    clock: Clock,
}

impl<J: CookieJar> CookieManager<J> {
    pub fn new(jar: J) -> Self {
        Self::with_config(jar, CookieConfig::default())
    }

    pub fn with_config(jar: J, config: CookieConfig) -> Self {
        Self {
            jar,
            config,
            clock: system_clock,
        }
    }

    /// Compute expirations against `clock` instead of the wall clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    pub fn config(&self) -> &CookieConfig {
        &self.config
    }

    /// Value of cookie `name`, or `""` when it is absent.
    ///
    /// The whole jar is percent-decoded before it is searched. An absent
    /// cookie and a cookie set to `""` look the same here; use
    /// [`get_opt`](Self::get_opt) to tell them apart.
    pub fn get(&self, name: &str) -> String {
        self.get_opt(name).unwrap_or_default()
    }

    /// Value of cookie `name`, or `None` when it is absent.
    pub fn get_opt(&self, name: &str) -> Option<String> {
        let raw = self.jar.read();
        let decoded = line::decode(&raw);
        line::find_value(&decoded, name).map(str::to_owned)
    }

    /// True if the raw (undecoded) jar holds an entry named `name`.
    pub fn exists(&self, name: &str) -> bool {
        line::contains(&self.jar.read(), name)
    }

    /// Write `name=value` expiring `ttl_secs` from now, scoped to `path`
    /// and restricted to same-site requests.
    ///
    /// `value` is written as given; pre-encode it with
    /// [`encode_value`](crate::cookies::line::encode_value) if it may
    /// contain `;`, `=`, whitespace or `%`.
    pub fn set(&self, name: &str, value: &str, ttl_secs: u64, path: &str) {
        log_rejected("set", name, self.try_set(name, value, ttl_secs, path));
    }

    pub fn try_set(
        &self,
        name: &str,
        value: &str,
        ttl_secs: u64,
        path: &str,
    ) -> Result<(), CookieError> {
        self.try_set_with(name, value, &CookieOptions::new(ttl_secs, path))
    }

    /// [`set`](Self::set) with per-call attribute overrides.
    pub fn set_with(&self, name: &str, value: &str, options: &CookieOptions) {
        log_rejected("set", name, self.try_set_with(name, value, options));
    }

    pub fn try_set_with(
        &self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), CookieError> {
        let assignment = Assignment {
            name,
            value,
            path: &options.path,
            expires: line::expiration_after(self.now(), options.ttl_secs),
            same_site: options.same_site.unwrap_or(self.config.same_site),
            secure: options.secure.unwrap_or(self.config.secure),
            domain: options.domain.as_deref().or(self.config.domain.as_deref()),
        };
        self.write(&assignment.to_line())
    }

    /// Same effect as [`set`](Self::set).
    ///
    /// A write to an existing name already replaces it, so no delete is
    /// issued first.
    pub fn update(&self, name: &str, value: &str, ttl_secs: u64, path: &str) {
        self.set(name, value, ttl_secs, path);
    }

    /// Expire cookie `name`. Deleting an absent cookie is a no-op.
    pub fn delete(&self, name: &str) {
        log_rejected("delete", name, self.try_delete(name));
    }

    pub fn try_delete(&self, name: &str) -> Result<(), CookieError> {
        let assignment = Assignment::expiry(
            name,
            &self.config.delete_path,
            self.config.domain.as_deref(),
        );
        self.write(&assignment.to_line())
    }

    /// Names of every entry in the jar, in jar order.
    ///
    /// Each name is the text before the entry's first `=` (or the whole
    /// entry when there is none), with surrounding whitespace removed.
    pub fn names(&self) -> Vec<String> {
        let raw = self.jar.read();
        line::split_entries(&raw)
            .map(|entry| line::entry_name(entry).trim())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Expire every cookie currently in the jar.
    pub fn clear_all(&self) {
        for name in self.names() {
            self.delete(&name);
        }
    }

    /// Like [`clear_all`](Self::clear_all) but stops at the first rejected
    /// write. Returns how many cookies were expired.
    pub fn try_clear_all(&self) -> Result<usize, CookieError> {
        let names = self.names();
        for name in &names {
            self.try_delete(name)?;
        }
        Ok(names.len())
    }

    fn now(&self) -> OffsetDateTime {
        (self.clock)()
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        tracing::trace!(line = %line, "writing cookie");
        self.jar.write(line)
    }
}

fn log_rejected(op: &'static str, name: &str, result: Result<(), CookieError>) {
    if let Err(e) = result {
        tracing::debug!(op, cookie = %name, error = %e, "cookie jar rejected write");
    }
}
