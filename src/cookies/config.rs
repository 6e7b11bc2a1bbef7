//! Cookie write configuration.

use serde::{Deserialize, Serialize};

use crate::cookies::canonicalcookie::SameSite;

/// Attributes applied to every write a [`CookieManager`](crate::cookies::manager::CookieManager) makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// SameSite attribute for `set`.
    pub same_site: SameSite,
    /// Add the `Secure` attribute to `set`.
    pub secure: bool,
    /// Domain attribute for every write, including deletes.
    pub domain: Option<String>,
    /// Path used when deleting cookies.
    pub delete_path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            same_site: SameSite::Strict,
            secure: false,
            domain: None,
            delete_path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SameSite attribute.
    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Enable or disable the Secure attribute.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Scope writes to a domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the path used for deletes.
    pub fn delete_path(mut self, path: impl Into<String>) -> Self {
        self.delete_path = path.into();
        self
    }

    /// Parse a JSON config. Missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, crate::base::cookieerror::CookieError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config from disk.
    #[cfg(feature = "json")]
    pub fn from_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, crate::base::cookieerror::CookieError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Per-call overrides for [`CookieManager::set_with`](crate::cookies::manager::CookieManager::set_with).
/// Unset attributes fall back to the manager's [`CookieConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub ttl_secs: u64,
    pub path: String,
    pub same_site: Option<SameSite>,
    pub secure: Option<bool>,
    pub domain: Option<String>,
}

impl CookieOptions {
    pub fn new(ttl_secs: u64, path: impl Into<String>) -> Self {
        Self {
            ttl_secs,
            path: path.into(),
            same_site: None,
            secure: None,
            domain: None,
        }
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}
