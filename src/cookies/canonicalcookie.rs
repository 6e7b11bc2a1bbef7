use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A cookie as held by a jar.
/// Modeled after Chromium's `net::CanonicalCookie`, reduced to what a
/// `document.cookie` style jar tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: Option<String>,
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub same_site: SameSite,
    /// Position in creation order. Survives overwrites of the same name.
    pub creation_order: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameSite {
    Unspecified,
    #[serde(rename = "none")]
    NoRestriction,
    Lax,
    #[default]
    Strict,
}

impl SameSite {
    /// The attribute to emit, if any.
    pub fn to_attribute(self) -> Option<cookie::SameSite> {
        match self {
            SameSite::Unspecified => None,
            SameSite::NoRestriction => Some(cookie::SameSite::None),
            SameSite::Lax => Some(cookie::SameSite::Lax),
            SameSite::Strict => Some(cookie::SameSite::Strict),
        }
    }

    pub fn from_attribute(attribute: Option<cookie::SameSite>) -> Self {
        match attribute {
            Some(cookie::SameSite::Lax) => SameSite::Lax,
            Some(cookie::SameSite::Strict) => SameSite::Strict,
            Some(cookie::SameSite::None) => SameSite::NoRestriction,
            None => SameSite::Unspecified,
        }
    }
}

impl CanonicalCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            domain: None,
            expiration_time: None,
            secure: false,
            same_site: SameSite::Unspecified,
            creation_order: 0,
        }
    }

    /// Session cookies (no expiration) never expire on their own.
    /// An expiration equal to `current_time` counts as expired.
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.expiration_time
            .is_some_and(|expiry| expiry <= current_time)
    }

    /// The `name=value` pair as it appears when the jar is read.
    pub fn pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}
