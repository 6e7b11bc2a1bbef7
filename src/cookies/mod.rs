//! Cookie jar helpers.
//!
//! This module provides a small cookie toolkit around a single jar string:
//!
//! - **Operations**: get, set, exists, update, delete and clear through
//!   [`CookieManager`](manager::CookieManager)
//! - **Jars**: the browser's `document.cookie` ([`DocumentJar`](document::DocumentJar),
//!   wasm32 only) or an in-memory jar ([`MemoryJar`](memory::MemoryJar))
//! - **Encoding**: percent-encoding helpers for values carrying `;`, `=` or spaces
//! - **Configuration**: SameSite, Secure, Domain and delete path defaults
//!
//! # Architecture
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`CookieJar`](jar::CookieJar) | Read the jar string, apply one assignment line |
//! | [`CookieManager`](manager::CookieManager) | The six cookie operations over any jar |
//! | [`MemoryJar`](memory::MemoryJar) | Jar with browser semantics, for tests and headless use |
//! | [`CanonicalCookie`](canonicalcookie::CanonicalCookie) | One cookie held by a [`MemoryJar`](memory::MemoryJar) |
//! | [`line`] | Jar string parsing and assignment formatting |
//!
//! # Example
//!
//! ```rust
//! use cookiekit::cookies::line::encode_value;
//! use cookiekit::cookies::manager::CookieManager;
//! use cookiekit::cookies::memory::MemoryJar;
//!
//! let cookies = CookieManager::new(MemoryJar::new());
//! cookies.set("greeting", &encode_value("hello world"), 3600, "/");
//!
//! assert!(cookies.exists("greeting"));
//! assert_eq!(cookies.get("greeting"), "hello world");
//!
//! cookies.clear_all();
//! assert!(!cookies.exists("greeting"));
//! ```
//!
//! # Notes
//!
//! - A cookie set to `""` and an absent cookie both read as `""` from
//!   [`get`](manager::CookieManager::get); [`get_opt`](manager::CookieManager::get_opt)
//!   returns `None` for the absent one.
//! - Expiry is the jar's business. The manager only writes expiration dates.

pub mod canonicalcookie;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod document;
pub mod jar;
pub mod line;
pub mod manager;
pub mod memory;
