//! # cookiekit
//!
//! Read, write, check, update and clear cookies through a cookie jar string.
//!
//! In the browser the jar is `document.cookie`; elsewhere it is an in-memory
//! jar with the same semantics. Either way the operations only parse and
//! format strings: expiry, path scoping and SameSite enforcement belong to
//! the jar.
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiekit::{CookieManager, MemoryJar};
//!
//! let cookies = CookieManager::new(MemoryJar::new());
//! cookies.set("theme", "dark", 60 * 60 * 24, "/");
//! assert_eq!(cookies.get("theme"), "dark");
//!
//! cookies.update("theme", "light", 60, "/");
//! assert_eq!(cookies.get("theme"), "light");
//!
//! cookies.delete("theme");
//! assert!(!cookies.exists("theme"));
//! ```
//!
//! In a wasm32 build, bind to the page instead:
//!
//! ```rust,ignore
//! use cookiekit::{CookieManager, DocumentJar};
//!
//! let cookies = CookieManager::new(DocumentJar::new()?);
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error type and clock
//! - [`cookies`] - Jars, operations, parsing and configuration

pub mod base;
pub mod cookies;

pub use base::cookieerror::CookieError;
pub use cookies::canonicalcookie::SameSite;
pub use cookies::config::{CookieConfig, CookieOptions};
#[cfg(target_arch = "wasm32")]
pub use cookies::document::DocumentJar;
pub use cookies::jar::CookieJar;
pub use cookies::line::encode_value;
pub use cookies::manager::CookieManager;
pub use cookies::memory::MemoryJar;
