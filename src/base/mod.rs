//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): failures reported by jars and config loading
//! - [`Clock`](clock::Clock): the time source used for expirations

pub mod clock;
pub mod cookieerror;
