//! The cookie jar capability.
//!
//! A jar behaves like the browser's `document.cookie` property: reading
//! yields every visible cookie as `name=value` pairs joined by `"; "`,
//! writing applies exactly one assignment line and leaves the other
//! cookies alone.

use std::rc::Rc;
use std::sync::Arc;

use crate::base::cookieerror::CookieError;

pub trait CookieJar {
    /// Current contents, serialized as `name1=value1; name2=value2`.
    /// An unreadable jar reads as empty.
    fn read(&self) -> String;

    /// Apply a single assignment line such as
    /// `name=value; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT`.
    fn write(&self, line: &str) -> Result<(), CookieError>;
}

impl<J: CookieJar + ?Sized> CookieJar for &J {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        (**self).write(line)
    }
}

impl<J: CookieJar + ?Sized> CookieJar for Box<J> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        (**self).write(line)
    }
}

impl<J: CookieJar + ?Sized> CookieJar for Rc<J> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        (**self).write(line)
    }
}

impl<J: CookieJar + ?Sized> CookieJar for Arc<J> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        (**self).write(line)
    }
}
