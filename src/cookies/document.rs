//! Browser-backed jar over `document.cookie`.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::base::cookieerror::CookieError;
use crate::cookies::jar::CookieJar;

/// The page's own cookie jar.
///
/// Expiry, path scoping and SameSite enforcement are left to the browser.
pub struct DocumentJar {
    document: HtmlDocument,
}

impl DocumentJar {
    /// Bind to the current window's document.
    ///
    /// Fails outside a window context (e.g. in a worker) or when the
    /// document is not an HTML document.
    pub fn new() -> Result<Self, CookieError> {
        let window =
            web_sys::window().ok_or_else(|| CookieError::unavailable("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| CookieError::unavailable("window has no document"))?;
        let document = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| CookieError::unavailable("document is not an HTML document"))?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: HtmlDocument) -> Self {
        Self { document }
    }
}

impl CookieJar for DocumentJar {
    fn read(&self) -> String {
        match self.document.cookie() {
            Ok(cookies) => cookies,
            Err(e) => {
                tracing::debug!(error = ?e, "document.cookie read failed");
                String::new()
            }
        }
    }

    fn write(&self, line: &str) -> Result<(), CookieError> {
        self.document.set_cookie(line).map_err(CookieError::from)
    }
}
