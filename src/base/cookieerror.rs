use thiserror::Error;

/// Errors raised by cookie jars and configuration loading.
///
/// The spec-level operations on [`CookieManager`](crate::cookies::manager::CookieManager)
/// never return these; they are logged and dropped. The `try_*` variants hand them
/// back to callers who care whether the jar accepted a write.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    /// The jar refused to parse an assignment line.
    #[error("Invalid cookie line {line:?}: {reason}")]
    InvalidLine { line: String, reason: String },

    /// No cookie jar is reachable (no window, no HTML document, cookies disabled).
    #[error("Cookie jar unavailable: {0}")]
    Unavailable(String),

    /// The host environment threw while reading or writing the jar.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Configuration could not be loaded.
    #[error("Invalid cookie configuration: {0}")]
    Config(String),
}

impl CookieError {
    pub fn invalid_line(line: impl Into<String>, reason: impl Into<String>) -> Self {
        CookieError::InvalidLine {
            line: line.into(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        CookieError::Unavailable(reason.into())
    }

    pub fn config(reason: impl Into<String>) -> Self {
        CookieError::Config(reason.into())
    }

    /// True when retrying the same write cannot succeed.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            CookieError::InvalidLine { .. } | CookieError::Config(_)
        )
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for CookieError {
    fn from(err: serde_json::Error) -> Self {
        CookieError::Config(err.to_string())
    }
}

impl From<std::io::Error> for CookieError {
    fn from(err: std::io::Error) -> Self {
        CookieError::Config(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for CookieError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        CookieError::Js(message)
    }
}
