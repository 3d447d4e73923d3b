/// Failures reported by the theme ports. None of them are fatal: the
/// controller logs them and keeps running with reduced functionality.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("{0} is not available in this context")]
    Unavailable(&'static str),
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("listener is not attached")]
    UnknownListener,
    #[error("appearance state is not writable: {0}")]
    StateBorrow(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ThemeError::Js(format!("{:?}", value))
    }
}

/// Returned when a string is not one of `system`, `dark` or `light`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme: {value:?}")]
pub struct ParseThemeError {
    pub value: String,
}
