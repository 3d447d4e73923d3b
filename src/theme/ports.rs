use crate::error::ThemeError;

/// Key-value storage holding the persisted theme string.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, ThemeError>;
    fn save(&self, value: &str) -> Result<(), ThemeError>;
}

/// Receives the effective appearance (`true` = dark).
pub trait AppearanceSink {
    fn apply(&self, dark: bool) -> Result<(), ThemeError>;
}

/// Operating-system dark-mode signal.
///
/// `subscribe` hands back a listener token that must be passed to
/// `unsubscribe` to detach the same callback again.
pub trait AppearanceSignal {
    type Listener;

    fn prefers_dark(&self) -> Result<bool, ThemeError>;
    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Result<Self::Listener, ThemeError>;
    fn unsubscribe(&self, listener: Self::Listener) -> Result<(), ThemeError>;
}

/// Applies to both sinks. Both are attempted even if the first fails.
impl<A: AppearanceSink, B: AppearanceSink> AppearanceSink for (A, B) {
    fn apply(&self, dark: bool) -> Result<(), ThemeError> {
        let first = self.0.apply(dark);
        let second = self.1.apply(dark);
        first.and(second)
    }
}
