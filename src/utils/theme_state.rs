use dioxus::prelude::*;
use crate::error::ThemeError;
use crate::theme::AppearanceSink;

/// Effective appearance as seen by components.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn root_class(self, dark_class: &str) -> &str {
        if self.is_dark { dark_class } else { "" }
    }
}

impl AppearanceSink for Signal<ThemeState> {
    fn apply(&self, dark: bool) -> Result<(), ThemeError> {
        let current = self.try_peek().map_err(|e| ThemeError::StateBorrow(e.to_string()))?.is_dark;
        if current == dark {
            return Ok(());
        }
        let mut signal = *self;
        signal.try_write().map_err(|e| ThemeError::StateBorrow(e.to_string()))?.is_dark = dark;
        Ok(())
    }
}
