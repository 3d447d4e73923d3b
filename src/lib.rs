pub mod views;
pub mod components;
pub mod utils;
pub mod theme;
pub mod configs;
pub mod error;
#[cfg(test)]
mod tests;

pub use crate::configs::ThemeConfig;
pub use crate::error::{ ParseThemeError, ThemeError };
pub use crate::theme::{ Theme, ThemeController };
pub use crate::utils::ThemeState;
