mod theme;

pub use theme::{ ParseThemeError, ThemeError };
