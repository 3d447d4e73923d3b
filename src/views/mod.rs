mod darkmode;

pub use darkmode::DarkMode;
