//! Desktop backends. The preference is a small file in the user's config
//! directory; the OS appearance is read once per query, without live updates.

use std::io::ErrorKind;
use std::path::{ Path, PathBuf };
use dark_light::{ detect as detect_os_theme, Mode as OsThemeMode };
use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use super::ports::{ AppearanceSignal, PreferenceStore };

const APP_DIR: &str = "darkmode";

/// Stores the preference in `<config dir>/darkmode/<storage key>`.
#[derive(Debug)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    pub fn new(key: &str) -> Self {
        let path = dirs::config_dir().map(|dir| dir.join(APP_DIR).join(key));
        match &path {
            Some(path) => log::debug!("Theme preference file: {}", path.display()),
            None => log::warn!("No config directory found, theme will not persist"),
        }
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    fn path(&self) -> Result<&Path, ThemeError> {
        self.path.as_deref().ok_or(ThemeError::Unavailable("config directory"))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        match std::fs::read_to_string(self.path()?) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, value)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SystemAppearance;

impl AppearanceSignal for SystemAppearance {
    type Listener = ();

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Ok(matches!(detect_os_theme(), OsThemeMode::Dark))
    }

    fn subscribe(&self, _on_change: Box<dyn FnMut(bool)>) -> Result<(), ThemeError> {
        Err(ThemeError::Unsupported("live OS appearance tracking"))
    }

    fn unsubscribe(&self, _listener: ()) -> Result<(), ThemeError> {
        Err(ThemeError::UnknownListener)
    }
}

pub fn backends(config: &ThemeConfig) -> (FileStore, SystemAppearance) {
    (FileStore::new(&config.storage_key), SystemAppearance)
}
