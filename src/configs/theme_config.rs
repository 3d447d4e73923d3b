pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Names shared by the theme backends: where the preference is stored, which
/// class marks dark mode, and which media query reports the OS preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            media_query: DEFAULT_MEDIA_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Reads overrides from `DARKMODE_STORAGE_KEY`, `DARKMODE_DARK_CLASS` and
    /// `DARKMODE_MEDIA_QUERY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            storage_key: read_var(&lookup, "DARKMODE_STORAGE_KEY", defaults.storage_key),
            dark_class: read_var(&lookup, "DARKMODE_DARK_CLASS", defaults.dark_class),
            media_query: read_var(&lookup, "DARKMODE_MEDIA_QUERY", defaults.media_query),
        }
    }
}

fn read_var(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: String) -> String {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => {
            log::warn!("{} is empty, using default {:?}", name, default);
            default
        }
        Some(value) => {
            log::info!("Using {} = {:?}", name, value);
            value
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(ThemeConfig::from_lookup(|_| None), ThemeConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ThemeConfig::from_lookup(
            lookup_from(&[
                ("DARKMODE_STORAGE_KEY", "app-theme"),
                ("DARKMODE_DARK_CLASS", "theme-dark"),
            ])
        );
        assert_eq!(config.storage_key, "app-theme");
        assert_eq!(config.dark_class, "theme-dark");
        assert_eq!(config.media_query, DEFAULT_MEDIA_QUERY);
    }

    #[test]
    fn test_empty_override_falls_back() {
        let config = ThemeConfig::from_lookup(lookup_from(&[("DARKMODE_STORAGE_KEY", "  ")]));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }
}
