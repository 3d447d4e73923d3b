use std::rc::Rc;
use super::ports::{ AppearanceSignal, AppearanceSink, PreferenceStore };
use super::types::Theme;

/// Controller state. The OS listener only ever lives inside `System`.
enum Phase<L> {
    Unresolved,
    System {
        listener: Option<L>,
    },
    Dark,
    Light,
    Released,
}

impl<L> Phase<L> {
    fn theme(&self) -> Option<Theme> {
        match self {
            Phase::System { .. } => Some(Theme::System),
            Phase::Dark => Some(Theme::Dark),
            Phase::Light => Some(Theme::Light),
            Phase::Unresolved | Phase::Released => None,
        }
    }
}

/// Theme `initialize` resolves to, read without side effects.
pub fn stored_theme(store: &impl PreferenceStore) -> Theme {
    let stored = store.load().unwrap_or_else(|e| {
        log::warn!("Theme preference could not be read: {}", e);
        None
    });
    Theme::from_stored(stored.as_deref())
}

/// Effective appearance of `theme`, falling back to light when the OS
/// signal cannot be queried.
pub fn effective_dark(theme: Theme, signal: &impl AppearanceSignal) -> bool {
    theme.is_dark(|| {
        signal.prefers_dark().unwrap_or_else(|e| {
            log::warn!("OS appearance unavailable, assuming light: {}", e);
            false
        })
    })
}

/// Resolves, applies and persists the theme preference, and keeps the
/// appearance in sync with the OS while in `System` mode.
pub struct ThemeController<S, D, O> where O: AppearanceSignal {
    store: S,
    sink: Rc<D>,
    signal: O,
    phase: Phase<O::Listener>,
}

impl<S, D, O> ThemeController<S, D, O>
    where S: PreferenceStore, D: AppearanceSink + 'static, O: AppearanceSignal
{
    pub fn new(store: S, sink: D, signal: O) -> Self {
        Self {
            store,
            sink: Rc::new(sink),
            signal,
            phase: Phase::Unresolved,
        }
    }

    /// Current theme, `None` before `initialize` and after `teardown`.
    pub fn theme(&self) -> Option<Theme> {
        self.phase.theme()
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.phase, Phase::System { listener: Some(_) })
    }

    /// Loads the stored preference and enters it. Only the first call has
    /// any effect.
    pub fn initialize(&mut self) -> Theme {
        if let Some(theme) = self.phase.theme() {
            log::debug!("Theme already initialized as {}", theme);
            return theme;
        }
        if matches!(self.phase, Phase::Released) {
            log::warn!("initialize called on a released theme controller");
            return Theme::System;
        }

        let theme = stored_theme(&self.store);
        log::info!("Initial theme: {}", theme);
        self.enter(theme);
        theme
    }

    /// Switches to `theme`. Returns `false` when nothing changed.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        match self.phase.theme() {
            Some(current) if current == theme => {
                log::debug!("Theme is already {}", theme);
                return false;
            }
            _ => {}
        }
        if matches!(self.phase, Phase::Released) {
            log::warn!("Ignoring theme change to {} after teardown", theme);
            return false;
        }

        log::info!("Switching theme to {}", theme);
        self.enter(theme);
        true
    }

    /// Detaches the OS listener, if any. The controller ignores every call
    /// afterwards.
    pub fn teardown(&mut self) {
        if matches!(self.phase, Phase::Released) {
            return;
        }
        self.detach();
        self.phase = Phase::Released;
        log::debug!("Theme controller released");
    }

    fn enter(&mut self, theme: Theme) {
        self.detach();

        self.apply(effective_dark(theme, &self.signal));

        self.phase = match theme {
            Theme::System => Phase::System { listener: self.attach() },
            Theme::Dark => Phase::Dark,
            Theme::Light => Phase::Light,
        };

        if let Err(e) = self.store.save(theme.as_str()) {
            log::warn!("Theme preference could not be saved: {}", e);
        }
    }

    fn apply(&self, dark: bool) {
        if let Err(e) = self.sink.apply(dark) {
            log::warn!("Appearance could not be applied: {}", e);
        }
    }

    fn attach(&self) -> Option<O::Listener> {
        let sink = Rc::clone(&self.sink);
        let on_change = Box::new(move |dark: bool| {
            log::debug!("OS appearance changed, dark = {}", dark);
            if let Err(e) = sink.apply(dark) {
                log::warn!("Appearance could not be applied: {}", e);
            }
        });

        match self.signal.subscribe(on_change) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("Not tracking OS appearance changes: {}", e);
                None
            }
        }
    }

    fn detach(&mut self) {
        let Phase::System { listener } = &mut self.phase else {
            return;
        };
        if let Some(listener) = listener.take() {
            if let Err(e) = self.signal.unsubscribe(listener) {
                log::warn!("OS appearance listener could not be detached: {}", e);
            }
        }
    }
}

impl<S, D, O> Drop for ThemeController<S, D, O> where O: AppearanceSignal {
    fn drop(&mut self) {
        if let Phase::System { listener: Some(listener) } = std::mem::replace(&mut self.phase, Phase::Released) {
            if let Err(e) = self.signal.unsubscribe(listener) {
                log::warn!("OS appearance listener could not be detached: {}", e);
            }
        }
    }
}
