pub mod controller;
pub mod ports;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use std::cell::RefCell;
use std::rc::Rc;
use dioxus::prelude::Signal;
use crate::configs::ThemeConfig;
use crate::utils::ThemeState;

pub use controller::{ effective_dark, stored_theme, ThemeController };
pub use ports::{ AppearanceSignal, AppearanceSink, PreferenceStore };
pub use types::Theme;

#[cfg(target_arch = "wasm32")]
pub type PlatformThemeController = ThemeController<
    web::LocalStorageStore,
    (web::DocumentClassSink, Signal<ThemeState>),
    web::MediaQuerySignal
>;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformThemeController = ThemeController<
    native::FileStore,
    Signal<ThemeState>,
    native::SystemAppearance
>;

/// Shared handle to the page's controller, handed out through context.
#[derive(Clone)]
pub struct ThemeHandle(Rc<RefCell<PlatformThemeController>>);

impl ThemeHandle {
    pub fn theme(&self) -> Option<Theme> {
        self.0.borrow().theme()
    }

    pub fn set_theme(&self, theme: Theme) -> bool {
        self.0.borrow_mut().set_theme(theme)
    }

    pub fn teardown(&self) {
        self.0.borrow_mut().teardown()
    }
}

/// Builds and initializes the controller for the current target, together
/// with the appearance signal it drives. The signal starts out holding the
/// resolved appearance, so initializing does not write to it.
///
/// Must be called inside a component (e.g. from `use_hook`).
pub fn platform_theme(config: &ThemeConfig) -> (ThemeHandle, Signal<ThemeState>) {
    #[cfg(target_arch = "wasm32")]
    let (store, document, signal) = web::backends(config);
    #[cfg(not(target_arch = "wasm32"))]
    let (store, signal) = native::backends(config);

    let dark = effective_dark(stored_theme(&store), &signal);
    let appearance = Signal::new(ThemeState { is_dark: dark });

    #[cfg(target_arch = "wasm32")]
    let mut controller = ThemeController::new(store, (document, appearance), signal);
    #[cfg(not(target_arch = "wasm32"))]
    let mut controller = ThemeController::new(store, appearance, signal);

    controller.initialize();
    (ThemeHandle(Rc::new(RefCell::new(controller))), appearance)
}
