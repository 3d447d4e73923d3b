//! Browser backends built on `web_sys`.

use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Element, MediaQueryList, MediaQueryListEvent, Storage };
use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use super::ports::{ AppearanceSignal, AppearanceSink, PreferenceStore };

const CHANGE_EVENT: &str = "change";

/// `window.localStorage`, absent in restricted browsing contexts.
pub struct LocalStorageStore {
    key: String,
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, theme will not persist");
        }
        Self { key: key.to_string(), storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or(ThemeError::Unavailable("localStorage"))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.storage()?.get_item(&self.key)?)
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        self.storage()?.set_item(&self.key, value)?;
        Ok(())
    }
}

/// Toggles the dark class on `<html>`.
pub struct DocumentClassSink {
    class: String,
}

impl DocumentClassSink {
    pub fn new(class: &str) -> Self {
        Self { class: class.to_string() }
    }

    fn root() -> Result<Element, ThemeError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or(ThemeError::Unavailable("document element"))
    }
}

impl AppearanceSink for DocumentClassSink {
    fn apply(&self, dark: bool) -> Result<(), ThemeError> {
        let classes = Self::root()?.class_list();
        if dark {
            classes.add_1(&self.class)?;
        } else {
            classes.remove_1(&self.class)?;
        }
        Ok(())
    }
}

/// Attached `change` callback. Dropping it invalidates the JS function, so it
/// is kept until `unsubscribe`.
pub struct MediaQueryListener {
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

/// `window.matchMedia(query)`. The list is created once so the same object
/// is used to add and remove listeners.
pub struct MediaQuerySignal {
    list: Option<MediaQueryList>,
    attached: Cell<usize>,
}

impl MediaQuerySignal {
    pub fn new(query: &str) -> Self {
        let list = web_sys::window().and_then(|w| w.match_media(query).ok().flatten());
        if list.is_none() {
            log::warn!("matchMedia({}) unavailable, OS theme is not tracked", query);
        }
        Self { list, attached: Cell::new(0) }
    }

    fn list(&self) -> Result<&MediaQueryList, ThemeError> {
        self.list.as_ref().ok_or(ThemeError::Unavailable("matchMedia"))
    }
}

impl AppearanceSignal for MediaQuerySignal {
    type Listener = MediaQueryListener;

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Ok(self.list()?.matches())
    }

    fn subscribe(&self, mut on_change: Box<dyn FnMut(bool)>) -> Result<Self::Listener, ThemeError> {
        let list = self.list()?;
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| on_change(event.matches())
        );
        list.add_event_listener_with_callback(CHANGE_EVENT, callback.as_ref().unchecked_ref::<js_sys::Function>())?;
        self.attached.set(self.attached.get() + 1);
        log::debug!("Listening for OS appearance changes ({} attached)", self.attached.get());
        Ok(MediaQueryListener { callback })
    }

    fn unsubscribe(&self, listener: Self::Listener) -> Result<(), ThemeError> {
        let list = self.list()?;
        list.remove_event_listener_with_callback(
            CHANGE_EVENT,
            listener.callback.as_ref().unchecked_ref::<js_sys::Function>()
        )?;
        self.attached.set(self.attached.get().saturating_sub(1));
        log::debug!("Stopped listening for OS appearance changes ({} attached)", self.attached.get());
        Ok(())
    }
}

pub fn backends(config: &ThemeConfig) -> (LocalStorageStore, DocumentClassSink, MediaQuerySignal) {
    (
        LocalStorageStore::new(&config.storage_key),
        DocumentClassSink::new(&config.dark_class),
        MediaQuerySignal::new(&config.media_query),
    )
}
