use std::cell::{ Cell, RefCell };
use std::collections::HashMap;
use std::rc::Rc;
use crate::error::ThemeError;
use crate::theme::{ AppearanceSignal, AppearanceSink, PreferenceStore };

pub const KEY: &str = "theme";

/// Key-value storage shared between clones, so a new controller built from a
/// clone sees what the previous one wrote (a page reload).
#[derive(Clone, Default)]
pub struct MockStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    unavailable: bool,
}

impl MockStore {
    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(KEY.to_string(), value.to_string());
        store
    }

    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub fn value(&self) -> Option<String> {
        self.entries.borrow().get(KEY).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MockStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::Unavailable("mock storage"));
        }
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::Unavailable("mock storage"));
        }
        self.entries.borrow_mut().insert(KEY.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Records the last applied appearance and how many times it was applied.
#[derive(Clone, Default)]
pub struct MockSink {
    dark: Rc<Cell<Option<bool>>>,
    applied: Rc<Cell<usize>>,
}

impl MockSink {
    pub fn dark(&self) -> Option<bool> {
        self.dark.get()
    }

    pub fn applied(&self) -> usize {
        self.applied.get()
    }
}

impl AppearanceSink for MockSink {
    fn apply(&self, dark: bool) -> Result<(), ThemeError> {
        self.dark.set(Some(dark));
        self.applied.set(self.applied.get() + 1);
        Ok(())
    }
}

/// Sink whose every apply fails, e.g. a document that went away.
#[derive(Clone, Default)]
pub struct FailingSink {
    attempts: Rc<Cell<usize>>,
}

impl FailingSink {
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl AppearanceSink for FailingSink {
    fn apply(&self, _dark: bool) -> Result<(), ThemeError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(ThemeError::Unavailable("mock document"))
    }
}

type Callback = Box<dyn FnMut(bool)>;

/// OS signal that tests flip with `set_prefers_dark`.
#[derive(Clone, Default)]
pub struct MockSignal {
    dark: Rc<Cell<bool>>,
    listeners: Rc<RefCell<Vec<(u64, Callback)>>>,
    next_id: Rc<Cell<u64>>,
    reject_unsubscribe: Rc<Cell<bool>>,
    unavailable: bool,
}

pub struct MockListener(u64);

impl MockSignal {
    pub fn new(dark: bool) -> Self {
        let signal = Self::default();
        signal.dark.set(dark);
        signal
    }

    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    /// Makes `unsubscribe` fail while leaving the listener attached.
    pub fn reject_unsubscribe(&self) {
        self.reject_unsubscribe.set(true);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.dark.set(dark);
        for (_, callback) in self.listeners.borrow_mut().iter_mut() {
            callback(dark);
        }
    }
}

impl AppearanceSignal for MockSignal {
    type Listener = MockListener;

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::Unavailable("mock media query"));
        }
        Ok(self.dark.get())
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Result<MockListener, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::Unavailable("mock media query"));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, on_change));
        Ok(MockListener(id))
    }

    fn unsubscribe(&self, listener: MockListener) -> Result<(), ThemeError> {
        if self.reject_unsubscribe.get() {
            return Err(ThemeError::Js("removeEventListener failed".to_string()));
        }
        let mut listeners = self.listeners.borrow_mut();
        let index = listeners
            .iter()
            .position(|(id, _)| *id == listener.0)
            .ok_or(ThemeError::UnknownListener)?;
        listeners.remove(index);
        Ok(())
    }
}
