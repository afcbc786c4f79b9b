use gloo_timers::callback::Timeout;
use leptos::*;
use std::{rc::Rc, time::Duration};
#[cfg(test)]
use std::{cell::RefCell, collections::HashMap};

use crate::utils::storage;

pub const SPLASH_FLAG_KEY: &str = "hasShownLoading";
pub const SPLASH_DURATION: Duration = Duration::from_millis(1000);

/// Key/value flags that live for one browser session.
pub trait SessionFlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.sessionStorage`. Unavailable storage reads as empty and drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionFlagStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        storage::session_storage()
            .ok()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match storage::session_storage() {
            Ok(s) => {
                if s.set_item(key, value).is_err() {
                    log::warn!("Failed to persist session flag {}", key);
                }
            }
            Err(err) => log::debug!("Skipping session flag {}: {}", key, err),
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SessionFlagStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashDecision {
    Show(Duration),
    Skip,
}

#[derive(Clone)]
pub struct SplashGate {
    store: Rc<dyn SessionFlagStore>,
}

impl SplashGate {
    pub fn new(store: Rc<dyn SessionFlagStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserSessionStore))
    }

    pub fn decide(&self) -> SplashDecision {
        match self.store.get(SPLASH_FLAG_KEY) {
            Some(_) => SplashDecision::Skip,
            None => SplashDecision::Show(SPLASH_DURATION),
        }
    }

    pub fn complete(&self) {
        self.store.set(SPLASH_FLAG_KEY, "true");
    }
}

pub fn provide_splash_gate(gate: SplashGate) {
    provide_context(gate);
}

/// Returns `true` while the splash should block the page.
///
/// The timer lives in the calling owner: unmounting drops it, which cancels
/// the timeout before the flag is written, so the next mount shows the
/// splash again.
pub fn use_splash_gate() -> Signal<bool> {
    let gate = use_context::<SplashGate>().unwrap_or_else(SplashGate::browser);
    let decision = gate.decide();
    let visible = create_rw_signal(matches!(decision, SplashDecision::Show(_)));

    if let SplashDecision::Show(duration) = decision {
        let timer = store_value(None::<Timeout>);
        create_effect(move |_| {
            let gate = gate.clone();
            let handle = Timeout::new(duration.as_millis() as u32, move || {
                visible.set(false);
                gate.complete();
            });
            timer.set_value(Some(handle));
        });
    }

    visible.into()
}
