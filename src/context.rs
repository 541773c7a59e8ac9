//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use civic_core::{AppConfig, Page, Session, SessionEvent};

use crate::location;
use crate::store::{store_apply_event, AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Current session, tracked
    pub fn session(&self) -> Session {
        self.store.session().get()
    }

    /// Feed an event to the session reducer.
    ///
    /// Signing in honours a pending `#/page` deep link; signing out clears it
    /// so the next sign-in starts on the dashboard.
    pub fn dispatch(&self, event: SessionEvent) {
        let before = self.store.session().get_untracked();
        let after = store_apply_event(&self.store, event);
        match (before.is_authenticated(), after.is_authenticated()) {
            (false, true) => {
                let pending = Page::from_hash(&location::current_hash());
                store_apply_event(&self.store, SessionEvent::Navigate(pending));
            }
            (true, false) => location::clear_hash(),
            _ => {}
        }
    }

    pub fn navigate(&self, page: Page) {
        self.dispatch(SessionEvent::Navigate(page));
    }

    /// Read a value out of the configuration
    pub fn with_config<T>(&self, f: impl FnOnce(&AppConfig) -> T) -> T {
        self.config.with_value(f)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
