//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session is
//! the single source of truth for phase and current page; complaints and
//! categories live here so new entries survive page switches.

use leptos::prelude::*;
use reactive_stores::Store;

use civic_core::domain::{prepend_complaint, CategoryDefinition, Complaint};
use civic_core::{sample, Session, SessionEvent};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Phase and current page
    pub session: Session,
    /// Complaints listed on the dashboard, newest first
    pub complaints: Vec<Complaint>,
    /// Issue categories, including ones created this session
    pub categories: Vec<CategoryDefinition>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            complaints: sample::complaints(),
            categories: sample::categories(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a session event through the reducer; subscribers only hear about real changes
pub fn store_apply_event(store: &AppStore, event: SessionEvent) -> Session {
    let current = store.session().get_untracked();
    let next = current.reduce(event);
    if next != current {
        store.session().set(next);
    }
    next
}

/// Put a new complaint at the top of the list
pub fn store_add_complaint(store: &AppStore, complaint: Complaint) {
    prepend_complaint(&mut store.complaints().write(), complaint);
}

/// Append a category to the list
pub fn store_add_category(store: &AppStore, category: CategoryDefinition) {
    store.categories().write().push(category);
}
