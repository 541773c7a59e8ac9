//! Location Hash
//!
//! Mirrors the current page into `window.location.hash` (`#/map`).

use leptos::prelude::window;

pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Set the hash unless it already matches, to avoid a redundant `hashchange`
pub fn set_hash(hash: &str) {
    if current_hash() == hash {
        return;
    }
    if let Err(err) = window().location().set_hash(hash) {
        log::warn!("could not set location hash {}: {:?}", hash, err);
    }
}

pub fn clear_hash() {
    if !current_hash().is_empty() {
        set_hash("");
    }
}
