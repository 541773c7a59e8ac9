//! Delayed Tasks
//!
//! One-shot callbacks on a gloo `Timeout`. The pending timeout is owned by
//! the reactive scope that created the task and is dropped, which cancels
//! it, when that scope is cleaned up.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DelayedTask {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl DelayedTask {
    /// Must be called inside a component so the task is tied to its lifetime
    pub fn new() -> Self {
        let pending = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            pending.try_update_value(|slot| slot.take());
        });
        Self { pending }
    }

    /// Run `task` after `millis`, replacing any task still waiting.
    ///
    /// A fired timeout stays in the slot until the next `schedule` or
    /// cleanup; it must not be dropped from inside its own callback.
    pub fn schedule(&self, millis: u32, task: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, task);
        self.pending.update_value(|slot| *slot = Some(timeout));
    }

    /// Drop the waiting task, if any
    pub fn cancel(&self) {
        self.pending.update_value(|slot| {
            slot.take();
        });
    }
}
