mod observer;
mod presentation;

pub use observer::Observer;
pub use presentation::{Accent, Presentation};

use std::fmt;

use tracing::instrument;

use crate::core::command::Command;

/// The integer register behind a counter screen.
///
/// The value starts at zero and only changes through [`increment`],
/// [`decrement`] and [`reset`]. Each of those hands the new value to the
/// registered observer before returning.
///
/// [`increment`]: CounterStore::increment
/// [`decrement`]: CounterStore::decrement
/// [`reset`]: CounterStore::reset
pub struct CounterStore {
    value: i64,
    observer: Option<Box<dyn Observer>>,
}

impl CounterStore {
    pub fn new() -> Self {
        tracing::info!("Creating a new counter store with initial value: 0");
        Self {
            value: 0,
            observer: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn starting_at(value: i64) -> Self {
        Self {
            value,
            observer: None,
        }
    }

    pub fn current_value(&self) -> i64 {
        self.value
    }

    /// What the owning screen should draw for the current value.
    pub fn presentation(&self) -> Presentation {
        Presentation::of(self.value)
    }

    /// Installs `observer` in the single observer slot, handing back
    /// whichever observer it displaced.
    pub fn subscribe<O>(&mut self, observer: O) -> Option<Box<dyn Observer>>
    where
        O: Observer + 'static,
    {
        let previous = self.observer.replace(Box::new(observer));
        tracing::debug!(replaced = previous.is_some(), "Observer subscribed");
        previous
    }

    pub fn unsubscribe(&mut self) -> Option<Box<dyn Observer>> {
        let previous = self.observer.take();
        tracing::debug!(removed = previous.is_some(), "Observer unsubscribed");
        previous
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    #[instrument(name = "increment_counter", level = "debug", skip(self))]
    pub fn increment(&mut self) -> i64 {
        self.store(self.value.saturating_add(1))
    }

    #[instrument(name = "decrement_counter", level = "debug", skip(self))]
    pub fn decrement(&mut self) -> i64 {
        self.store(self.value.saturating_sub(1))
    }

    #[instrument(name = "reset_counter", level = "debug", skip(self))]
    pub fn reset(&mut self) -> i64 {
        self.store(0)
    }

    /// Runs the operation `command` names and returns the new value.
    pub fn apply(&mut self, command: Command) -> i64 {
        match command {
            Command::Increment => self.increment(),
            Command::Decrement => self.decrement(),
            Command::Reset => self.reset(),
        }
    }

    fn store(&mut self, value: i64) -> i64 {
        self.value = value;
        tracing::debug!(value, "Counter changed to: {}", value);

        match self.observer.as_mut() {
            Some(observer) => observer.on_change(value),
            None => tracing::trace!(value, "No observer registered, notification dropped"),
        }

        value
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CounterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterStore")
            .field("value", &self.value)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
