//! View state machines
//!
//! Each view keeps its state in a plain struct with synchronous transitions.
//! Async operations are free functions that run a transition, await the
//! backend, then apply the outcome through a [`StateCell`]. No borrow is held
//! across an await point, and a cell whose owner is gone drops late writes.

use leptos::prelude::{RwSignal, Update};
use std::cell::RefCell;
use std::future::Future;
use tokio_util::sync::CancellationToken;

pub mod dashboard;
pub mod gallery;
pub mod menu;
pub mod navigation;
pub mod offers;
pub mod pagination;
pub mod session;

/// Somewhere view state can be read and written
pub trait StateCell<S> {
    /// Run `f` against the state; `None` when the state is gone
    fn with_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S> StateCell<S> for RefCell<S> {
    fn with_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn with_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Yes/no prompt shown before destructive actions
pub trait Confirm {
    /// Ask `prompt`; `true` when the user agrees
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Lifetime of one mounted view
///
/// Loads started through [`ViewScope::run`] are abandoned once the scope is
/// cancelled, so their responses never reach state.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    /// A fresh, live scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Abandon every load running in this scope
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the view has been torn down
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `future` unless the scope is cancelled first
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        self.token.run_until_cancelled(future).await
    }
}
