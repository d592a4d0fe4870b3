//! Lazy value with single-flight initialization.
//!
//! Built for a single-threaded event loop: the first caller starts the load,
//! callers arriving while it is pending await the same future, and everyone
//! after it resolves gets the cached value.

use std::{cell::RefCell, future::Future, rc::Rc};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

type PendingLoad<T, E> = Shared<LocalBoxFuture<'static, Result<Rc<T>, E>>>;

enum FlightState<T, E> {
    Unloaded,
    Loading(PendingLoad<T, E>),
    Ready(Rc<T>),
}

/// Observable phase of a [`SingleFlight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Unloaded,
    Loading,
    Ready,
}

/// A value loaded at most once at a time, then cached.
pub struct SingleFlight<T, E> {
    state: RefCell<FlightState<T, E>>,
}

impl<T, E> Default for SingleFlight<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> SingleFlight<T, E> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FlightState::Unloaded),
        }
    }

    pub fn phase(&self) -> FlightPhase {
        match &*self.state.borrow() {
            FlightState::Unloaded => FlightPhase::Unloaded,
            FlightState::Loading(_) => FlightPhase::Loading,
            FlightState::Ready(_) => FlightPhase::Ready,
        }
    }

    /// The loaded value, if ready.
    pub fn get(&self) -> Option<Rc<T>> {
        match &*self.state.borrow() {
            FlightState::Ready(value) => Some(Rc::clone(value)),
            _ => None,
        }
    }
}

impl<T: 'static, E: Clone + 'static> SingleFlight<T, E> {
    /// Return the value, starting `load` only if nothing is loaded or loading.
    ///
    /// A failed load hands its error to every caller that was waiting on it and
    /// resets the cell, so the next call starts a fresh load.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Rc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        let pending = {
            let mut state = self.state.borrow_mut();
            let in_flight = match &*state {
                FlightState::Ready(value) => return Ok(Rc::clone(value)),
                FlightState::Loading(pending) => Some(pending.clone()),
                FlightState::Unloaded => None,
            };
            match in_flight {
                Some(pending) => pending,
                None => {
                    let fut = load();
                    let pending = async move { fut.await.map(Rc::new) }
                        .boxed_local()
                        .shared();
                    *state = FlightState::Loading(pending.clone());
                    pending
                }
            }
        };

        let outcome = pending.clone().await;

        let mut state = self.state.borrow_mut();
        // a later load may already own the cell after an earlier failure
        let settles_this_load =
            matches!(&*state, FlightState::Loading(current) if current.ptr_eq(&pending));
        if settles_this_load {
            *state = match &outcome {
                Ok(value) => FlightState::Ready(Rc::clone(value)),
                Err(_) => FlightState::Unloaded,
            };
        }

        outcome
    }
}
