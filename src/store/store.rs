//! State container binding a reducer to dispatch and subscription.

use std::sync::mpsc::{self, Receiver, Sender};

use super::reducer::Reducer;

/// Owns the current state for one screen and runs its reducer.
///
/// The store is the single writer: every mutation goes through
/// [`Store::dispatch`], which reduces one action fully before the next is
/// accepted. Readers either borrow the current snapshot via
/// [`Store::state`] or receive changed snapshots over a channel from
/// [`Store::subscribe`]; they never mutate state directly.
pub struct Store<R: Reducer> {
    state: R::State,
    subscribers: Vec<Sender<R::State>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Borrow the current state snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer for one action and publish the result.
    ///
    /// Subscribers are only notified when the reduced state differs from
    /// the previous snapshot, so redundant actions produce no traffic.
    pub fn dispatch(&mut self, action: R::Action) {
        let previous = self.state.clone();
        self.state = R::reduce(std::mem::take(&mut self.state), action);
        if self.state != previous {
            tracing::debug!(subscribers = self.subscribers.len(), "state changed");
            self.publish();
        }
    }

    /// Register a subscriber and return its receiving end.
    ///
    /// Each changed snapshot is delivered in dispatch order. Dropping the
    /// receiver unsubscribes; the dead sender is pruned on the next
    /// publication.
    pub fn subscribe(&mut self) -> Receiver<R::State> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self) {
        let state = &self.state;
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
    }
}
