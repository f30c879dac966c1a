//! Local UI state Atom
//!
//! Atom wraps an Actor and its Relay for small pieces of state that belong to
//! the view rather than to a domain, such as which dialog is open.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

/// Local UI state backed by Actor+Relay.
///
/// Use Atom for view concerns only (dialog visibility, hover, focus).
/// Domain state such as the typography settings lives in a domain Actor.
///
/// # Examples
///
/// ```rust
/// let modal = Atom::new(ModalState::Closed);
///
/// modal.set(ModalState::open(ModalKind::Policy));
/// modal.signal_ref(|modal| modal.kind()) // Signal<Item = Option<ModalKind>>
/// ```
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    value_set_relay: Relay<T>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + PartialEq + 'static,
{
    pub fn new(initial: T) -> Self {
        let (value_set_relay, mut value_set_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(value) = value_set_stream.next().await {
                state.set_neq(value);
            }
        });

        Self {
            actor,
            value_set_relay,
        }
    }

    /// Replaces the value; equal values do not notify subscribers.
    pub fn set(&self, value: T) {
        self.value_set_relay.send(value);
    }

    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        U: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        self.actor.signal_ref(f)
    }
}
