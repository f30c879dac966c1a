//! Event streaming Relay
//!
//! A Relay carries events from one UI control to the Actor that owns the
//! state the control edits. It is a thin wrapper over an unbounded channel.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
#[cfg(debug_assertions)]
use std::sync::{Arc, OnceLock};

/// Type-safe event channel from a UI control to an Actor.
///
/// # Event-Source Naming Convention
///
/// Relays follow the `{source}_{event}_relay` pattern:
/// - `heading_text_changed_relay` - the heading input was edited
/// - `preset_clicked_relay` - a sample text preset button was pressed
/// - `copy_clicked_relay` - the export button was pressed
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::relay;
///
/// let (line_height_changed_relay, mut stream) = relay::<f64>();
///
/// // Emit from the slider
/// line_height_changed_relay.send(2.0);
///
/// // Consume in the Actor
/// while let Some(line_height) = stream.next().await {
///     state.lock_mut().set_line_height(line_height);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

#[cfg(debug_assertions)]
#[derive(Debug, Clone)]
pub enum RelayError {
    /// Relay sent from more than one code location
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a Relay together with the stream its Actor consumes.
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    /// In debug builds, every send must come from the same source location.
    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Sends an event. Events sent after the receiver is gone are dropped.
    ///
    /// Panics in debug builds when the relay is sent from a second location.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(RelayError::MultipleEmitters { previous, current }) =
            self.check_single_source()
        {
            panic!("MultipleEmitters: relay sent from {current}, already sent from {previous}");
        }

        let _ = self.sender.unbounded_send(value);
    }
}

/// Creates a new Relay with its receiver stream.
///
/// ```rust
/// let (shuffle_clicked_relay, mut shuffle_clicked_stream) = relay::<()>();
/// ```
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}
