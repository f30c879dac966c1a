//! Single-value Actor
//!
//! An Actor owns a `Mutable<T>` and is the only code allowed to change it.
//! Events arrive through Relays and are processed one at a time.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state container driven by an event loop.
///
/// - **Single Point of Mutation**: only the processor modifies the state
/// - **Sequential Processing**: events are handled in arrival order
/// - **Reactive Signals**: the UI reads state through signals only
///
/// # Examples
///
/// ```rust
/// let (viewport_mode_selected_relay, mut viewport_stream) = relay();
///
/// let viewport = Actor::new(ViewportMode::Desktop, async move |state| {
///     while let Some(mode) = viewport_stream.next().await {
///         state.set_neq(mode);
///     }
/// });
///
/// viewport.signal_ref(|mode| mode.label()) // Signal<Item = &'static str>
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    // Dropping the last clone stops the processor.
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates the Actor and starts `processor` on its state.
    ///
    /// The processor usually loops over one or more relay streams and never
    /// returns while the application runs.
    #[track_caller]
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);

        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            task_handle,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    /// Reactive projection of the state; only `f`'s result is cloned out.
    ///
    /// ```rust
    /// studio.state.signal_ref(|state| state.heading_size_px())
    /// ```
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        U: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}
