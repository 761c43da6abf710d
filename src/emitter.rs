//! Event emitter for embedding callbacks in Props.

use flume::Sender;

/// Event emitter that can be embedded in Props.
///
/// Clone this handle to build callbacks in your Props that trigger events
/// when invoked, e.g. the click listener of a control panel.
///
/// `Emitter` wraps a channel sender, so it is cheap to clone and can be moved
/// to other threads. Emitted events are only ever processed on the thread
/// that owns the [`MvuRuntime`](crate::MvuRuntime).
///
/// # Example
///
/// ```rust
/// use traffic_light_mvu::{ClickTarget, Emitter, PanelEvent};
///
/// fn click_listener(emitter: &Emitter<PanelEvent>) -> Box<dyn Fn(&str) + Send> {
///     let emitter = emitter.clone();
///     Box::new(move |id| emitter.emit(PanelEvent::Clicked(ClickTarget::new(id))))
/// }
/// ```
pub struct Emitter<Event>(pub(crate) Sender<Event>);

impl<Event> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// This queues the event for processing by the runtime. Events emitted
    /// after the runtime has been dropped are discarded.
    pub fn emit(&self, event: Event) {
        self.0.send(event).ok();
    }
}
