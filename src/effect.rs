//! Declarative effect system for describing deferred event processing.

use crate::Emitter;

/// Declarative description of events to be processed.
///
/// Effects describe deferred work that will produce events. They are returned
/// from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update) alongside the new model state
/// and handed to the runtime's [`Spawner`](crate::Spawner) once the new props
/// have been rendered.
///
/// # Example
///
/// ```rust
/// use traffic_light_mvu::{ClickTarget, Effect, PanelEvent};
///
/// // Replay a single click
/// let effect = Effect::just(PanelEvent::Clicked(ClickTarget::new("stopButton")));
///
/// // Replay a sequence of clicks, in order
/// let effect = Effect::batch(vec![
///     Effect::just(PanelEvent::Clicked(ClickTarget::new("stopButton"))),
///     Effect::just(PanelEvent::Clicked(ClickTarget::new("goButton"))),
/// ]);
///
/// // No side effects
/// let effect: Effect<PanelEvent> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event>(Box<dyn Fn(&Emitter<Event>) + Send + 'static>);

impl<Event: Send + 'static> Effect<Event> {
    /// Run the effect, emitting any events it describes.
    pub fn execute(&self, emitter: &Emitter<Event>) {
        (self.0)(emitter);
    }

    /// Create an effect that emits a single event.
    ///
    /// Useful for triggering immediate follow-up events.
    pub fn just(event: Event) -> Self
    where
        Event: Clone,
    {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            emitter.emit(event.clone());
        }))
    }

    /// Create an empty effect.
    ///
    /// Prefer this when semantically indicating "no side effects".
    pub fn none() -> Self {
        Self(Box::new(|_| {}))
    }

    /// Combine multiple effects into a single effect.
    ///
    /// Events are emitted in the order the effects were given.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            for effect in &effects {
                effect.execute(emitter);
            }
        }))
    }
}
