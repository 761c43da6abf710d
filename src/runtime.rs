//! The MVU runtime that orchestrates the event loop.

use core::future::Future;
use core::pin::Pin;

use flume::Receiver;

use crate::{Effect, Emitter, MvuLogic, Renderer};

/// A spawner trait for executing futures on an async runtime.
///
/// Effects are wrapped in a future and handed to the spawner, which lets the
/// host pick its own execution model.
///
/// Function pointers and closures automatically implement this trait via the
/// blanket implementation.
pub trait Spawner {
    /// Spawn a future on the async runtime.
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>);
}

impl<F> Spawner for F
where
    F: Fn(Pin<Box<dyn Future<Output = ()> + Send>>),
{
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        self(future)
    }
}

/// Spawner that runs each effect to completion on the calling thread.
///
/// Events emitted by the effect are queued before the spawn call returns, so
/// a following [`MvuRuntime::process_events`] picks them up.
pub fn blocking_spawner(future: Pin<Box<dyn Future<Output = ()> + Send>>) {
    futures::executor::block_on(future);
}

/// The MVU runtime that orchestrates the event loop.
///
/// It:
/// 1. Initializes the Model and initial Effects via [`MvuLogic::init`]
/// 2. Processes events through [`MvuLogic::update`]
/// 3. Reduces the Model to Props via [`MvuLogic::view`]
/// 4. Delivers Props to the [`Renderer`] for rendering
///
/// Events are queued on a channel through the [`Emitter`] and processed
/// synchronously, in order, on the thread calling
/// [`process_events`](Self::process_events).
///
/// # Type Parameters
///
/// * `Event` - The event type for your application
/// * `Model` - The model/state type for your application
/// * `Props` - The props type produced by the view function
/// * `Logic` - The logic implementation type (implements [`MvuLogic`])
/// * `Render` - The renderer implementation type (implements [`Renderer`])
/// * `Spawn` - The spawner implementation type (implements [`Spawner`])
pub struct MvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    model: Model,
    emitter: Emitter<Event>,
    spawner: Spawn,
    started: bool,
    _props: core::marker::PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render, Spawn>
    MvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Create a new runtime.
    ///
    /// Nothing is rendered until [`start`](Self::start) is called.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The initial state
    /// * `logic` - Application logic implementing MvuLogic
    /// * `renderer` - Platform rendering implementation for rendering Props
    /// * `spawner` - Spawner to execute effects on your chosen runtime
    pub fn new(init_model: Model, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        MvuRuntime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter: Emitter::new(event_sender),
            spawner,
            started: false,
            _props: core::marker::PhantomData,
        }
    }

    /// Initialize the runtime.
    ///
    /// - Uses [`MvuLogic::init`] to derive the starting model and effect.
    /// - Reduces that model to Props and renders them.
    /// - Executes the initial effect through the spawner.
    ///
    /// Calling `start` more than once has no further effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let (init_model, init_effect) = self.logic.init(self.model.clone());

        let initial_props = self.logic.view(&init_model, &self.emitter);
        self.renderer.render(initial_props);

        self.model = init_model;
        self.spawn_effect(init_effect);
    }

    /// Process every queued event, including events queued by effects
    /// while draining.
    ///
    /// Starts the runtime first if [`start`](Self::start) has not been called.
    pub fn process_events(&mut self) {
        self.start();
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
        }
    }

    /// The emitter feeding this runtime's event queue.
    pub fn emitter(&self) -> &Emitter<Event> {
        &self.emitter
    }

    /// The renderer Props are delivered to.
    pub fn renderer(&self) -> &Render {
        &self.renderer
    }

    /// The current model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    fn step(&mut self, event: Event) {
        let (new_model, effect) = self.logic.update(event, &self.model);

        let props = self.logic.view(&new_model, &self.emitter);
        self.renderer.render(props);

        self.model = new_model;
        self.spawn_effect(effect);
    }

    fn spawn_effect(&self, effect: Effect<Event>) {
        let emitter = self.emitter.clone();
        self.spawner
            .spawn(Box::pin(async move { effect.execute(&emitter) }));
    }
}

#[cfg(any(test, feature = "testing"))]
/// Creates a test spawner that executes futures synchronously.
///
/// Returns a function pointer that can be passed directly to runtime
/// constructors.
pub fn create_test_spawner() -> fn(Pin<Box<dyn Future<Output = ()> + Send>>) {
    blocking_spawner
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestMvuRuntime::run`].
pub struct TestMvuDriver<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render, Spawn>
    TestMvuDriver<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Process all queued events.
    ///
    /// Call this after invoking Props callbacks to drive the event loop.
    pub fn process_events(&mut self) {
        self.runtime.process_events();
    }

    /// Queue an event as if a Props callback had emitted it.
    pub fn emit(&self, event: Event) {
        self.runtime.emitter().emit(event);
    }

    /// The current model.
    pub fn model(&self) -> &Model {
        self.runtime.model()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime for MVU with manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Emitted events stay queued until
/// [`process_events`](TestMvuDriver::process_events) is called on the
/// driver returned by [`run`](Self::run).
///
/// ```rust
/// use traffic_light_mvu::{
///     create_test_spawner, ClickTarget, Lamp, PanelEvent, PanelLayout, TestMvuRuntime,
///     TestRenderer, TrafficLightLogic, TrafficLightModel,
/// };
///
/// let renderer = TestRenderer::new();
/// let runtime = TestMvuRuntime::new(
///     TrafficLightModel::default(),
///     TrafficLightLogic::new(PanelLayout::default()).unwrap(),
///     renderer.clone(),
///     create_test_spawner(),
/// );
/// let mut driver = runtime.run();
///
/// driver.emit(PanelEvent::Clicked(ClickTarget::new("goButton")));
/// driver.process_events();
///
/// assert_eq!(driver.model().lit, Some(Lamp::Go));
/// ```
pub struct TestMvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render, Spawn>
    TestMvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Create a new test runtime.
    pub fn new(init_model: Model, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        TestMvuRuntime {
            runtime: MvuRuntime::new(init_model, logic, renderer, spawner),
        }
    }

    /// Initializes the runtime and returns a driver for manual event processing.
    ///
    /// Renders the initial state and executes the initial effect. Events the
    /// initial effect emits stay queued until the driver processes them.
    pub fn run(mut self) -> TestMvuDriver<Event, Model, Props, Logic, Render, Spawn> {
        self.runtime.start();

        TestMvuDriver {
            runtime: self.runtime,
        }
    }
}
