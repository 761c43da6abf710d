//! Renderer abstraction for rendering Props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for rendering Props.
///
/// A renderer is the host surface of the application: the page, terminal or
/// display that shows the Props and routes user input back through the
/// callbacks the Props carry.
///
/// The [`render`](Self::render) method is called whenever the model changes,
/// receiving fresh Props derived from the current state via
/// [`MvuLogic::view`](crate::MvuLogic::view).
///
/// # Example
///
/// ```rust
/// use traffic_light_mvu::{PanelProps, Renderer};
///
/// struct LitLampPrinter;
///
/// impl Renderer<PanelProps> for LitLampPrinter {
///     fn render(&mut self, props: PanelProps) {
///         match props.lit_lamp() {
///             Some(lamp) => println!("{lamp} is lit"),
///             None => println!("all lamps off"),
///         }
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so one clone can be handed to the
/// runtime while the test keeps another to inspect renders.
///
/// # Example
///
/// ```rust
/// use traffic_light_mvu::{
///     create_test_spawner, PanelLayout, TestMvuRuntime, TestRenderer, TrafficLightLogic,
///     TrafficLightModel,
/// };
///
/// let renderer = TestRenderer::new();
/// let logic = TrafficLightLogic::new(PanelLayout::default()).unwrap();
///
/// let runtime = TestMvuRuntime::new(
///     TrafficLightModel::default(),
///     logic,
///     renderer.clone(),
///     create_test_spawner(),
/// );
/// let _driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].lit_lamp(), None);
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
struct InternalTestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for InternalTestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a boxed renderer to pass to the runtime.
    ///
    /// The returned renderer shares the same capture storage as this
    /// TestRenderer.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send> {
        Box::new(InternalTestRenderer {
            renders: self.renders.clone(),
        })
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Use this to make assertions on Props or to invoke Props callbacks.
    /// Callbacks only queue events, so invoking them while the renders are
    /// borrowed does not re-enter the renderer.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
