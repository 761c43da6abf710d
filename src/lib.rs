//! A traffic light control panel built on a small Model-View-Update (MVU)
//! runtime.
//!
//! Clicking one of three control buttons (stop, slow, go) lights the matching
//! lamp and turns the other two off. Clicks inside the panel that miss every
//! button turn all lamps off.
//!
//! The runtime half ([`MvuRuntime`], [`MvuLogic`], [`Effect`], [`Emitter`],
//! [`Renderer`]) is generic; [`TrafficLightLogic`] supplies the panel's
//! behavior and [`ConsolePanel`] draws it as text.
//!
//! ## Example
//!
//! ```rust
//! use traffic_light_mvu::{
//!     blocking_spawner, ConsolePanel, MvuRuntime, PanelLayout, TrafficLightLogic,
//!     TrafficLightModel,
//! };
//!
//! let logic = TrafficLightLogic::new(PanelLayout::default()).unwrap();
//! let mut runtime = MvuRuntime::new(
//!     TrafficLightModel::default(),
//!     logic,
//!     ConsolePanel::new(Vec::new()),
//!     blocking_spawner,
//! );
//! runtime.start();
//!
//! runtime.renderer().click("stopButton");
//! runtime.process_events();
//!
//! let drawn = String::from_utf8(runtime.renderer().writer().clone()).unwrap();
//! assert_eq!(
//!     drawn.lines().last(),
//!     Some("stopLight=red slowLight=#000000 goLight=#000000"),
//! );
//! ```

mod config;
mod console;
mod effect;
mod emitter;
mod error;
mod lamp;
mod layout;
mod logic;
mod renderer;
mod runtime;
mod traffic_light;

pub use config::Settings;
pub use console::ConsolePanel;
pub use effect::Effect;
pub use emitter::Emitter;
pub use error::{ConfigError, LayoutError};
pub use lamp::Lamp;
pub use layout::{ClickTarget, Palette, PanelLayout};
pub use logic::MvuLogic;
pub use renderer::Renderer;
pub use runtime::{blocking_spawner, MvuRuntime, Spawner};
pub use traffic_light::{LampView, PanelEvent, PanelProps, TrafficLightLogic, TrafficLightModel};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, TestMvuDriver, TestMvuRuntime};
