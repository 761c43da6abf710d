//! Click dispatcher for the traffic light control panel.
//!
//! Every click inside the control panel turns all lamps off, then lights the
//! lamp whose button was clicked. Clicks inside the panel on anything other
//! than a control button leave every lamp off. Clicks on the lamp housing or
//! its lamps are outside the panel and change nothing.

use tracing::{debug, trace};

use crate::{ClickTarget, Effect, Emitter, Lamp, LayoutError, MvuLogic, Palette, PanelLayout};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    /// A click landed on the element identified by the target.
    Clicked(ClickTarget),
}

/// Which lamp, if any, is lit.
///
/// Holding a single optional lamp keeps at most one lamp on at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrafficLightModel {
    pub lit: Option<Lamp>,
}

/// How one lamp element is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LampView {
    pub lamp: Lamp,
    pub element_id: String,
    pub color: String,
    pub lit: bool,
}

/// Renderable snapshot of the control panel.
pub struct PanelProps {
    /// Stop, slow and go lamps, in that order.
    pub lamps: [LampView; 3],
    /// Click listener attached to the control panel.
    pub on_click: Box<dyn Fn(ClickTarget) + Send>,
}

impl PanelProps {
    pub fn lamp(&self, lamp: Lamp) -> &LampView {
        match lamp {
            Lamp::Stop => &self.lamps[0],
            Lamp::Slow => &self.lamps[1],
            Lamp::Go => &self.lamps[2],
        }
    }

    pub fn color_of(&self, lamp: Lamp) -> &str {
        &self.lamp(lamp).color
    }

    pub fn lit_lamp(&self) -> Option<Lamp> {
        self.lamps.iter().find(|view| view.lit).map(|view| view.lamp)
    }

    /// Deliver a click to the panel's listener.
    pub fn click(&self, target: impl Into<ClickTarget>) {
        (self.on_click)(target.into());
    }
}

/// [`MvuLogic`] for the control panel.
///
/// Built once with a validated [`PanelLayout`]; the optional startup script
/// is replayed as clicks right after the first render.
pub struct TrafficLightLogic {
    layout: PanelLayout,
    palette: Palette,
    script: Vec<ClickTarget>,
}

impl TrafficLightLogic {
    pub fn new(layout: PanelLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self {
            layout,
            palette: Palette::default(),
            script: Vec::new(),
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Result<Self, LayoutError> {
        palette.validate()?;
        self.palette = palette;
        Ok(self)
    }

    pub fn with_script(mut self, script: impl IntoIterator<Item = ClickTarget>) -> Self {
        self.script = script.into_iter().collect();
        self
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    fn lamp_view(&self, lamp: Lamp, lit: Option<Lamp>) -> LampView {
        let is_lit = lit == Some(lamp);
        let color = if is_lit {
            self.palette.on_color(lamp)
        } else {
            self.palette.off.as_str()
        };
        LampView {
            lamp,
            element_id: self.layout.lamp_element(lamp).to_string(),
            color: color.to_string(),
            lit: is_lit,
        }
    }
}

impl MvuLogic<PanelEvent, TrafficLightModel, PanelProps> for TrafficLightLogic {
    fn init(&self, model: TrafficLightModel) -> (TrafficLightModel, Effect<PanelEvent>) {
        if self.script.is_empty() {
            return (model, Effect::none());
        }
        debug!(clicks = self.script.len(), "replaying startup script");
        let effect = Effect::batch(
            self.script
                .iter()
                .map(|target| Effect::just(PanelEvent::Clicked(target.clone())))
                .collect(),
        );
        (model, effect)
    }

    fn update(
        &self,
        event: PanelEvent,
        model: &TrafficLightModel,
    ) -> (TrafficLightModel, Effect<PanelEvent>) {
        match event {
            PanelEvent::Clicked(target) => {
                if self.layout.is_outside_panel(&target) {
                    trace!(element = %target, "click outside the control panel, ignoring");
                    return (model.clone(), Effect::none());
                }
                let lit = self.layout.resolve(&target);
                match lit {
                    Some(lamp) => debug!(element = %target, %lamp, "lamp lit"),
                    None => trace!(element = %target, "not a control button, all lamps off"),
                }
                (TrafficLightModel { lit }, Effect::none())
            }
        }
    }

    fn view(&self, model: &TrafficLightModel, emitter: &Emitter<PanelEvent>) -> PanelProps {
        let emitter = emitter.clone();
        PanelProps {
            lamps: Lamp::ALL.map(|lamp| self.lamp_view(lamp, model.lit)),
            on_click: Box::new(move |target| emitter.emit(PanelEvent::Clicked(target))),
        }
    }
}
