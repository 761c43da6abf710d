//! Element identities and colors of the host control panel.

use core::fmt;

use serde::Deserialize;

use crate::{Lamp, LayoutError};

/// Identity of the element that received a click.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClickTarget(String);

impl ClickTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClickTarget {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ClickTarget {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ClickTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element identities the control panel is wired to.
///
/// Buttons live inside `control_panel`; lamps live inside `traffic_light`.
/// All identities must be non-empty and distinct, see
/// [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelLayout {
    pub control_panel: String,
    pub traffic_light: String,
    pub stop_button: String,
    pub slow_button: String,
    pub go_button: String,
    pub stop_light: String,
    pub slow_light: String,
    pub go_light: String,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            control_panel: "controlPanel".into(),
            traffic_light: "traffic-light".into(),
            stop_button: "stopButton".into(),
            slow_button: "slowButton".into(),
            go_button: "goButton".into(),
            stop_light: "stopLight".into(),
            slow_light: "slowLight".into(),
            go_light: "goLight".into(),
        }
    }
}

impl PanelLayout {
    /// Identity of the button requesting `lamp`.
    pub fn button_for(&self, lamp: Lamp) -> &str {
        match lamp {
            Lamp::Stop => &self.stop_button,
            Lamp::Slow => &self.slow_button,
            Lamp::Go => &self.go_button,
        }
    }

    /// Identity of the lamp element itself.
    pub fn lamp_element(&self, lamp: Lamp) -> &str {
        match lamp {
            Lamp::Stop => &self.stop_light,
            Lamp::Slow => &self.slow_light,
            Lamp::Go => &self.go_light,
        }
    }

    /// The lamp requested by a click on `target`, if `target` is one of the
    /// control buttons.
    pub fn resolve(&self, target: &ClickTarget) -> Option<Lamp> {
        Lamp::ALL
            .into_iter()
            .find(|lamp| self.button_for(*lamp) == target.as_str())
    }

    /// Whether `target` is the lamp housing or one of its lamps.
    ///
    /// Those elements sit outside the control panel, so clicks on them never
    /// reach its listener.
    pub fn is_outside_panel(&self, target: &ClickTarget) -> bool {
        let id = target.as_str();
        id == self.traffic_light
            || Lamp::ALL
                .into_iter()
                .any(|lamp| self.lamp_element(lamp) == id)
    }

    /// Turn a line of console input into a click target.
    ///
    /// An empty line clicks the control panel itself, a lamp name (`stop`,
    /// `slow`, `go`) clicks that lamp's button, anything else is taken as an
    /// element identity verbatim.
    pub fn interpret(&self, input: &str) -> ClickTarget {
        let input = input.trim();
        if input.is_empty() {
            return ClickTarget::new(self.control_panel.as_str());
        }
        match Lamp::from_name(input) {
            Some(lamp) => ClickTarget::new(self.button_for(lamp)),
            None => ClickTarget::new(input),
        }
    }

    fn identities(&self) -> [(&'static str, &str); 8] {
        [
            ("control panel", self.control_panel.as_str()),
            ("traffic light", self.traffic_light.as_str()),
            ("stop button", self.stop_button.as_str()),
            ("slow button", self.slow_button.as_str()),
            ("go button", self.go_button.as_str()),
            ("stop light", self.stop_light.as_str()),
            ("slow light", self.slow_light.as_str()),
            ("go light", self.go_light.as_str()),
        ]
    }

    /// Check that every identity is present and unambiguous.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let identities = self.identities();
        for (index, &(role, id)) in identities.iter().enumerate() {
            if id.is_empty() {
                return Err(LayoutError::EmptyIdentity { role });
            }
            if let Some(&(first, _)) = identities[..index].iter().find(|&&(_, other)| other == id) {
                return Err(LayoutError::DuplicateIdentity {
                    id: id.to_string(),
                    first,
                    second: role,
                });
            }
        }
        Ok(())
    }
}

/// Colors a lamp is painted with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub off: String,
    pub stop: String,
    pub slow: String,
    pub go: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            off: "#000000".into(),
            stop: "red".into(),
            slow: "yellow".into(),
            go: "green".into(),
        }
    }
}

impl Palette {
    /// The color `lamp` shows when lit.
    pub fn on_color(&self, lamp: Lamp) -> &str {
        match lamp {
            Lamp::Stop => &self.stop,
            Lamp::Slow => &self.slow,
            Lamp::Go => &self.go,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let colors = [
            ("off", &self.off),
            ("stop", &self.stop),
            ("slow", &self.slow),
            ("go", &self.go),
        ];
        match colors.into_iter().find(|(_, color)| color.is_empty()) {
            Some((role, _)) => Err(LayoutError::EmptyColor { role }),
            None => Ok(()),
        }
    }
}
