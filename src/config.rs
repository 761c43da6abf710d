//! File-based settings for the control panel.
//!
//! ```toml
//! script = ["stop", "goButton"]
//!
//! [layout]
//! control_panel = "controlPanel"
//! stop_button = "stopButton"
//!
//! [palette]
//! off = "#000000"
//! go = "lime"
//! ```
//!
//! Every key is optional. Script entries go through
//! [`PanelLayout::interpret`], so lamp names work as well as element ids.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{ClickTarget, ConfigError, Palette, PanelLayout, TrafficLightLogic};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub layout: PanelLayout,
    pub palette: Palette,
    pub script: Vec<String>,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(raw)?;
        settings.layout.validate()?;
        settings.palette.validate()?;
        Ok(settings)
    }

    /// Queue more startup clicks after the configured script.
    pub fn append_script<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script.extend(entries.into_iter().map(Into::into));
    }

    /// Script entries resolved to click targets.
    pub fn script_targets(&self) -> Vec<ClickTarget> {
        self.script
            .iter()
            .map(|entry| self.layout.interpret(entry))
            .collect()
    }

    pub fn into_logic(self) -> Result<TrafficLightLogic, ConfigError> {
        let script = self.script_targets();
        let logic = TrafficLightLogic::new(self.layout)?
            .with_palette(self.palette)?
            .with_script(script);
        Ok(logic)
    }
}
