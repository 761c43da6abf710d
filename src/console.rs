//! Text renderer for the control panel.

use std::io::Write;

use tracing::warn;

use crate::{ClickTarget, PanelProps, Renderer};

/// Draws each render as one line of `element=color` pairs and keeps the
/// panel's click listener so input can be routed back.
///
/// ```text
/// stopLight=red slowLight=#000000 goLight=#000000
/// ```
pub struct ConsolePanel<W: Write> {
    out: W,
    on_click: Option<Box<dyn Fn(ClickTarget) + Send>>,
}

impl<W: Write> ConsolePanel<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            on_click: None,
        }
    }

    /// Click an element of the most recently rendered panel.
    pub fn click(&self, target: impl Into<ClickTarget>) {
        let target = target.into();
        match &self.on_click {
            Some(on_click) => on_click(target),
            None => warn!(element = %target, "click before the panel was rendered, ignoring"),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer<PanelProps> for ConsolePanel<W> {
    fn render(&mut self, props: PanelProps) {
        let PanelProps { lamps, on_click } = props;

        let line = lamps
            .iter()
            .map(|view| format!("{}={}", view.element_id, view.color))
            .collect::<Vec<_>>()
            .join(" ");
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(error = %err, "failed to draw panel");
        }

        self.on_click = Some(on_click);
    }
}
