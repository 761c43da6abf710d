use traffic_light_mvu::{
    create_test_spawner, ClickTarget, Palette, PanelEvent, PanelLayout, PanelProps,
    TestMvuDriver, TestMvuRuntime, TestRenderer, TrafficLightLogic, TrafficLightModel,
};

mod dispatch_tests;
mod rendering_tests;

type PanelDriver = TestMvuDriver<
    PanelEvent,
    TrafficLightModel,
    PanelProps,
    TrafficLightLogic,
    TestRenderer<PanelProps>,
    fn(core::pin::Pin<Box<dyn core::future::Future<Output = ()> + Send>>),
>;

pub(crate) struct PanelTest {
    pub(crate) driver: PanelDriver,
    pub(crate) renders: TestRenderer<PanelProps>,
}

impl PanelTest {
    /// Click through the most recent render's listener and process the click.
    pub(crate) fn click(&mut self, target: &str) {
        self.renders.with_renders(|renders| {
            if let Some(props) = renders.last() {
                props.click(target);
            }
        });
        self.driver.process_events();
    }

    pub(crate) fn with_latest<R>(&self, f: impl FnOnce(&PanelProps) -> R) -> R {
        self.renders.with_renders(|renders| {
            f(renders.last().expect("panel rendered at least once"))
        })
    }
}

pub(crate) struct PanelTestBuilder {
    layout: PanelLayout,
    palette: Palette,
    script: Vec<ClickTarget>,
}

pub(crate) fn build_panel_test() -> PanelTestBuilder {
    PanelTestBuilder {
        layout: PanelLayout::default(),
        palette: Palette::default(),
        script: Vec::new(),
    }
}

impl PanelTestBuilder {
    pub(crate) fn given_layout(mut self, layout: PanelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub(crate) fn given_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub(crate) fn given_startup_script(mut self, script: &[&str]) -> Self {
        self.script = script.iter().map(|id| ClickTarget::new(*id)).collect();
        self
    }

    pub(crate) fn build(self) -> PanelTest {
        let renders = TestRenderer::new();
        let logic = TrafficLightLogic::new(self.layout)
            .and_then(|logic| logic.with_palette(self.palette))
            .expect("valid panel layout")
            .with_script(self.script);

        let runtime = TestMvuRuntime::new(
            TrafficLightModel::default(),
            logic,
            renders.clone(),
            create_test_spawner(),
        );

        PanelTest {
            driver: runtime.run(),
            renders,
        }
    }
}
