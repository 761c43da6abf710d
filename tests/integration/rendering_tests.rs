use mockall::{mock, predicate::function, Sequence};
use traffic_light_mvu::{
    create_test_spawner, Lamp, MvuRuntime, Palette, PanelEvent, PanelLayout, PanelProps, Renderer,
    TrafficLightLogic, TrafficLightModel,
};

use super::build_panel_test;

mock! {
    PanelRenderer {}

    impl Renderer<PanelProps> for PanelRenderer {
        fn render(&mut self, props: PanelProps);
    }
}

fn lit(expected: Option<Lamp>) -> impl Fn(&PanelProps) -> bool {
    move |props: &PanelProps| props.lit_lamp() == expected
}

#[test]
fn given_clicks_should_render_once_per_click_in_order() {
    let mut renderer = MockPanelRenderer::new();
    let mut seq = Sequence::new();
    for expected in [None, Some(Lamp::Slow), None] {
        renderer
            .expect_render()
            .with(function(lit(expected)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }

    let logic = TrafficLightLogic::new(PanelLayout::default()).unwrap();
    let mut runtime = MvuRuntime::new(
        TrafficLightModel::default(),
        logic,
        renderer,
        create_test_spawner(),
    );
    runtime.start();

    runtime.emitter().emit(PanelEvent::Clicked("slowButton".into()));
    runtime.emitter().emit(PanelEvent::Clicked("nowhere".into()));
    runtime.process_events();
}

#[test]
fn given_lamp_views_should_carry_lamp_element_identities_in_order() {
    let test = build_panel_test().build();

    test.with_latest(|props| {
        let ids: Vec<_> = props.lamps.iter().map(|view| view.element_id.as_str()).collect();
        assert_eq!(ids, ["stopLight", "slowLight", "goLight"]);
        let lamps: Vec<_> = props.lamps.iter().map(|view| view.lamp).collect();
        assert_eq!(lamps, Lamp::ALL);
    });
}

#[test]
fn given_a_custom_palette_should_paint_with_it() {
    let mut test = build_panel_test()
        .given_palette(Palette {
            off: "gray".into(),
            go: "lime".into(),
            ..Palette::default()
        })
        .build();

    test.click("goButton");

    test.with_latest(|props| {
        assert_eq!(props.color_of(Lamp::Go), "lime");
        assert_eq!(props.color_of(Lamp::Stop), "gray");
        assert_eq!(props.color_of(Lamp::Slow), "gray");
    });
}

#[test]
fn given_an_invalid_palette_should_refuse_to_build() {
    let result = TrafficLightLogic::new(PanelLayout::default()).and_then(|logic| {
        logic.with_palette(Palette {
            stop: String::new(),
            ..Palette::default()
        })
    });

    assert!(result.is_err());
}
